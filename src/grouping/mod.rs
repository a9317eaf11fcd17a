//! Grouping engine: single-dimension partitioning and multi-level hierarchies.
//!
//! ## Key Types
//!
//! - `GroupingDimension`: The closed set of grouping axes
//! - `CardGrouper`: Runs partitions and hierarchy builds against metadata
//! - `GroupingResult`: A non-empty group of borrowed cards with a composite key
//! - `GroupedCards`: Leaf groups plus the flat `GroupHierarchy` index
//! - `Collator`: Pluggable locale-aware string ordering
//!
//! ## Keys
//!
//! Group keys are `|`-joined paths of segments, one per dimension
//! (`"core|guardian|2"`), with a matching path of dimension names as the
//! group type (`"cycle|faction|cost"`). Cards without a value along a
//! dimension land in the `"none"` bucket.

pub mod collation;
pub mod config;
pub mod dimension;
pub mod group;
pub mod grouper;
pub mod hierarchy;
mod ordering;
pub mod partition;

pub use collation::{Collator, LexicalCollator};
pub use config::GroupingConfig;
pub use dimension::{CardDomain, GroupingDimension, NONE_KEY};
pub use group::{GroupingResult, KEY_SEPARATOR};
pub use grouper::CardGrouper;
pub use hierarchy::{GroupHierarchy, GroupTreeEntry, GroupedCards, HierarchyStats};
pub use partition::{ALL_KEY, LEVEL0_KEY, MULTICLASS_KEY, PERMANENT_KEY, SUBTYPE_KEYS, UPGRADE_KEY};
