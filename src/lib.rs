//! # ccg-grouping
//!
//! Hierarchical grouping engine for browsing a large card-game catalog.
//!
//! Given a flat list of cards, a metadata index (packs, cycles, encounter
//! sets) and an ordered list of grouping dimensions, the engine builds a
//! multi-level partition of the cards that a UI can render as a collapsible,
//! sectioned list.
//!
//! ## Design Principles
//!
//! 1. **Pure**: No I/O and no shared mutable state. Every call builds its
//!    result from scratch and borrows the caller's cards.
//!
//! 2. **Flat Hierarchy**: Groups at every depth live in one key→entry map
//!    with parent back-references. Keys are `|`-joined segment paths.
//!
//! 3. **Closed Dimension Set**: Each grouping policy is a variant of
//!    `GroupingDimension`, dispatched from a single `match`.
//!
//! ## Modules
//!
//! - `cards`: Catalog card records
//! - `metadata`: Pack, cycle and encounter-set index
//! - `grouping`: Partitioner, hierarchy builder, configuration, collation
//! - `labels`: Section labels and the localization seam
//! - `error`: `GroupingError`

pub mod cards;
pub mod error;
pub mod grouping;
pub mod labels;
pub mod metadata;

// Re-export commonly used types
pub use crate::cards::Card;

pub use crate::error::GroupingError;

pub use crate::grouping::{
    CardDomain, CardGrouper, Collator, GroupHierarchy, GroupTreeEntry, GroupedCards,
    GroupingConfig, GroupingDimension, GroupingResult, HierarchyStats, LexicalCollator,
    NONE_KEY,
};

pub use crate::labels::{label_for, path_label, IdentityTranslator, TableTranslator, Translator};

pub use crate::metadata::{Cycle, EncounterSet, MetadataIndex, Pack};
