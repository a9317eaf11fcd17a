//! Card records.
//!
//! ## Key Types
//!
//! - `Card`: Immutable catalog card with the fields grouping reads
//!   (type, factions, subtype, xp, cost, encounter set, pack, slot)

pub mod card;

pub use card::Card;
