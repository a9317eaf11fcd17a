//! Catalog metadata: packs, cycles and encounter sets.
//!
//! The index is read-only during grouping. Every card's `pack_code` must
//! resolve to a pack, and every pack's `cycle_code` to a cycle; the data
//! layer guarantees this and the engine reports violations as errors.

pub mod index;

pub use index::{Cycle, EncounterSet, MetadataIndex, Pack};
