//! Metadata index for pack, cycle, and encounter-set lookup.
//!
//! The `MetadataIndex` is loaded once by the data layer and shared by every
//! grouping call. It uses `im` persistent maps so views can hold their own
//! copy of the index without paying for a deep clone.

use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::error::GroupingError;

/// A product release. Every pack belongs to exactly one cycle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    /// Unique pack code.
    pub code: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Cycle this pack belongs to.
    pub cycle_code: String,

    /// Position within the cycle (1-based in catalog data).
    pub position: i32,

    /// True for packs that re-release the cards of their cycle.
    #[serde(default)]
    pub reprint: bool,
}

impl Pack {
    /// Create a pack.
    #[must_use]
    pub fn new(code: impl Into<String>, cycle_code: impl Into<String>, position: i32) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            cycle_code: cycle_code.into(),
            position,
            reprint: false,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Mark the pack as a reprint.
    #[must_use]
    pub fn reprint(mut self) -> Self {
        self.reprint = true;
        self
    }
}

/// A cycle of packs (a campaign and its expansions).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cycle {
    /// Unique cycle code.
    pub code: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Release position.
    pub position: i32,
}

impl Cycle {
    /// Create a cycle.
    #[must_use]
    pub fn new(code: impl Into<String>, position: i32) -> Self {
        Self {
            code: code.into(),
            name: String::new(),
            position,
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// A named set of encounter cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterSet {
    /// Unique encounter set code.
    pub code: String,

    /// Display name.
    pub name: String,
}

impl EncounterSet {
    /// Create an encounter set.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Read-only lookup of packs, cycles and encounter sets by code.
///
/// ## Example
///
/// ```
/// use ccg_grouping::metadata::{Cycle, MetadataIndex, Pack};
///
/// let mut index = MetadataIndex::new();
/// index.register_cycle(Cycle::new("core", 1).with_name("Core Set"));
/// index.register_pack(Pack::new("core", "core", 1));
///
/// let cycle = index.cycle_for_pack("core").unwrap();
/// assert_eq!(cycle.name, "Core Set");
/// assert!(index.pack("dwl").is_none());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MetadataIndex {
    packs: ImHashMap<String, Pack>,
    cycles: ImHashMap<String, Cycle>,
    encounter_sets: ImHashMap<String, EncounterSet>,
}

impl MetadataIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index from lists, as the data layer loads them.
    ///
    /// Later entries with a duplicate code replace earlier ones.
    pub fn from_parts(
        packs: impl IntoIterator<Item = Pack>,
        cycles: impl IntoIterator<Item = Cycle>,
        encounter_sets: impl IntoIterator<Item = EncounterSet>,
    ) -> Self {
        let mut index = Self::new();
        for cycle in cycles {
            index.register_cycle(cycle);
        }
        for pack in packs {
            index.register_pack(pack);
        }
        for set in encounter_sets {
            index.register_encounter_set(set);
        }
        index
    }

    /// Add a pack, returning any pack previously stored under its code.
    pub fn register_pack(&mut self, pack: Pack) -> Option<Pack> {
        self.packs.insert(pack.code.clone(), pack)
    }

    /// Add a cycle, returning any cycle previously stored under its code.
    pub fn register_cycle(&mut self, cycle: Cycle) -> Option<Cycle> {
        self.cycles.insert(cycle.code.clone(), cycle)
    }

    /// Add an encounter set, returning any set previously stored under its code.
    pub fn register_encounter_set(&mut self, set: EncounterSet) -> Option<EncounterSet> {
        self.encounter_sets.insert(set.code.clone(), set)
    }

    /// Look up a pack.
    #[must_use]
    pub fn pack(&self, code: &str) -> Option<&Pack> {
        self.packs.get(code)
    }

    /// Look up a cycle.
    #[must_use]
    pub fn cycle(&self, code: &str) -> Option<&Cycle> {
        self.cycles.get(code)
    }

    /// Look up an encounter set.
    #[must_use]
    pub fn encounter_set(&self, code: &str) -> Option<&EncounterSet> {
        self.encounter_sets.get(code)
    }

    /// Look up a pack that a card is guaranteed to reference.
    pub fn require_pack(&self, code: &str) -> Result<&Pack, GroupingError> {
        self.pack(code).ok_or_else(|| GroupingError::UnknownPack {
            pack_code: code.to_string(),
        })
    }

    /// Look up a cycle that a pack is guaranteed to reference.
    pub fn require_cycle(&self, code: &str) -> Result<&Cycle, GroupingError> {
        self.cycle(code).ok_or_else(|| GroupingError::UnknownCycle {
            cycle_code: code.to_string(),
        })
    }

    /// Resolve the cycle a pack belongs to.
    pub fn cycle_for_pack(&self, pack_code: &str) -> Result<&Cycle, GroupingError> {
        let pack = self.require_pack(pack_code)?;
        self.require_cycle(&pack.cycle_code)
    }

    /// Find the reprint pack of a cycle for player or encounter cards.
    ///
    /// Reprint packs use the code `<cycle_code>p` (player cards) or
    /// `<cycle_code>c` (campaign/encounter cards). A pack under that code
    /// only counts if it is flagged as a reprint.
    #[must_use]
    pub fn reprint_pack(&self, cycle_code: &str, encounter: bool) -> Option<&Pack> {
        let suffix = if encounter { 'c' } else { 'p' };
        let code = format!("{cycle_code}{suffix}");
        self.pack(&code).filter(|pack| pack.reprint)
    }

    /// Number of packs.
    #[must_use]
    pub fn pack_count(&self) -> usize {
        self.packs.len()
    }

    /// Number of cycles.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.cycles.len()
    }

    /// Number of encounter sets.
    #[must_use]
    pub fn encounter_set_count(&self) -> usize {
        self.encounter_sets.len()
    }
}
