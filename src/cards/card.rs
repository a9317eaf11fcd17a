//! Catalog card records.
//!
//! `Card` holds the catalog fields the grouping engine reads. Cards are
//! immutable once built; the engine only places references to them into
//! groups and re-orders those references.

use serde::{Deserialize, Serialize};

/// A single catalog card.
///
/// Field names follow the catalog JSON, so a card list can be deserialized
/// directly.
///
/// ## Example
///
/// ```
/// use ccg_grouping::cards::Card;
///
/// let card = Card::new("01006", "asset")
///     .with_name("Flashlight")
///     .with_faction("neutral")
///     .with_cost(2)
///     .with_xp(0)
///     .with_pack("core");
///
/// assert_eq!(card.cost, Some(2));
/// assert!(!card.is_multiclass());
/// assert!(!card.is_encounter());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique card code.
    pub code: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Card type (asset, event, enemy, ...).
    pub type_code: String,

    /// Primary faction.
    #[serde(default)]
    pub faction_code: Option<String>,

    /// Second faction, present on multiclass cards.
    #[serde(default)]
    pub faction2_code: Option<String>,

    /// Subtype (weakness, basicweakness, ...).
    #[serde(default)]
    pub subtype_code: Option<String>,

    /// Experience level. Absent on cards that have no level at all.
    #[serde(default)]
    pub xp: Option<i32>,

    /// Resource cost. `-2` marks a variable (X) cost.
    #[serde(default)]
    pub cost: Option<i32>,

    /// Encounter set, present on encounter cards.
    #[serde(default)]
    pub encounter_code: Option<String>,

    /// Pack the card was printed in.
    #[serde(default)]
    pub pack_code: String,

    /// Equipment slot.
    #[serde(default)]
    pub slot: Option<String>,

    /// Permanent cards start in play and take no slot.
    #[serde(default)]
    pub permanent: bool,
}

impl Card {
    /// Create a card with a code and type; everything else empty.
    #[must_use]
    pub fn new(code: impl Into<String>, type_code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            type_code: type_code.into(),
            ..Self::default()
        }
    }

    /// Set the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the primary faction.
    #[must_use]
    pub fn with_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction_code = Some(faction.into());
        self
    }

    /// Set the second faction.
    #[must_use]
    pub fn with_second_faction(mut self, faction: impl Into<String>) -> Self {
        self.faction2_code = Some(faction.into());
        self
    }

    /// Set the subtype.
    #[must_use]
    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype_code = Some(subtype.into());
        self
    }

    /// Set the experience level.
    #[must_use]
    pub fn with_xp(mut self, xp: i32) -> Self {
        self.xp = Some(xp);
        self
    }

    /// Set the resource cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i32) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the encounter set.
    #[must_use]
    pub fn with_encounter(mut self, encounter: impl Into<String>) -> Self {
        self.encounter_code = Some(encounter.into());
        self
    }

    /// Set the pack.
    #[must_use]
    pub fn with_pack(mut self, pack: impl Into<String>) -> Self {
        self.pack_code = pack.into();
        self
    }

    /// Set the slot.
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Mark the card permanent.
    #[must_use]
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self
    }

    /// True if the card belongs to two factions.
    #[must_use]
    pub fn is_multiclass(&self) -> bool {
        self.faction2_code.is_some()
    }

    /// True for encounter cards (anything with an encounter set).
    #[must_use]
    pub fn is_encounter(&self) -> bool {
        self.encounter_code.is_some()
    }

    /// True if the card has a non-zero experience level.
    #[must_use]
    pub fn is_upgrade(&self) -> bool {
        self.xp.is_some_and(|xp| xp > 0)
    }
}
