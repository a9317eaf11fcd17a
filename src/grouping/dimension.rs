//! Grouping dimensions and the domains that allow them.
//!
//! A dimension is one axis cards can be split along. The set is closed:
//! every dimension carries its own key derivation and ordering, selected
//! by a single `match` in the partitioner.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GroupingError;

/// Sentinel segment for cards with no value along a dimension.
pub const NONE_KEY: &str = "none";

/// One axis of grouping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupingDimension {
    /// Everything in a single `"all"` bucket.
    None,
    /// Card type, in the configured type order.
    Type,
    /// Equipment slot, with `permanent` as its own bucket.
    Slot,
    /// Experience level.
    Level,
    /// Level 0 vs upgraded cards.
    BaseUpgrades,
    /// Faction, with multiclass cards pooled.
    Faction,
    /// Encounter set, ordered by display name.
    EncounterSet,
    /// Resource cost.
    Cost,
    /// Cycle of the card's pack.
    Cycle,
    /// Pack, redirected to the cycle's reprint pack when one exists.
    Pack,
    /// Weakness subtypes only.
    Subtype,
}

impl GroupingDimension {
    /// All dimensions, in declaration order.
    pub const ALL: [GroupingDimension; 11] = [
        GroupingDimension::None,
        GroupingDimension::Type,
        GroupingDimension::Slot,
        GroupingDimension::Level,
        GroupingDimension::BaseUpgrades,
        GroupingDimension::Faction,
        GroupingDimension::EncounterSet,
        GroupingDimension::Cost,
        GroupingDimension::Cycle,
        GroupingDimension::Pack,
        GroupingDimension::Subtype,
    ];

    /// Identifier used in keys' type paths and in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GroupingDimension::None => "none",
            GroupingDimension::Type => "type",
            GroupingDimension::Slot => "slot",
            GroupingDimension::Level => "level",
            GroupingDimension::BaseUpgrades => "base_upgrades",
            GroupingDimension::Faction => "faction",
            GroupingDimension::EncounterSet => "encounter_set",
            GroupingDimension::Cost => "cost",
            GroupingDimension::Cycle => "cycle",
            GroupingDimension::Pack => "pack",
            GroupingDimension::Subtype => "subtype",
        }
    }

    /// True if this dimension may leave cards out of every group.
    #[must_use]
    pub const fn may_drop_cards(self) -> bool {
        matches!(self, GroupingDimension::Subtype)
    }
}

impl fmt::Display for GroupingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupingDimension {
    type Err = GroupingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GroupingDimension::ALL
            .into_iter()
            .find(|dimension| dimension.as_str() == s)
            .ok_or_else(|| GroupingError::UnknownDimension(s.to_string()))
    }
}

/// Which half of the catalog a grouping is configured for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardDomain {
    /// Player cards (investigator decks).
    Player,
    /// Encounter cards (scenario decks).
    Encounter,
}

impl CardDomain {
    const PLAYER: [GroupingDimension; 9] = [
        GroupingDimension::BaseUpgrades,
        GroupingDimension::Cost,
        GroupingDimension::Cycle,
        GroupingDimension::Faction,
        GroupingDimension::Level,
        GroupingDimension::Pack,
        GroupingDimension::Slot,
        GroupingDimension::Subtype,
        GroupingDimension::Type,
    ];

    const ENCOUNTER: [GroupingDimension; 5] = [
        GroupingDimension::Cycle,
        GroupingDimension::EncounterSet,
        GroupingDimension::Pack,
        GroupingDimension::Subtype,
        GroupingDimension::Type,
    ];

    /// Dimensions a user may pick in this domain.
    #[must_use]
    pub fn dimensions(self) -> &'static [GroupingDimension] {
        match self {
            CardDomain::Player => &Self::PLAYER,
            CardDomain::Encounter => &Self::ENCOUNTER,
        }
    }

    /// True if the dimension is selectable in this domain.
    ///
    /// `None` is always allowed; it is what an empty selection means.
    #[must_use]
    pub fn allows(self, dimension: GroupingDimension) -> bool {
        dimension == GroupingDimension::None || self.dimensions().contains(&dimension)
    }

    /// Check a whole selection, reporting the first disallowed dimension.
    pub fn validate(self, dimensions: &[GroupingDimension]) -> Result<(), GroupingError> {
        match dimensions.iter().find(|d| !self.allows(**d)) {
            Some(&dimension) => Err(GroupingError::DimensionNotAllowed {
                dimension,
                domain: self,
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Display for CardDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardDomain::Player => f.write_str("player"),
            CardDomain::Encounter => f.write_str("encounter"),
        }
    }
}
