//! Grouping configuration.

use serde::{Deserialize, Serialize};

/// Domain orderings and switches used by the partitioner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupingConfig {
    /// Type codes in display order.
    /// Types not listed sort after these, collated by code.
    pub type_order: Vec<String>,

    /// Faction codes in display order (including `multiclass`).
    /// Factions not listed sort after these; cards without a faction last.
    pub faction_order: Vec<String>,

    /// Redirect cards to their cycle's reprint pack under the pack dimension.
    pub resolve_reprints: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            type_order: to_strings(&[
                "investigator",
                "asset",
                "event",
                "skill",
                "treachery",
                "enemy",
                "location",
                "act",
                "agenda",
                "story",
                "scenario",
                "key",
            ]),
            faction_order: to_strings(&[
                "guardian",
                "seeker",
                "rogue",
                "mystic",
                "survivor",
                "neutral",
                "multiclass",
                "mythos",
            ]),
            resolve_reprints: true,
        }
    }
}

impl GroupingConfig {
    /// Replace the type order.
    #[must_use]
    pub fn with_type_order<S: Into<String>>(mut self, order: impl IntoIterator<Item = S>) -> Self {
        self.type_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the faction order.
    #[must_use]
    pub fn with_faction_order<S: Into<String>>(
        mut self,
        order: impl IntoIterator<Item = S>,
    ) -> Self {
        self.faction_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable reprint resolution.
    #[must_use]
    pub fn with_reprint_resolution(mut self, enabled: bool) -> Self {
        self.resolve_reprints = enabled;
        self
    }

    /// Rank of a type code, `None` if unlisted.
    #[must_use]
    pub fn type_rank(&self, type_code: &str) -> Option<usize> {
        self.type_order.iter().position(|t| t == type_code)
    }

    /// Rank of a faction code, `None` if unlisted.
    #[must_use]
    pub fn faction_rank(&self, faction_code: &str) -> Option<usize> {
        self.faction_order.iter().position(|f| f == faction_code)
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}
