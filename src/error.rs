//! Error type for grouping operations.
//!
//! The engine is total over well-formed input. Errors only surface when the
//! caller breaks the metadata contract (a card points at a pack or cycle the
//! index doesn't know) or hands in a dimension that can't be used.

use thiserror::Error;

use crate::grouping::{CardDomain, GroupingDimension};

/// Errors returned by the partitioner and hierarchy builder.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GroupingError {
    /// A card references a pack code missing from the metadata index.
    #[error("unknown pack code: {pack_code}")]
    UnknownPack { pack_code: String },

    /// A pack references a cycle code missing from the metadata index.
    #[error("unknown cycle code: {cycle_code}")]
    UnknownCycle { cycle_code: String },

    /// A dimension identifier could not be parsed.
    #[error("unknown grouping dimension: {0}")]
    UnknownDimension(String),

    /// A dimension was used outside the domain that allows it.
    #[error("dimension {dimension} is not allowed for {domain} cards")]
    DimensionNotAllowed {
        dimension: GroupingDimension,
        domain: CardDomain,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = GroupingError::UnknownPack {
            pack_code: "zzz".to_string(),
        };
        assert_eq!(err.to_string(), "unknown pack code: zzz");

        let err = GroupingError::DimensionNotAllowed {
            dimension: GroupingDimension::Faction,
            domain: CardDomain::Encounter,
        };
        assert_eq!(
            err.to_string(),
            "dimension faction is not allowed for encounter cards"
        );
    }
}
