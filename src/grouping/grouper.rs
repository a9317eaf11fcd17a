//! Entry point for partitioning and hierarchy building.

use std::cmp::Ordering;

use crate::cards::Card;
use crate::error::GroupingError;
use crate::metadata::MetadataIndex;

use super::collation::{Collator, LexicalCollator};
use super::config::GroupingConfig;
use super::dimension::{CardDomain, GroupingDimension};
use super::group::GroupingResult;
use super::hierarchy::{build_hierarchy, GroupedCards};
use super::partition::{partition, PartitionContext};

/// Groups cards against a metadata index.
///
/// Holds only read-only collaborators, so one grouper can serve every
/// re-render of a view. Each call builds its result from scratch.
///
/// ## Example
///
/// ```
/// use ccg_grouping::cards::Card;
/// use ccg_grouping::grouping::{CardGrouper, GroupingDimension};
/// use ccg_grouping::metadata::{Cycle, MetadataIndex, Pack};
///
/// let mut metadata = MetadataIndex::new();
/// metadata.register_cycle(Cycle::new("core", 1));
/// metadata.register_pack(Pack::new("core", "core", 1));
///
/// let cards = vec![
///     Card::new("01020", "asset").with_faction("guardian").with_pack("core"),
///     Card::new("01021", "event").with_faction("guardian").with_pack("core"),
/// ];
///
/// let grouper = CardGrouper::new(&metadata);
/// let grouped = grouper
///     .build_hierarchy(
///         &[GroupingDimension::Faction, GroupingDimension::Type],
///         &cards,
///         |a, b| a.code.cmp(&b.code),
///     )
///     .unwrap();
///
/// assert_eq!(grouped.data[0].key, "guardian|asset");
/// assert_eq!(grouped.hierarchy.get("guardian").unwrap().count, 2);
/// ```
pub struct CardGrouper<'m> {
    metadata: &'m MetadataIndex,
    config: GroupingConfig,
    collator: Box<dyn Collator + 'm>,
}

impl<'m> CardGrouper<'m> {
    /// Create a grouper with the default configuration and collator.
    #[must_use]
    pub fn new(metadata: &'m MetadataIndex) -> Self {
        Self {
            metadata,
            config: GroupingConfig::default(),
            collator: Box::new(LexicalCollator),
        }
    }

    /// Set the configuration.
    #[must_use]
    pub fn with_config(mut self, config: GroupingConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the string collator used for slot and encounter-set order.
    #[must_use]
    pub fn with_collator<C: Collator + 'm>(mut self, collator: C) -> Self {
        self.collator = Box::new(collator);
        self
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Metadata index in use.
    #[must_use]
    pub fn metadata(&self) -> &'m MetadataIndex {
        self.metadata
    }

    fn context(&self) -> PartitionContext<'_> {
        PartitionContext {
            metadata: self.metadata,
            collator: self.collator.as_ref(),
            config: &self.config,
        }
    }

    /// Split cards along a single dimension.
    pub fn partition<'a>(
        &self,
        cards: impl IntoIterator<Item = &'a Card>,
        dimension: GroupingDimension,
    ) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
        let cards: Vec<&'a Card> = cards.into_iter().collect();
        partition(&cards, dimension, &self.context())
    }

    /// Group cards along each dimension in turn and sort every leaf group.
    ///
    /// An empty dimension list groups everything under `"all"`. `sort_fn`
    /// orders cards within each leaf; cards it treats as equal keep their
    /// relative order.
    pub fn build_hierarchy<'a, F>(
        &self,
        dimensions: &[GroupingDimension],
        cards: impl IntoIterator<Item = &'a Card>,
        sort_fn: F,
    ) -> Result<GroupedCards<'a>, GroupingError>
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        build_hierarchy(
            dimensions,
            cards.into_iter().collect(),
            sort_fn,
            &self.context(),
        )
    }

    /// Like `build_hierarchy`, rejecting dimensions outside `domain` first.
    pub fn build_hierarchy_for<'a, F>(
        &self,
        domain: CardDomain,
        dimensions: &[GroupingDimension],
        cards: impl IntoIterator<Item = &'a Card>,
        sort_fn: F,
    ) -> Result<GroupedCards<'a>, GroupingError>
    where
        F: FnMut(&Card, &Card) -> Ordering,
    {
        domain.validate(dimensions)?;
        self.build_hierarchy(dimensions, cards, sort_fn)
    }
}

impl std::fmt::Debug for CardGrouper<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CardGrouper")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
