//! Multi-level grouping.
//!
//! The hierarchy is a flat map from full group key to `GroupTreeEntry`.
//! Each entry points at its parent by key; nothing owns its children.
//! Leaf groups live in `GroupedCards::data`, in pre-order of the implied
//! tree, and that list is what a view renders.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::error::GroupingError;

use super::dimension::GroupingDimension;
use super::group::{key_depth, parent_key, GroupingResult};
use super::partition::{partition, PartitionContext};

/// Bookkeeping for one group at any depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTreeEntry {
    /// Full key of the group.
    pub key: String,

    /// Dimension path of the group.
    #[serde(rename = "type")]
    pub group_type: String,

    /// Cards in the group when it was registered.
    pub count: usize,

    /// Key of the immediate ancestor, `None` at depth 1.
    pub parent: Option<String>,
}

impl GroupTreeEntry {
    /// Entry describing `group`, with the parent taken from its key path.
    #[must_use]
    pub fn of(group: &GroupingResult<'_>) -> Self {
        Self {
            key: group.key.clone(),
            group_type: group.group_type.clone(),
            count: group.len(),
            parent: parent_key(&group.key).map(str::to_string),
        }
    }

    /// Depth of the group (1 for top-level groups).
    #[must_use]
    pub fn depth(&self) -> usize {
        key_depth(&self.key)
    }
}

/// Flat key→entry index of every group at every depth.
///
/// Iteration follows registration order, so output is deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupHierarchy {
    entries: FxHashMap<String, GroupTreeEntry>,

    /// Keys in first-registration order.
    order: Vec<String>,
}

impl GroupHierarchy {
    /// Create an empty hierarchy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry. Re-registering a key replaces the entry in place.
    pub fn register(&mut self, entry: GroupTreeEntry) {
        if !self.entries.contains_key(&entry.key) {
            self.order.push(entry.key.clone());
        }
        self.entries.insert(entry.key.clone(), entry);
    }

    /// Look up an entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&GroupTreeEntry> {
        self.entries.get(key)
    }

    /// Check if a key is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Depth of the entry at `key`, if present.
    #[must_use]
    pub fn depth(&self, key: &str) -> Option<usize> {
        self.get(key).map(GroupTreeEntry::depth)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the hierarchy is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &GroupTreeEntry> {
        self.order.iter().filter_map(|key| self.entries.get(key))
    }

    /// Depth-1 entries, in partition order.
    pub fn roots(&self) -> impl Iterator<Item = &GroupTreeEntry> {
        self.iter().filter(|entry| entry.parent.is_none())
    }

    /// Direct children of `key`, in partition order.
    pub fn children<'h>(&'h self, key: &'h str) -> impl Iterator<Item = &'h GroupTreeEntry> {
        self.iter()
            .filter(move |entry| entry.parent.as_deref() == Some(key))
    }

    /// Ancestors of `key`, nearest first.
    pub fn ancestors<'h>(&'h self, key: &str) -> impl Iterator<Item = &'h GroupTreeEntry> {
        let mut next = self.get(key).and_then(|entry| entry.parent.as_deref());
        std::iter::from_fn(move || {
            let entry = self.get(next?)?;
            next = entry.parent.as_deref();
            Some(entry)
        })
    }

    /// All entries in pre-order: each group followed by its subtree.
    ///
    /// This is the order section headers appear in a rendered list.
    #[must_use]
    pub fn outline(&self) -> Vec<&GroupTreeEntry> {
        let mut children: FxHashMap<&str, Vec<&GroupTreeEntry>> = FxHashMap::default();
        let mut roots = Vec::new();
        for entry in self.iter() {
            match entry.parent.as_deref() {
                Some(parent) => children.entry(parent).or_default().push(entry),
                None => roots.push(entry),
            }
        }

        let mut out = Vec::with_capacity(self.len());
        let mut stack: Vec<&GroupTreeEntry> = roots.into_iter().rev().collect();
        while let Some(entry) = stack.pop() {
            out.push(entry);
            if let Some(kids) = children.get(entry.key.as_str()) {
                stack.extend(kids.iter().rev());
            }
        }
        out
    }
}

/// Output of a hierarchy build.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupedCards<'a> {
    /// Leaf groups at the final depth, in pre-order.
    pub data: Vec<GroupingResult<'a>>,

    /// Entries for every group at every depth.
    pub hierarchy: GroupHierarchy,
}

impl<'a> GroupedCards<'a> {
    /// Summary counts.
    #[must_use]
    pub fn stats(&self) -> HierarchyStats {
        HierarchyStats {
            group_count: self.hierarchy.len(),
            leaf_count: self.data.len(),
            card_count: self.data.iter().map(GroupingResult::len).sum(),
            max_depth: self
                .hierarchy
                .iter()
                .map(GroupTreeEntry::depth)
                .max()
                .unwrap_or(0),
        }
    }

    /// Leaf groups not hidden by a collapsed section.
    ///
    /// A leaf is hidden when its own key or any ancestor key is collapsed.
    #[must_use]
    pub fn visible_groups<S: BuildHasher>(
        &self,
        collapsed: &HashSet<String, S>,
    ) -> Vec<&GroupingResult<'a>> {
        if collapsed.is_empty() {
            return self.data.iter().collect();
        }
        self.data
            .iter()
            .filter(|group| {
                let mut key = Some(group.key.as_str());
                while let Some(k) = key {
                    if collapsed.contains(k) {
                        return false;
                    }
                    key = parent_key(k);
                }
                true
            })
            .collect()
    }

    /// Leaf group by full key.
    #[must_use]
    pub fn group(&self, key: &str) -> Option<&GroupingResult<'a>> {
        self.data.iter().find(|group| group.key == key)
    }
}

/// Summary of a grouped result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HierarchyStats {
    /// Entries at all depths.
    pub group_count: usize,

    /// Leaf groups.
    pub leaf_count: usize,

    /// Cards across all leaves.
    pub card_count: usize,

    /// Deepest entry.
    pub max_depth: usize,
}

/// Partition `cards` along each dimension in turn.
///
/// Each pass rebuilds the group list: every group is replaced, at the same
/// position, by its children under the next dimension. Leaves are sorted
/// with `sort_fn` at the end.
pub(crate) fn build_hierarchy<'a, F>(
    dimensions: &[GroupingDimension],
    cards: Vec<&'a Card>,
    mut sort_fn: F,
    ctx: &PartitionContext<'_>,
) -> Result<GroupedCards<'a>, GroupingError>
where
    F: FnMut(&Card, &Card) -> Ordering,
{
    let dimensions: &[GroupingDimension] = if dimensions.is_empty() {
        &[GroupingDimension::None]
    } else {
        dimensions
    };

    let mut hierarchy = GroupHierarchy::new();
    let mut groups = partition(&cards, dimensions[0], ctx)?;

    if dimensions.len() == 1 {
        for group in &groups {
            hierarchy.register(GroupTreeEntry::of(group));
        }
    }

    for &dimension in &dimensions[1..] {
        let mut expanded = Vec::with_capacity(groups.len());
        for group in &groups {
            hierarchy.register(GroupTreeEntry::of(group));
            for child in partition(&group.cards, dimension, ctx)? {
                let child = group.nest(child);
                hierarchy.register(GroupTreeEntry::of(&child));
                expanded.push(child);
            }
        }
        groups = expanded;
    }

    // `sort_by` is stable.
    for group in &mut groups {
        group.cards.sort_by(|a, b| sort_fn(*a, *b));
    }

    debug!(
        dimensions = dimensions.len(),
        cards = cards.len(),
        groups = hierarchy.len(),
        leaves = groups.len(),
        "built card hierarchy"
    );

    Ok(GroupedCards {
        data: groups,
        hierarchy,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;
    use crate::grouping::collation::LexicalCollator;
    use crate::grouping::config::GroupingConfig;
    use crate::metadata::{Cycle, MetadataIndex, Pack};

    fn metadata() -> MetadataIndex {
        MetadataIndex::from_parts(
            vec![Pack::new("core", "core", 1), Pack::new("dwl", "dwl", 1)],
            vec![Cycle::new("core", 1), Cycle::new("dwl", 2)],
            vec![],
        )
    }

    fn build<'a>(
        dimensions: &[GroupingDimension],
        cards: &'a [Card],
    ) -> GroupedCards<'a> {
        let metadata = metadata();
        let config = GroupingConfig::default();
        let ctx = PartitionContext {
            metadata: &metadata,
            collator: &LexicalCollator,
            config: &config,
        };
        build_hierarchy(dimensions, cards.iter().collect(), |a, b| a.code.cmp(&b.code), &ctx)
            .unwrap()
    }

    fn leaf_keys(grouped: &GroupedCards<'_>) -> Vec<String> {
        grouped.data.iter().map(|g| g.key.clone()).collect()
    }

    fn sample_cards() -> Vec<Card> {
        vec![
            Card::new("05", "event").with_faction("rogue").with_pack("dwl"),
            Card::new("01", "asset").with_faction("guardian").with_pack("core"),
            Card::new("04", "asset").with_faction("rogue").with_pack("dwl"),
            Card::new("02", "asset").with_faction("guardian").with_pack("dwl"),
            Card::new("03", "skill").with_faction("guardian").with_pack("core"),
        ]
    }

    #[test]
    fn test_empty_dimensions_mean_none() {
        let cards = sample_cards();
        let grouped = build(&[], &cards);
        assert_eq!(leaf_keys(&grouped), vec!["all"]);
        let entry = grouped.hierarchy.get("all").unwrap();
        assert_eq!(entry.count, 5);
        assert_eq!(entry.parent, None);
        assert_eq!(entry.group_type, "none");
    }

    #[test]
    fn test_single_dimension_registers_roots() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Faction], &cards);
        assert_eq!(leaf_keys(&grouped), vec!["guardian", "rogue"]);
        assert_eq!(grouped.hierarchy.len(), 2);
        assert_eq!(grouped.hierarchy.get("guardian").unwrap().count, 3);
    }

    #[test]
    fn test_two_levels_pre_order() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Cycle, GroupingDimension::Faction], &cards);

        assert_eq!(
            leaf_keys(&grouped),
            vec!["core|guardian", "dwl|guardian", "dwl|rogue"]
        );
        assert!(grouped.data.iter().all(|g| g.group_type == "cycle|faction"));

        let core = grouped.hierarchy.get("core").unwrap();
        assert_eq!(core.count, 2);
        assert_eq!(core.parent, None);
        assert_eq!(core.group_type, "cycle");

        let leaf = grouped.hierarchy.get("dwl|rogue").unwrap();
        assert_eq!(leaf.count, 2);
        assert_eq!(leaf.parent.as_deref(), Some("dwl"));
    }

    #[test]
    fn test_three_levels() {
        let cards = sample_cards();
        let grouped = build(
            &[
                GroupingDimension::Cycle,
                GroupingDimension::Faction,
                GroupingDimension::Type,
            ],
            &cards,
        );

        assert_eq!(
            leaf_keys(&grouped),
            vec![
                "core|guardian|asset",
                "core|guardian|skill",
                "dwl|guardian|asset",
                "dwl|rogue|asset",
                "dwl|rogue|event",
            ]
        );
        let mid = grouped.hierarchy.get("dwl|rogue").unwrap();
        assert_eq!(mid.parent.as_deref(), Some("dwl"));
        assert_eq!(mid.count, 2);
        assert_eq!(
            grouped.hierarchy.get("dwl|rogue|event").unwrap().parent.as_deref(),
            Some("dwl|rogue")
        );
        assert_eq!(grouped.stats().max_depth, 3);
        assert_eq!(grouped.stats().group_count, 2 + 3 + 5);
    }

    #[test]
    fn test_leaves_sorted_by_comparator() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Type], &cards);
        let assets: Vec<_> = grouped.data[0].cards.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(assets, vec!["01", "02", "04"]);
    }

    #[test]
    fn test_group_without_children_keeps_entry() {
        let cards = vec![
            Card::new("1", "treachery").with_pack("core").with_subtype("ultra-rare"),
            Card::new("2", "treachery").with_pack("dwl").with_subtype("weakness"),
        ];
        let grouped = build(&[GroupingDimension::Cycle, GroupingDimension::Subtype], &cards);

        assert_eq!(leaf_keys(&grouped), vec!["dwl|weakness"]);
        let core = grouped.hierarchy.get("core").unwrap();
        assert_eq!(core.count, 1);
        assert_eq!(grouped.hierarchy.children("core").count(), 0);
    }

    #[test]
    fn test_children_roots_and_ancestors() {
        let cards = sample_cards();
        let grouped = build(
            &[
                GroupingDimension::Cycle,
                GroupingDimension::Faction,
                GroupingDimension::Type,
            ],
            &cards,
        );
        let h = &grouped.hierarchy;

        let roots: Vec<_> = h.roots().map(|e| e.key.as_str()).collect();
        assert_eq!(roots, vec!["core", "dwl"]);

        let kids: Vec<_> = h.children("dwl").map(|e| e.key.as_str()).collect();
        assert_eq!(kids, vec!["dwl|guardian", "dwl|rogue"]);

        let up: Vec<_> = h.ancestors("dwl|rogue|event").map(|e| e.key.as_str()).collect();
        assert_eq!(up, vec!["dwl|rogue", "dwl"]);
        assert_eq!(h.ancestors("core").count(), 0);

        assert_eq!(h.depth("dwl"), Some(1));
        assert_eq!(h.depth("dwl|rogue|event"), Some(3));
        assert_eq!(h.depth("dwl|mystic"), None);
    }

    #[test]
    fn test_outline_is_pre_order() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Cycle, GroupingDimension::Faction], &cards);
        let outline: Vec<_> = grouped
            .hierarchy
            .outline()
            .into_iter()
            .map(|e| e.key.as_str())
            .collect();
        assert_eq!(
            outline,
            vec!["core", "core|guardian", "dwl", "dwl|guardian", "dwl|rogue"]
        );
    }

    #[test]
    fn test_visible_groups() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Cycle, GroupingDimension::Faction], &cards);

        let none = FxHashSet::default();
        assert_eq!(grouped.visible_groups(&none).len(), 3);

        let mut collapsed = FxHashSet::default();
        collapsed.insert("dwl".to_string());
        let visible: Vec<_> = grouped
            .visible_groups(&collapsed)
            .into_iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(visible, vec!["core|guardian"]);

        let leaf: HashSet<String> = ["core|guardian".to_string()].into_iter().collect();
        let visible: Vec<_> = grouped
            .visible_groups(&leaf)
            .into_iter()
            .map(|g| g.key.as_str())
            .collect();
        assert_eq!(visible, vec!["dwl|guardian", "dwl|rogue"]);
    }

    #[test]
    fn test_stats() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Faction, GroupingDimension::Type], &cards);
        let stats = grouped.stats();
        assert_eq!(stats.card_count, 5);
        assert_eq!(stats.leaf_count, grouped.data.len());
        assert_eq!(stats.max_depth, 2);
    }

    #[test]
    fn test_register_replaces_without_reordering() {
        let mut h = GroupHierarchy::new();
        let entry = |key: &str, count| GroupTreeEntry {
            key: key.to_string(),
            group_type: "type".to_string(),
            count,
            parent: None,
        };
        h.register(entry("a", 1));
        h.register(entry("b", 1));
        h.register(entry("a", 4));

        let keys: Vec<_> = h.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(h.get("a").unwrap().count, 4);
    }

    #[test]
    fn test_hierarchy_serialization() {
        let cards = sample_cards();
        let grouped = build(&[GroupingDimension::Cycle, GroupingDimension::Faction], &cards);
        let json = serde_json::to_string(&grouped.hierarchy).unwrap();
        let back: GroupHierarchy = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grouped.hierarchy);
    }
}
