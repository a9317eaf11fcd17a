//! Group results produced by partitioning.

use serde::Serialize;
use smallvec::SmallVec;

use crate::cards::Card;

/// Separator between segments of a composite key or type path.
pub const KEY_SEPARATOR: char = '|';

/// Key segments; hierarchies rarely go deeper than four levels.
pub type KeySegments<'k> = SmallVec<[&'k str; 4]>;

/// A non-empty group of cards.
///
/// `key` is a single segment (`"guardian"`) for a depth-1 group or a
/// `|`-joined path (`"core|guardian"`) for nested ones. `group_type` is the
/// matching path of dimension names (`"cycle|faction"`).
///
/// Groups borrow the caller's cards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GroupingResult<'a> {
    /// Cards in this group, in group order.
    pub cards: Vec<&'a Card>,

    /// Full key of the group.
    pub key: String,

    /// Dimension path of the group.
    #[serde(rename = "type")]
    pub group_type: String,
}

impl<'a> GroupingResult<'a> {
    /// Create a depth-1 group.
    pub fn new(key: impl Into<String>, group_type: impl Into<String>, cards: Vec<&'a Card>) -> Self {
        Self {
            cards,
            key: key.into(),
            group_type: group_type.into(),
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if the group holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Depth of the group (1 for top-level groups).
    #[must_use]
    pub fn depth(&self) -> usize {
        key_depth(&self.key)
    }

    /// Key segments from root to this group.
    #[must_use]
    pub fn segments(&self) -> KeySegments<'_> {
        self.key.split(KEY_SEPARATOR).collect()
    }

    /// Key of the parent group, `None` at depth 1.
    #[must_use]
    pub fn parent_key(&self) -> Option<&str> {
        parent_key(&self.key)
    }

    /// Nest `child` under this group, joining keys and type paths.
    pub(crate) fn nest(&self, child: GroupingResult<'a>) -> GroupingResult<'a> {
        GroupingResult {
            cards: child.cards,
            key: join_key(&self.key, &child.key),
            group_type: join_key(&self.group_type, &child.group_type),
        }
    }
}

/// Join two key paths with the separator.
#[must_use]
pub fn join_key(parent: &str, child: &str) -> String {
    let mut key = String::with_capacity(parent.len() + child.len() + 1);
    key.push_str(parent);
    key.push(KEY_SEPARATOR);
    key.push_str(child);
    key
}

/// Drop the last segment of a key path. `None` for single-segment keys.
#[must_use]
pub fn parent_key(key: &str) -> Option<&str> {
    key.rfind(KEY_SEPARATOR).map(|idx| &key[..idx])
}

/// Number of segments in a key path.
#[must_use]
pub fn key_depth(key: &str) -> usize {
    key.matches(KEY_SEPARATOR).count() + 1
}
