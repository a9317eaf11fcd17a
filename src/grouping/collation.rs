//! Locale-aware string comparison.
//!
//! Slot and encounter-set ordering go through a `Collator` so the host can
//! plug in the user's locale rules. `LexicalCollator` is a locale-free
//! fallback.

use std::cmp::Ordering;

/// Three-way string comparator.
pub trait Collator: Send + Sync {
    /// Compare two display strings.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Case-insensitive comparison with a byte-wise tiebreak.
///
/// Two strings only compare equal if they are identical, so sorting with
/// this collator is total.
#[derive(Clone, Copy, Debug, Default)]
pub struct LexicalCollator;

impl Collator for LexicalCollator {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        let folded = a
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.chars().flat_map(char::to_lowercase));
        folded.then_with(|| a.cmp(b))
    }
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}
