//! Bucket orderings that don't reduce to a plain key sort.

use std::cmp::Ordering;

use super::collation::Collator;
use super::dimension::NONE_KEY;
use super::partition::PERMANENT_KEY;

/// `none` first, then named slots collated, then `permanent`.
fn slot_rank(key: &str) -> u8 {
    match key {
        NONE_KEY => 0,
        PERMANENT_KEY => 2,
        _ => 1,
    }
}

pub(crate) fn compare_slots(a: &str, b: &str, collator: &dyn Collator) -> Ordering {
    slot_rank(a)
        .cmp(&slot_rank(b))
        .then_with(|| collator.compare(a, b))
}

/// Order codes by a priority rank; unranked codes follow, collated.
pub(crate) fn compare_ranked(
    a: (&str, Option<usize>),
    b: (&str, Option<usize>),
    collator: &dyn Collator,
) -> Ordering {
    match (a.1, b.1) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => collator.compare(a.0, b.0),
    }
}

/// `None` first; named values collate, ties broken by code.
pub(crate) fn compare_named(
    a: Option<(&str, &str)>,
    b: Option<(&str, &str)>,
    collator: &dyn Collator,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some((code_a, name_a)), Some((code_b, name_b))) => collator
            .compare(name_a, name_b)
            .then_with(|| code_a.cmp(code_b)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grouping::collation::LexicalCollator;

    #[test]
    fn test_slot_order() {
        let mut slots = vec!["permanent", "Hand", "none", "accessory"];
        slots.sort_by(|a, b| compare_slots(a, b, &LexicalCollator));
        assert_eq!(slots, vec!["none", "accessory", "Hand", "permanent"]);
    }

    #[test]
    fn test_ranked_order() {
        let c = LexicalCollator;
        assert_eq!(compare_ranked(("a", Some(2)), ("b", Some(1)), &c), Ordering::Greater);
        assert_eq!(compare_ranked(("z", Some(9)), ("a", None), &c), Ordering::Less);
        assert_eq!(compare_ranked(("b", None), ("a", None), &c), Ordering::Greater);
    }

    #[test]
    fn test_named_order() {
        let c = LexicalCollator;
        assert_eq!(compare_named(None, Some(("x", "X")), &c), Ordering::Less);
        assert_eq!(
            compare_named(Some(("b", "Midnight Masks")), Some(("a", "Cult of Umordhoth")), &c),
            Ordering::Greater
        );
        assert_eq!(
            compare_named(Some(("a", "Same")), Some(("b", "Same")), &c),
            Ordering::Less
        );
    }
}
