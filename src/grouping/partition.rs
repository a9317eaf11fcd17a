//! Single-dimension partitioning.
//!
//! Every strategy runs the same bucketing pass: walk the cards once, append
//! each to its bucket (creating buckets in first-seen order), then order the
//! surviving buckets by the dimension's rule. Card order inside a bucket is
//! input order.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::cards::Card;
use crate::error::GroupingError;
use crate::metadata::MetadataIndex;

use super::collation::Collator;
use super::config::GroupingConfig;
use super::dimension::{GroupingDimension, NONE_KEY};
use super::group::GroupingResult;
use super::ordering::{compare_named, compare_ranked, compare_slots};

/// Segment of the single bucket produced by `GroupingDimension::None`.
pub const ALL_KEY: &str = "all";

/// Segment for level 0 cards under `GroupingDimension::BaseUpgrades`.
pub const LEVEL0_KEY: &str = "level0";

/// Segment for upgraded cards under `GroupingDimension::BaseUpgrades`.
pub const UPGRADE_KEY: &str = "upgrade";

/// Segment for permanent cards under `GroupingDimension::Slot`.
pub const PERMANENT_KEY: &str = "permanent";

/// Segment for dual-faction cards under `GroupingDimension::Faction`.
pub const MULTICLASS_KEY: &str = "multiclass";

/// The only subtype buckets, in display order.
pub const SUBTYPE_KEYS: [&str; 3] = [NONE_KEY, "weakness", "basicweakness"];

/// Collaborators a partition call reads from.
pub(crate) struct PartitionContext<'c> {
    pub metadata: &'c MetadataIndex,
    pub collator: &'c dyn Collator,
    pub config: &'c GroupingConfig,
}

type Bucket<'a, K> = (K, Vec<&'a Card>);

/// Bucket cards by key, keeping first-seen bucket order.
///
/// `key_of` returns `Ok(None)` to leave a card out of every bucket.
fn collect_buckets<'a, K, F>(cards: &[&'a Card], mut key_of: F) -> Result<Vec<Bucket<'a, K>>, GroupingError>
where
    K: Eq + Hash + Clone,
    F: FnMut(&Card) -> Result<Option<K>, GroupingError>,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut buckets: Vec<Bucket<'a, K>> = Vec::new();

    for &card in cards {
        let Some(key) = key_of(card)? else {
            continue;
        };
        match index.get(&key) {
            Some(&slot) => buckets[slot].1.push(card),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push((key, vec![card]));
            }
        }
    }

    Ok(buckets)
}

/// Fill a fixed list of buckets, dropping empty ones. Order is the list order.
fn fixed_buckets<'a, const N: usize>(
    cards: &[&'a Card],
    keys: [&'static str; N],
    slot_of: impl Fn(&Card) -> Option<usize>,
) -> Vec<Bucket<'a, &'static str>> {
    let mut buckets: Vec<Bucket<'a, &'static str>> =
        keys.into_iter().map(|key| (key, Vec::new())).collect();
    for &card in cards {
        if let Some(slot) = slot_of(card) {
            buckets[slot].1.push(card);
        }
    }
    buckets.retain(|(_, cards)| !cards.is_empty());
    buckets
}

fn numeric_segment(value: Option<i32>) -> String {
    value.map_or_else(|| NONE_KEY.to_string(), |v| v.to_string())
}

fn into_results<'a, K>(
    buckets: Vec<Bucket<'a, K>>,
    dimension: GroupingDimension,
    segment: impl Fn(K) -> String,
) -> Vec<GroupingResult<'a>> {
    buckets
        .into_iter()
        .map(|(key, cards)| GroupingResult::new(segment(key), dimension.as_str(), cards))
        .collect()
}

/// Split `cards` along one dimension.
///
/// Returns non-empty groups in the dimension's order. Every card lands in
/// exactly one group, except under `Subtype`, which only keeps the three
/// weakness buckets.
pub(crate) fn partition<'a>(
    cards: &[&'a Card],
    dimension: GroupingDimension,
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let groups = match dimension {
        GroupingDimension::None => by_none(cards),
        GroupingDimension::Type => by_type(cards, ctx)?,
        GroupingDimension::Slot => by_slot(cards, ctx)?,
        GroupingDimension::Level => by_number(cards, dimension, |c| c.xp)?,
        GroupingDimension::BaseUpgrades => by_base_upgrades(cards),
        GroupingDimension::Faction => by_faction(cards, ctx)?,
        GroupingDimension::EncounterSet => by_encounter_set(cards, ctx)?,
        GroupingDimension::Cost => by_number(cards, dimension, |c| c.cost)?,
        GroupingDimension::Cycle => by_cycle(cards, ctx)?,
        GroupingDimension::Pack => by_pack(cards, ctx)?,
        GroupingDimension::Subtype => by_subtype(cards),
    };

    trace!(
        dimension = %dimension,
        cards = cards.len(),
        groups = groups.len(),
        "partitioned cards"
    );
    Ok(groups)
}

fn by_none<'a>(cards: &[&'a Card]) -> Vec<GroupingResult<'a>> {
    if cards.is_empty() {
        return Vec::new();
    }
    vec![GroupingResult::new(
        ALL_KEY,
        GroupingDimension::None.as_str(),
        cards.to_vec(),
    )]
}

fn by_type<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let mut buckets = collect_buckets(cards, |c| Ok(Some(c.type_code.clone())))?;
    buckets.sort_by(|(a, _), (b, _)| {
        compare_ranked(
            (a.as_str(), ctx.config.type_rank(a)),
            (b.as_str(), ctx.config.type_rank(b)),
            ctx.collator,
        )
    });
    Ok(into_results(buckets, GroupingDimension::Type, |k| k))
}

fn by_slot<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let mut buckets = collect_buckets(cards, |c| {
        let key = if c.permanent {
            PERMANENT_KEY.to_string()
        } else {
            c.slot.clone().unwrap_or_else(|| NONE_KEY.to_string())
        };
        Ok(Some(key))
    })?;
    buckets.sort_by(|(a, _), (b, _)| compare_slots(a, b, ctx.collator));
    Ok(into_results(buckets, GroupingDimension::Slot, |k| k))
}

/// Level and cost: `none` first, then ascending.
fn by_number<'a>(
    cards: &[&'a Card],
    dimension: GroupingDimension,
    value_of: impl Fn(&Card) -> Option<i32>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let mut buckets = collect_buckets(cards, |c| Ok(Some(value_of(c))))?;
    // Option orders None before Some.
    buckets.sort_by_key(|(value, _)| *value);
    Ok(into_results(buckets, dimension, numeric_segment))
}

fn by_base_upgrades<'a>(cards: &[&'a Card]) -> Vec<GroupingResult<'a>> {
    let buckets = fixed_buckets(cards, [LEVEL0_KEY, UPGRADE_KEY], |c| {
        Some(usize::from(c.is_upgrade()))
    });
    into_results(buckets, GroupingDimension::BaseUpgrades, str::to_string)
}

fn by_faction<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let mut buckets = collect_buckets(cards, |c| {
        let key = if c.is_multiclass() {
            MULTICLASS_KEY.to_string()
        } else {
            c.faction_code.clone().unwrap_or_else(|| NONE_KEY.to_string())
        };
        Ok(Some(key))
    })?;
    buckets.sort_by(|(a, _), (b, _)| {
        // Factionless cards go last.
        (a == NONE_KEY).cmp(&(b == NONE_KEY)).then_with(|| {
            compare_ranked(
                (a.as_str(), ctx.config.faction_rank(a)),
                (b.as_str(), ctx.config.faction_rank(b)),
                ctx.collator,
            )
        })
    });
    Ok(into_results(buckets, GroupingDimension::Faction, |k| k))
}

fn by_encounter_set<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let mut buckets = collect_buckets(cards, |c| {
        Ok(Some(
            c.encounter_code.clone().unwrap_or_else(|| NONE_KEY.to_string()),
        ))
    })?;
    buckets.sort_by(|(a, _), (b, _)| {
        compare_named(
            encounter_display(a, ctx.metadata),
            encounter_display(b, ctx.metadata),
            ctx.collator,
        )
    });
    Ok(into_results(buckets, GroupingDimension::EncounterSet, |k| k))
}

/// Encounter code paired with its display name; unnamed sets use the code.
/// The `none` bucket has no display name.
fn encounter_display<'k>(code: &'k str, metadata: &'k MetadataIndex) -> Option<(&'k str, &'k str)> {
    if code == NONE_KEY {
        return None;
    }
    let name = metadata
        .encounter_set(code)
        .map_or(code, |set| set.name.as_str());
    Some((code, name))
}

fn by_cycle<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let buckets = collect_buckets(cards, |c| {
        let cycle = ctx.metadata.cycle_for_pack(&c.pack_code)?;
        Ok(Some(cycle.code.clone()))
    })?;

    let mut positioned = buckets
        .into_iter()
        .map(|bucket| -> Result<_, GroupingError> {
            let position = ctx.metadata.require_cycle(&bucket.0)?.position;
            Ok((position, bucket))
        })
        .collect::<Result<Vec<_>, _>>()?;
    positioned.sort_by_key(|(position, _)| *position);

    Ok(into_results(
        positioned.into_iter().map(|(_, bucket)| bucket).collect(),
        GroupingDimension::Cycle,
        |k| k,
    ))
}

/// The pack a card is grouped under: its cycle's reprint pack for its card
/// category if one exists, otherwise the pack it was printed in.
fn resolve_pack(card: &Card, ctx: &PartitionContext<'_>) -> Result<String, GroupingError> {
    let pack = ctx.metadata.require_pack(&card.pack_code)?;
    if ctx.config.resolve_reprints {
        if let Some(reprint) = ctx.metadata.reprint_pack(&pack.cycle_code, card.is_encounter()) {
            trace!(card = %card.code, from = %pack.code, to = %reprint.code, "reprint redirect");
            return Ok(reprint.code.clone());
        }
    }
    Ok(pack.code.clone())
}

fn by_pack<'a>(
    cards: &[&'a Card],
    ctx: &PartitionContext<'_>,
) -> Result<Vec<GroupingResult<'a>>, GroupingError> {
    let buckets = collect_buckets(cards, |c| resolve_pack(c, ctx).map(Some))?;

    let mut positioned = buckets
        .into_iter()
        .map(|bucket| -> Result<_, GroupingError> {
            let pack = ctx.metadata.require_pack(&bucket.0)?;
            let cycle = ctx.metadata.require_cycle(&pack.cycle_code)?;
            Ok(((cycle.position, pack.position), bucket))
        })
        .collect::<Result<Vec<_>, _>>()?;
    positioned.sort_by_key(|(position, _)| *position);

    Ok(into_results(
        positioned.into_iter().map(|(_, bucket)| bucket).collect(),
        GroupingDimension::Pack,
        |k| k,
    ))
}

fn by_subtype<'a>(cards: &[&'a Card]) -> Vec<GroupingResult<'a>> {
    let buckets = fixed_buckets(cards, SUBTYPE_KEYS, |c| match c.subtype_code.as_deref() {
        None => Some(0),
        Some(subtype) => SUBTYPE_KEYS[1..]
            .iter()
            .position(|key| *key == subtype)
            .map(|idx| idx + 1),
    });
    into_results(buckets, GroupingDimension::Subtype, str::to_string)
}
