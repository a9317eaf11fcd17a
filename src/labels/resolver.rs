//! Section labels for group keys.
//!
//! One branch per dimension. Pack, cycle and encounter-set labels come from
//! metadata names; the rest are translated templates. Anything unrecognized
//! yields an empty string.

use crate::grouping::partition::{
    LEVEL0_KEY, MULTICLASS_KEY, PERMANENT_KEY, UPGRADE_KEY,
};
use crate::grouping::{GroupingDimension, KEY_SEPARATOR, NONE_KEY};
use crate::metadata::MetadataIndex;

use super::translator::Translator;

/// Cost value catalogs use for a variable (X) cost.
pub const VARIABLE_COST: &str = "-2";

const FACTION_NAMES: [(&str, &str); 8] = [
    ("guardian", "Guardian"),
    ("seeker", "Seeker"),
    ("rogue", "Rogue"),
    ("mystic", "Mystic"),
    ("survivor", "Survivor"),
    ("neutral", "Neutral"),
    ("mythos", "Mythos"),
    (MULTICLASS_KEY, "Multiclass"),
];

const TYPE_NAMES: [(&str, &str); 12] = [
    ("investigator", "Investigator"),
    ("asset", "Asset"),
    ("event", "Event"),
    ("skill", "Skill"),
    ("treachery", "Treachery"),
    ("enemy", "Enemy"),
    ("location", "Location"),
    ("act", "Act"),
    ("agenda", "Agenda"),
    ("story", "Story"),
    ("scenario", "Scenario"),
    ("key", "Key"),
];

fn lookup(table: &[(&str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// Display label for one key segment.
///
/// ```
/// use ccg_grouping::grouping::GroupingDimension;
/// use ccg_grouping::labels::{label_for, IdentityTranslator};
/// use ccg_grouping::metadata::MetadataIndex;
///
/// let metadata = MetadataIndex::new();
/// let t = IdentityTranslator;
/// assert_eq!(label_for(GroupingDimension::Cost, "3", &metadata, &t), "Cost: 3");
/// assert_eq!(label_for(GroupingDimension::Cost, "-2", &metadata, &t), "Cost: X");
/// assert_eq!(label_for(GroupingDimension::Subtype, "none", &metadata, &t), "");
/// ```
pub fn label_for(
    dimension: GroupingDimension,
    segment: &str,
    metadata: &MetadataIndex,
    translator: &dyn Translator,
) -> String {
    match dimension {
        GroupingDimension::None => String::new(),
        GroupingDimension::Cycle => metadata
            .cycle(segment)
            .map(|cycle| cycle.name.clone())
            .unwrap_or_default(),
        GroupingDimension::Pack => metadata
            .pack(segment)
            .map(|pack| pack.name.clone())
            .unwrap_or_default(),
        GroupingDimension::EncounterSet => metadata
            .encounter_set(segment)
            .map(|set| set.name.clone())
            .unwrap_or_default(),
        GroupingDimension::Level => match segment {
            NONE_KEY => translator.translate("Level: None", &[]),
            level if level.parse::<i32>().is_ok() => {
                translator.translate("Level {{level}}", &[("level", level)])
            }
            _ => String::new(),
        },
        GroupingDimension::Cost => match segment {
            NONE_KEY => translator.translate("Cost: None", &[]),
            VARIABLE_COST => translator.translate("Cost: X", &[]),
            cost if cost.parse::<i32>().is_ok() => {
                translator.translate("Cost: {{cost}}", &[("cost", cost)])
            }
            _ => String::new(),
        },
        GroupingDimension::Faction => lookup(&FACTION_NAMES, segment)
            .map(|name| translator.translate(name, &[]))
            .unwrap_or_default(),
        GroupingDimension::Type => lookup(&TYPE_NAMES, segment)
            .map(|name| translator.translate(name, &[]))
            .unwrap_or_default(),
        GroupingDimension::Slot => match segment {
            NONE_KEY => translator.translate("No Slot", &[]),
            PERMANENT_KEY => translator.translate("Permanent", &[]),
            slot => translator.translate(slot, &[]),
        },
        GroupingDimension::Subtype => match segment {
            "weakness" => translator.translate("Weakness", &[]),
            "basicweakness" => translator.translate("Basic Weakness", &[]),
            _ => String::new(),
        },
        GroupingDimension::BaseUpgrades => match segment {
            LEVEL0_KEY => translator.translate("Level 0", &[]),
            UPGRADE_KEY => translator.translate("Upgrades", &[]),
            _ => String::new(),
        },
    }
}

/// Label for a full key path, e.g. `"Core Set / Guardian"`.
///
/// `group_type` and `key` are matching `|`-joined paths. Segments with an
/// empty label or an unparseable dimension are skipped.
pub fn path_label(
    group_type: &str,
    key: &str,
    metadata: &MetadataIndex,
    translator: &dyn Translator,
) -> String {
    group_type
        .split(KEY_SEPARATOR)
        .zip(key.split(KEY_SEPARATOR))
        .filter_map(|(dimension, segment)| {
            let dimension = dimension.parse::<GroupingDimension>().ok()?;
            let label = label_for(dimension, segment, metadata, translator);
            (!label.is_empty()).then_some(label)
        })
        .collect::<Vec<_>>()
        .join(" / ")
}
