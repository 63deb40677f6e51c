//! Property resolution.
//!
//! Bonus properties come from five places: skill-tree allocations, light
//! cone superimposition rank, relic main affixes, relic sub affixes and
//! relic-set piece counts. Skill level deltas from ranks and tree nodes are
//! resolved here too since they walk the same records.

use crate::build::{LevelEntry, SubAffixBuild};
use crate::catalog::Catalog;
use crate::records::{CharacterSkillTreeRecord, PropertyValue};
use crate::sheet::{RelicInfo, RelicSetInfo, StatEntry};
use std::collections::HashMap;
use std::ops::RangeInclusive;

/// Valid character ranks (eidolons).
pub const CHARACTER_RANKS: RangeInclusive<u32> = 0..=6;

/// Valid light cone ranks (superimpositions).
pub const LIGHT_CONE_RANKS: RangeInclusive<u32> = 1..=5;

/// Resolve raw property values through the property catalog.
///
/// Unknown property ids are dropped.
pub fn property_entries(catalog: &Catalog, values: &[PropertyValue]) -> Vec<StatEntry> {
    values
        .iter()
        .filter_map(|value| {
            let property = catalog.property(&value.kind)?;
            Some(StatEntry::property(property, value.value))
        })
        .collect()
}

/// Skill level deltas unlocked by the first `rank` ranks of a character.
///
/// Empty if the character is unknown or `rank` is outside `0..=6`.
pub fn skill_upgrades_from_rank(catalog: &Catalog, character_id: &str, rank: u32) -> Vec<LevelEntry> {
    let Some(character) = catalog.character(character_id) else {
        return Vec::new();
    };
    if !CHARACTER_RANKS.contains(&rank) {
        tracing::debug!(character_id, rank, "character rank out of range");
        return Vec::new();
    }
    character
        .ranks
        .iter()
        .take(rank as usize)
        .filter_map(|rank_id| catalog.character_rank(rank_id))
        .flat_map(|rank| rank.level_up_skills.iter())
        .map(|skill| LevelEntry::new(skill.id.clone(), skill.num))
        .collect()
}

/// Allocated nodes that belong to the character and exist in the catalog.
fn owned_nodes<'a>(
    catalog: &'a Catalog,
    character_id: &str,
    nodes: &'a [LevelEntry],
) -> Vec<(&'a LevelEntry, &'a CharacterSkillTreeRecord)> {
    let Some(character) = catalog.character(character_id) else {
        return Vec::new();
    };
    nodes
        .iter()
        .filter(|node| character.skill_trees.contains(&node.id))
        .filter_map(|node| Some((node, catalog.character_skill_tree(&node.id)?)))
        .collect()
}

/// Skill level deltas granted by skill-tree allocations.
///
/// Each node's level-up amount is multiplied by its allocated level,
/// saturating at `u32::MAX`.
pub fn skill_upgrades_from_tree(
    catalog: &Catalog,
    character_id: &str,
    nodes: &[LevelEntry],
) -> Vec<LevelEntry> {
    owned_nodes(catalog, character_id, nodes)
        .into_iter()
        .flat_map(|(node, record)| {
            record
                .level_up_skills
                .iter()
                .map(move |skill| LevelEntry::new(skill.id.clone(), skill.num.saturating_mul(node.level)))
        })
        .collect()
}

/// Properties granted by skill-tree allocations.
///
/// Uses the step data at `allocated level - 1`; nodes allocated at level 0
/// or beyond their step data contribute nothing.
pub fn properties_from_tree(
    catalog: &Catalog,
    character_id: &str,
    nodes: &[LevelEntry],
) -> Vec<StatEntry> {
    owned_nodes(catalog, character_id, nodes)
        .into_iter()
        .filter_map(|(node, record)| {
            let step = record.levels.get(node.level.checked_sub(1)? as usize)?;
            Some(property_entries(catalog, &step.properties))
        })
        .flatten()
        .collect()
}

/// Properties granted by a light cone at superimposition `rank`.
///
/// Empty if `rank` is outside `1..=5` or the rank record is absent.
pub fn properties_from_light_cone_rank(
    catalog: &Catalog,
    light_cone_id: &str,
    rank: u32,
) -> Vec<StatEntry> {
    let Some(record) = catalog.light_cone_rank(light_cone_id) else {
        return Vec::new();
    };
    if !LIGHT_CONE_RANKS.contains(&rank) {
        tracing::debug!(light_cone_id, rank, "light cone rank out of range");
        return Vec::new();
    }
    record
        .properties
        .get(rank as usize - 1)
        .map(|values| property_entries(catalog, values))
        .unwrap_or_default()
}

/// A relic's main affix at `level`: `base + step * level`.
///
/// `None` if the relic, its main affix group or the affix is unknown, or
/// no main affix id is given.
pub fn main_affix(
    catalog: &Catalog,
    relic_id: &str,
    level: u32,
    main_affix_id: Option<&str>,
) -> Option<StatEntry> {
    let relic = catalog.relic(relic_id)?;
    let affix_id = main_affix_id.filter(|id| !id.is_empty())?;
    let affix = catalog
        .relic_main_affix_group(&relic.main_affix_id)?
        .affixes
        .get(affix_id)?;
    let property = catalog.property(&affix.property)?;
    Some(StatEntry::property(
        property,
        affix.base + affix.step * f64::from(level),
    ))
}

/// A relic's sub affixes: `base * cnt + step * step_count` each.
///
/// Entries that cannot be resolved are skipped. Every output entry carries
/// its `count` and `step`.
pub fn sub_affixes(catalog: &Catalog, relic_id: &str, entries: &[SubAffixBuild]) -> Vec<StatEntry> {
    let Some(group) = catalog
        .relic(relic_id)
        .and_then(|relic| catalog.relic_sub_affix_group(&relic.sub_affix_id))
    else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| {
            let affix = group.affixes.get(&entry.id)?;
            let property = catalog.property(&affix.property)?;
            let value = affix.base * f64::from(entry.cnt) + affix.step * f64::from(entry.step);
            Some(StatEntry::property(property, value).with_pips(entry.cnt, entry.step))
        })
        .collect()
}

/// Active relic-set bonuses for a group of resolved relics.
///
/// Two or more pieces of a set activate its 2-piece bonus, four or more
/// also activate the 4-piece bonus. Sets are reported in the order their
/// first piece appears.
pub fn set_bonuses(catalog: &Catalog, relics: &[RelicInfo]) -> Vec<RelicSetInfo> {
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for relic in relics {
        let count = counts.entry(relic.set_id.as_str()).or_insert(0);
        if *count == 0 {
            order.push(&relic.set_id);
        }
        *count += 1;
    }

    let mut bonuses = Vec::new();
    for set_id in order {
        let count = counts[set_id];
        if count < 2 {
            continue;
        }
        let Some(set) = catalog.relic_set(set_id) else {
            tracing::warn!(set_id, "relic set missing from catalog");
            continue;
        };
        for (tier, num) in [(0usize, 2u8), (1, 4)] {
            if count < usize::from(num) {
                break;
            }
            bonuses.push(RelicSetInfo {
                id: set_id.to_string(),
                name: set.name.clone(),
                icon: set.icon.clone(),
                num,
                desc: set.desc.get(tier).cloned().unwrap_or_default(),
                properties: set
                    .properties
                    .get(tier)
                    .map(|values| property_entries(catalog, values))
                    .unwrap_or_default(),
            });
        }
    }
    bonuses
}
