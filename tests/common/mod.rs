//! Shared fixture catalog for integration tests.
//!
//! A trimmed-down slice of real reference data: one Hunt character with a
//! matching and a mismatching light cone, a four-piece relic set, a planar
//! set, and the properties they touch.

#![allow(dead_code)]

use railstat::{Catalog, Domain, MemorySource};
use serde_json::{json, Value};

// Written as raw text since `json!` sorts keys, and field lookups take the
// first property in table order.
const PROPERTIES: &str = r#"{
    "BaseHP": {"type": "BaseHP", "name": "Base HP", "field": "hp", "order": 1},
    "BaseAttack": {"type": "BaseAttack", "name": "Base ATK", "field": "atk", "order": 2},
    "BaseDefence": {"type": "BaseDefence", "name": "Base DEF", "field": "def", "order": 3},
    "BaseSpeed": {"type": "BaseSpeed", "name": "Base SPD", "field": "spd", "order": 4},
    "CriticalChanceBase": {"type": "CriticalChanceBase", "name": "CRIT Rate", "field": "crit_rate", "affix": true, "percent": true, "order": 5},
    "CriticalDamageBase": {"type": "CriticalDamageBase", "name": "CRIT DMG", "field": "crit_dmg", "affix": true, "percent": true, "order": 6},
    "HPDelta": {"type": "HPDelta", "name": "HP", "field": "hp", "affix": true, "order": 7},
    "AttackDelta": {"type": "AttackDelta", "name": "ATK", "field": "atk", "affix": true, "order": 8},
    "SpeedDelta": {"type": "SpeedDelta", "name": "SPD", "field": "spd", "affix": true, "order": 9},
    "HPAddedRatio": {"type": "HPAddedRatio", "name": "HP", "field": "hp", "affix": true, "ratio": true, "percent": true, "order": 10},
    "AttackAddedRatio": {"type": "AttackAddedRatio", "name": "ATK", "field": "atk", "affix": true, "ratio": true, "percent": true, "order": 11},
    "SpeedAddedRatio": {"type": "SpeedAddedRatio", "name": "SPD", "field": "spd", "ratio": true, "percent": true, "order": 12},
    "QuantumAddedRatio": {"type": "QuantumAddedRatio", "name": "Quantum DMG Boost", "field": "quantum_dmg", "affix": true, "percent": true, "order": 13}
}"#;

/// Seven promotion tiers, each raising both curve bases by a fixed amount.
fn promotion(id: &str, curves: &[(&str, f64, f64, f64)]) -> Value {
    let values: Vec<Value> = (0..7u32)
        .map(|tier| {
            let mut tier_values = serde_json::Map::new();
            for &(field, base, per_tier, step) in curves {
                tier_values.insert(
                    field.to_string(),
                    json!({"base": base + per_tier * f64::from(tier), "step": step}),
                );
            }
            Value::Object(tier_values)
        })
        .collect();
    json!({"id": id, "values": values})
}

fn tables() -> Vec<(Domain, Value)> {
    vec![
        (
            Domain::Characters,
            json!({
                "1102": {
                    "id": "1102", "name": "Seele", "tag": "seele", "rarity": 5,
                    "path": "Rogue", "element": "Quantum", "max_sp": 120,
                    "ranks": ["11021", "11022", "11023", "11024", "11025", "11026"],
                    "skills": ["110201", "110202", "110203", "110204"],
                    "skill_trees": ["1102001", "1102002", "1102101", "1102201", "1102202"],
                    "icon": "icon/character/1102.png",
                    "preview": "image/character_preview/1102.png",
                    "portrait": "image/character_portrait/1102.png"
                }
            }),
        ),
        (
            Domain::CharacterRanks,
            json!({
                "11021": {"id": "11021", "rank": 1, "desc": "Nothing Is Impossible", "level_up_skills": [], "icon": "icon/skill/1102_rank1.png"},
                "11022": {"id": "11022", "rank": 2, "desc": "Fantastic Flow", "level_up_skills": [], "icon": "icon/skill/1102_rank2.png"},
                "11023": {"id": "11023", "rank": 3, "desc": "Butterfly Flurry",
                    "level_up_skills": [{"id": "110202", "num": 2}, {"id": "110201", "num": 1}],
                    "icon": "icon/skill/1102_rank3.png"},
                "11024": {"id": "11024", "rank": 4, "desc": "Flitting Phantasm", "level_up_skills": [], "icon": "icon/skill/1102_rank4.png"},
                "11025": {"id": "11025", "rank": 5, "desc": "Dazzling Tumult",
                    "level_up_skills": [{"id": "110203", "num": 2}, {"id": "110204", "num": 2}],
                    "icon": "icon/skill/1102_rank5.png"},
                "11026": {"id": "11026", "rank": 6, "desc": "Shattering Shambles", "level_up_skills": [], "icon": "icon/skill/1102_rank6.png"}
            }),
        ),
        (
            Domain::CharacterSkills,
            json!({
                "110201": {
                    "id": "110201", "name": "Thwack", "max_level": 9, "element": "Quantum",
                    "type": "Normal", "type_text": "Basic ATK", "effect": "SingleAttack", "effect_text": "Single Target",
                    "simple_desc": "Deals minor Quantum DMG to a single enemy.",
                    "desc": "Deals Quantum DMG equal to #1[i]% of Seele's ATK to a single enemy.",
                    "params": [[0.5], [0.6], [0.7], [0.8], [0.9], [1.0], [1.1], [1.2], [1.3]],
                    "icon": "icon/skill/1102_basic_atk.png"
                },
                "110202": {
                    "id": "110202", "name": "Sheathed Blade", "max_level": 15, "element": "Quantum",
                    "type": "BPSkill", "type_text": "Skill", "effect": "SingleAttack", "effect_text": "Single Target",
                    "simple_desc": "Increases SPD and deals Quantum DMG to a single enemy.",
                    "desc": "Increases SPD by #2[i]% for #3[i] turn(s) and deals #1[i]% ATK.",
                    "params": [[1.1, 0.25, 2.0], [1.21, 0.25, 2.0], [1.32, 0.25, 2.0]],
                    "icon": "icon/skill/1102_skill.png"
                },
                "110203": {
                    "id": "110203", "name": "Butterfly Flurry", "max_level": 15, "element": "Quantum",
                    "type": "Ultra", "type_text": "Ultimate", "effect": "SingleAttack", "effect_text": "Single Target",
                    "desc": "Deals Quantum DMG equal to #1[f1]% of Seele's ATK.",
                    "params": [[2.55]],
                    "icon": "icon/skill/1102_ultimate.png"
                },
                "110204": {
                    "id": "110204", "name": "Resurgence", "max_level": 15, "element": "Quantum",
                    "type": "Talent", "type_text": "Talent", "effect": "Enhance", "effect_text": "Enhance",
                    "desc": "Seele's DMG increases by #1[i]% while Buffed.",
                    "params": [[0.4]]
                }
            }),
        ),
        (
            Domain::CharacterSkillTrees,
            json!({
                "1102001": {"id": "1102001", "max_level": 6, "anchor": "Point01",
                    "level_up_skills": [{"id": "110201", "num": 1}], "icon": "icon/skill/1102_basic_atk.png"},
                "1102002": {"id": "1102002", "max_level": 10, "anchor": "Point02",
                    "level_up_skills": [{"id": "110202", "num": 1}], "icon": "icon/skill/1102_skill.png"},
                "1102101": {"id": "1102101", "max_level": 1, "anchor": "Point06", "pre_points": ["1102002"],
                    "levels": [{"promotion": 2, "properties": []}], "icon": "icon/skill/1102_skilltree1.png"},
                "1102201": {"id": "1102201", "max_level": 1, "anchor": "Point09", "pre_points": ["1102101"],
                    "levels": [{"promotion": 2, "properties": [{"type": "AttackAddedRatio", "value": 0.04}]}],
                    "icon": "icon/property/IconAttack.png"},
                "1102202": {"id": "1102202", "max_level": 1, "anchor": "Point10", "pre_points": ["1102201"],
                    "levels": [{"promotion": 3, "properties": [{"type": "QuantumAddedRatio", "value": 0.032}]}],
                    "icon": "icon/property/IconQuantumAddedRatio.png"}
            }),
        ),
        (
            Domain::CharacterPromotions,
            json!({
                "1102": promotion("1102", &[
                    ("hp", 120.0, 80.0, 6.0),
                    ("atk", 80.0, 50.0, 4.0),
                    ("def", 50.0, 30.0, 2.5),
                    ("spd", 115.0, 0.0, 0.0),
                    ("crit_rate", 0.05, 0.0, 0.0),
                    ("crit_dmg", 0.5, 0.0, 0.0),
                ])
            }),
        ),
        (
            Domain::LightCones,
            json!({
                "23001": {"id": "23001", "name": "In the Night", "rarity": 5, "path": "Rogue",
                    "icon": "icon/light_cone/23001.png", "preview": "image/light_cone_preview/23001.png",
                    "portrait": "image/light_cone_portrait/23001.png"},
                "21000": {"id": "21000", "name": "Post-Op Conversation", "rarity": 4, "path": "Priest",
                    "icon": "icon/light_cone/21000.png", "preview": "image/light_cone_preview/21000.png",
                    "portrait": "image/light_cone_portrait/21000.png"}
            }),
        ),
        (
            Domain::LightConeRanks,
            json!({
                "23001": {"id": "23001", "skill": "Flowers and Butterflies", "properties": [
                    [{"type": "CriticalChanceBase", "value": 0.18}],
                    [{"type": "CriticalChanceBase", "value": 0.21}],
                    [{"type": "CriticalChanceBase", "value": 0.24}],
                    [{"type": "CriticalChanceBase", "value": 0.27}],
                    [{"type": "CriticalChanceBase", "value": 0.3}]
                ]},
                "21000": {"id": "21000", "skill": "Mutual Healing", "properties": [
                    [{"type": "AttackAddedRatio", "value": 0.16}],
                    [{"type": "AttackAddedRatio", "value": 0.2}],
                    [{"type": "AttackAddedRatio", "value": 0.24}],
                    [{"type": "AttackAddedRatio", "value": 0.28}],
                    [{"type": "AttackAddedRatio", "value": 0.32}]
                ]}
            }),
        ),
        (
            Domain::LightConePromotions,
            json!({
                "23001": promotion("23001", &[
                    ("hp", 50.0, 40.0, 10.0),
                    ("atk", 25.0, 20.0, 5.0),
                    ("def", 20.0, 15.0, 2.0),
                ]),
                "21000": promotion("21000", &[
                    ("hp", 40.0, 30.0, 8.0),
                    ("atk", 20.0, 10.0, 4.0),
                    ("def", 15.0, 10.0, 1.0),
                ])
            }),
        ),
        (
            Domain::Relics,
            json!({
                "61021": {"id": "61021", "set_id": "102", "name": "Musketeer's Wild Wheat Felt Hat", "rarity": 5,
                    "type": "HEAD", "max_level": 15, "main_affix_id": "51", "sub_affix_id": "5", "icon": "icon/relic/102_0.png"},
                "61022": {"id": "61022", "set_id": "102", "name": "Musketeer's Coarse Leather Gloves", "rarity": 5,
                    "type": "HAND", "max_level": 15, "main_affix_id": "52", "sub_affix_id": "5", "icon": "icon/relic/102_1.png"},
                "61023": {"id": "61023", "set_id": "102", "name": "Musketeer's Wind-Hunting Shawl", "rarity": 5,
                    "type": "BODY", "max_level": 15, "main_affix_id": "53", "sub_affix_id": "5", "icon": "icon/relic/102_2.png"},
                "61024": {"id": "61024", "set_id": "102", "name": "Musketeer's Rivets Riding Boots", "rarity": 5,
                    "type": "FOOT", "max_level": 15, "main_affix_id": "54", "sub_affix_id": "5", "icon": "icon/relic/102_3.png"},
                "63061": {"id": "63061", "set_id": "306", "name": "Herta's Space Station", "rarity": 5,
                    "type": "NECK", "max_level": 15, "main_affix_id": "55", "sub_affix_id": "5", "icon": "icon/relic/306_0.png"},
                "63062": {"id": "63062", "set_id": "306", "name": "Herta's Wandering Trek", "rarity": 5,
                    "type": "OBJECT", "max_level": 15, "main_affix_id": "56", "sub_affix_id": "5", "icon": "icon/relic/306_1.png"},
                "69991": {"id": "69991", "set_id": "999", "name": "Orphaned Hat", "rarity": 5,
                    "type": "HEAD", "max_level": 15, "main_affix_id": "51", "sub_affix_id": "5"}
            }),
        ),
        (
            Domain::RelicSets,
            json!({
                "102": {"id": "102", "name": "Musketeer of Wild Wheat",
                    "desc": ["ATK increases by 12%.", "The wearer's SPD increases by 6% and Basic ATK DMG increases by 10%."],
                    "properties": [[{"type": "AttackAddedRatio", "value": 0.12}], [{"type": "SpeedAddedRatio", "value": 0.06}]],
                    "icon": "icon/relic/102.png"},
                "306": {"id": "306", "name": "Space Sealing Station",
                    "desc": ["Increases the wearer's ATK by 12%."],
                    "properties": [[{"type": "AttackAddedRatio", "value": 0.12}]],
                    "icon": "icon/relic/306.png"}
            }),
        ),
        (
            Domain::RelicMainAffixes,
            json!({
                "51": {"id": "51", "affixes": {"1": {"affix_id": "1", "property": "HPDelta", "base": 112.0, "step": 39.5}}},
                "52": {"id": "52", "affixes": {"1": {"affix_id": "1", "property": "AttackDelta", "base": 56.0, "step": 19.75}}},
                "53": {"id": "53", "affixes": {
                    "1": {"affix_id": "1", "property": "HPAddedRatio", "base": 0.0625, "step": 0.015625},
                    "6": {"affix_id": "6", "property": "CriticalDamageBase", "base": 0.25, "step": 0.0625}
                }},
                "54": {"id": "54", "affixes": {"4": {"affix_id": "4", "property": "SpeedDelta", "base": 4.0, "step": 1.5}}},
                "55": {"id": "55", "affixes": {"1": {"affix_id": "1", "property": "HPAddedRatio", "base": 0.0625, "step": 0.015625}}},
                "56": {"id": "56", "affixes": {"2": {"affix_id": "2", "property": "AttackAddedRatio", "base": 0.0625, "step": 0.015625}}}
            }),
        ),
        (
            Domain::RelicSubAffixes,
            json!({
                "5": {"id": "5", "affixes": {
                    "1": {"affix_id": "1", "property": "HPDelta", "base": 32.0, "step": 4.0, "step_num": 2},
                    "2": {"affix_id": "2", "property": "AttackDelta", "base": 16.0, "step": 2.0, "step_num": 2},
                    "6": {"affix_id": "6", "property": "AttackAddedRatio", "base": 0.0625, "step": 0.0078125, "step_num": 2},
                    "7": {"affix_id": "7", "property": "SpeedDelta", "base": 2.0, "step": 0.25, "step_num": 2},
                    "8": {"affix_id": "8", "property": "CriticalChanceBase", "base": 0.03125, "step": 0.00390625, "step_num": 2},
                    "9": {"affix_id": "9", "property": "CriticalDamageBase", "base": 0.0625, "step": 0.0078125, "step_num": 2}
                }}
            }),
        ),
        (
            Domain::Paths,
            json!({
                "Rogue": {"id": "Rogue", "text": "Hunt", "name": "The Hunt", "icon": "icon/path/Hunt.png"},
                "Priest": {"id": "Priest", "text": "Abundance", "name": "Abundance", "icon": "icon/path/Abundance.png"}
            }),
        ),
        (
            Domain::Elements,
            json!({
                "Quantum": {"id": "Quantum", "name": "Quantum", "color": "#1C29BA", "icon": "icon/element/Quantum.png"}
            }),
        ),
        (
            Domain::Avatars,
            json!({
                "201102": {"id": "201102", "name": "Seele", "icon": "icon/avatar/201102.png"}
            }),
        ),
    ]
}

/// In-memory source holding every fixture table.
pub fn source() -> MemorySource {
    let mut source = MemorySource::empty().with(Domain::Properties, PROPERTIES);
    for (domain, table) in tables() {
        source.insert(domain, table.to_string());
    }
    source
}

/// Every fixture table as `(domain, json text)`, for writing to disk.
pub fn raw_tables() -> Vec<(Domain, String)> {
    let mut raw: Vec<(Domain, String)> = tables()
        .into_iter()
        .map(|(domain, table)| (domain, table.to_string()))
        .collect();
    raw.push((Domain::Properties, PROPERTIES.to_string()));
    raw
}

pub fn catalog() -> Catalog {
    Catalog::load(&source()).expect("fixture catalog loads")
}

/// Compare floats that went through several sums.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
