//! Build resolver module.
//!
//! Provides the `BuildResolver` type, the main entry point for turning a
//! build description into a display-ready sheet. It runs the attribute,
//! property, merge and addition steps in a fixed order over a shared,
//! read-only [`Catalog`].

use crate::addition::compute_additions;
use crate::attribute::resolve_promotion_attributes;
use crate::build::{CharacterBuild, LevelEntry, LightConeBuild, RelicBuild};
use crate::catalog::Catalog;
use crate::format::expand_template;
use crate::merge::{merge_levels, merge_stats};
use crate::property::{
    main_affix, properties_from_light_cone_rank, properties_from_tree, set_bonuses,
    skill_upgrades_from_rank, skill_upgrades_from_tree, sub_affixes,
};
use crate::records::CharacterRecord;
use crate::sheet::{CharacterSheet, LightConeInfo, RelicInfo, SkillInfo, SkillTreeInfo, StatEntry};
use std::collections::HashMap;

/// Tunables for [`BuildResolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Only count light cone rank properties toward the character when the
    /// light cone's path matches the character's path. Light cone base
    /// attributes always count.
    pub match_light_cone_path: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            match_light_cone_path: true,
        }
    }
}

/// Resolves builds against a catalog.
///
/// The resolver holds no state besides a catalog reference and its
/// options; it is `Copy` and every method is a pure function of its
/// inputs, so it can be used from many threads at once.
///
/// Unknown ids and out-of-range levels never produce errors: the affected
/// part of the result is `None` or empty. Only an unknown top-level id
/// (character, light cone or relic) makes the whole call return `None`.
///
/// # Examples
///
/// ```rust
/// use railstat::{BuildResolver, Catalog, CharacterBuild, Domain, MemorySource};
///
/// let mut source = MemorySource::empty();
/// for domain in Domain::ALL {
///     source.insert(domain, "{}");
/// }
/// let catalog = Catalog::load(&source).unwrap();
/// let resolver = BuildResolver::new(&catalog);
///
/// assert!(resolver.character(&CharacterBuild::new("1102")).is_none());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BuildResolver<'a> {
    catalog: &'a Catalog,
    options: ResolverOptions,
}

impl<'a> BuildResolver<'a> {
    /// Create a resolver with default options.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, ResolverOptions::default())
    }

    /// Create a resolver with explicit options.
    pub fn with_options(catalog: &'a Catalog, options: ResolverOptions) -> Self {
        Self { catalog, options }
    }

    /// The catalog this resolver reads from.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Resolve a full character build.
    ///
    /// Returns `None` only when the character id is unknown. An unknown
    /// light cone resolves to `light_cone: None`, unknown relics are
    /// dropped, and out-of-range tiers, levels or ranks leave the
    /// dependent lists empty.
    pub fn character(&self, build: &CharacterBuild) -> Option<CharacterSheet> {
        let catalog = self.catalog;
        let Some(character) = catalog.character(&build.id) else {
            tracing::debug!(character_id = %build.id, "unknown character");
            return None;
        };
        let _span = tracing::debug_span!("resolve_character", character_id = %build.id).entered();

        // skills
        let rank_upgrades = skill_upgrades_from_rank(catalog, &build.id, build.rank);
        let tree_upgrades = skill_upgrades_from_tree(catalog, &build.id, &build.skill_tree_levels);
        let skill_levels = merge_levels([rank_upgrades.as_slice(), tree_upgrades.as_slice()]);
        let skills = self.skills(character, &skill_levels);
        let skill_trees = self.skill_trees(character, &build.skill_tree_levels, &rank_upgrades);

        // base attributes and tree properties
        let character_attributes = resolve_promotion_attributes(
            catalog,
            catalog.character_promotion(&build.id),
            build.promotion,
            build.level,
        );
        let tree_properties = properties_from_tree(catalog, &build.id, &build.skill_tree_levels);

        // light cone
        let light_cone = build
            .light_cone
            .as_ref()
            .and_then(|light_cone| self.light_cone(light_cone));
        let light_cone_attributes = light_cone
            .as_ref()
            .map(|info| info.attributes.as_slice())
            .unwrap_or_default();
        let light_cone_properties = light_cone
            .as_ref()
            .filter(|info| self.light_cone_applies(character, info))
            .map(|info| info.properties.as_slice())
            .unwrap_or_default();

        // relics
        let relics: Vec<RelicInfo> = build
            .relics
            .iter()
            .flatten()
            .filter_map(|relic| self.relic(relic))
            .collect();
        let relic_sets = set_bonuses(catalog, &relics);
        let mut relic_properties: Vec<StatEntry> = Vec::new();
        for relic in &relics {
            relic_properties.extend(relic.main_affix.iter().cloned());
            relic_properties.extend(relic.sub_affix.iter().cloned());
        }
        for bonus in &relic_sets {
            relic_properties.extend(bonus.properties.iter().cloned());
        }

        let attributes = merge_stats([character_attributes.as_slice(), light_cone_attributes]);
        let properties = merge_stats([
            tree_properties.as_slice(),
            light_cone_properties,
            relic_properties.as_slice(),
        ]);
        let additions = compute_additions(catalog, &attributes, &properties);

        Some(CharacterSheet {
            id: build.id.clone(),
            name: character.name.clone(),
            rarity: character.rarity,
            rank: build.rank,
            level: build.level,
            promotion: build.promotion,
            icon: character.icon.clone(),
            preview: character.preview.clone(),
            portrait: character.portrait.clone(),
            rank_icons: character
                .ranks
                .iter()
                .filter_map(|id| catalog.character_rank(id))
                .map(|rank| rank.icon.clone())
                .collect(),
            path: catalog.path_info(&character.path),
            element: catalog.element_info(&character.element),
            skills,
            skill_trees,
            light_cone,
            relics,
            relic_sets,
            attributes,
            additions,
            properties,
        })
    }

    /// Resolve a light cone on its own.
    ///
    /// Returns `None` when the light cone id is unknown.
    pub fn light_cone(&self, build: &LightConeBuild) -> Option<LightConeInfo> {
        let catalog = self.catalog;
        let Some(light_cone) = catalog.light_cone(&build.id) else {
            tracing::debug!(light_cone_id = %build.id, "unknown light cone");
            return None;
        };
        let attributes = resolve_promotion_attributes(
            catalog,
            catalog.light_cone_promotion(&build.id),
            build.promotion,
            build.level,
        );
        let rank_properties = properties_from_light_cone_rank(catalog, &build.id, build.rank);

        Some(LightConeInfo {
            id: build.id.clone(),
            name: light_cone.name.clone(),
            rarity: light_cone.rarity,
            rank: build.rank,
            level: build.level,
            promotion: build.promotion,
            icon: light_cone.icon.clone(),
            preview: light_cone.preview.clone(),
            portrait: light_cone.portrait.clone(),
            path: catalog.path_info(&light_cone.path),
            attributes,
            properties: merge_stats([rank_properties.as_slice()]),
        })
    }

    /// Resolve a single relic with its main and sub affixes.
    ///
    /// Returns `None` when the relic id is unknown.
    pub fn relic(&self, build: &RelicBuild) -> Option<RelicInfo> {
        let catalog = self.catalog;
        let Some(relic) = catalog.relic(&build.id) else {
            tracing::debug!(relic_id = %build.id, "unknown relic");
            return None;
        };
        let set_name = match catalog.relic_set(&relic.set_id) {
            Some(set) => set.name.clone(),
            None => {
                tracing::warn!(relic_id = %build.id, set_id = %relic.set_id, "relic set missing from catalog");
                String::new()
            }
        };

        Some(RelicInfo {
            id: build.id.clone(),
            name: relic.name.clone(),
            slot: relic.slot.position(),
            set_id: relic.set_id.clone(),
            set_name,
            rarity: relic.rarity,
            level: build.level,
            icon: relic.icon.clone(),
            main_affix: main_affix(
                catalog,
                &build.id,
                build.level,
                build.main_affix_id.as_deref(),
            ),
            sub_affix: sub_affixes(catalog, &build.id, &build.sub_affixes),
        })
    }

    fn light_cone_applies(&self, character: &CharacterRecord, light_cone: &LightConeInfo) -> bool {
        if !self.options.match_light_cone_path {
            return true;
        }
        // both paths must resolve through the path table
        let matches = self.catalog.path(&character.path).is_some()
            && light_cone
                .path
                .as_ref()
                .is_some_and(|path| path.id == character.path);
        if !matches {
            tracing::debug!(
                character_id = %character.id,
                light_cone_id = %light_cone.id,
                "light cone path differs from character path, skipping its properties"
            );
        }
        matches
    }

    /// Every canonical skill of the character, at its merged level.
    fn skills(&self, character: &CharacterRecord, levels: &[LevelEntry]) -> Vec<SkillInfo> {
        let levels: HashMap<&str, u32> = levels
            .iter()
            .map(|entry| (entry.id.as_str(), entry.level))
            .collect();

        character
            .skills
            .iter()
            .filter_map(|skill_id| {
                let Some(skill) = self.catalog.character_skill(skill_id) else {
                    tracing::debug!(skill_id = %skill_id, "unknown character skill");
                    return None;
                };
                let level = levels.get(skill_id.as_str()).copied().unwrap_or(0);
                let desc = match level {
                    0 => String::new(),
                    _ => {
                        let params = skill
                            .params
                            .get(level as usize - 1)
                            .map(Vec::as_slice)
                            .unwrap_or_default();
                        expand_template(&skill.desc, params)
                    }
                };
                Some(SkillInfo {
                    id: skill_id.clone(),
                    name: skill.name.clone(),
                    level,
                    max_level: skill.max_level,
                    element: self.catalog.element_info(&skill.element),
                    kind: skill.kind.clone(),
                    type_text: skill.type_text.clone(),
                    effect: skill.effect.clone(),
                    effect_text: skill.effect_text.clone(),
                    simple_desc: skill.simple_desc.clone(),
                    desc,
                    icon: skill.icon.clone(),
                })
            })
            .collect()
    }

    /// Every skill-tree node of the character with its allocated level.
    ///
    /// Empty if any of the character's nodes is missing from the catalog.
    fn skill_trees(
        &self,
        character: &CharacterRecord,
        allocated: &[LevelEntry],
        rank_upgrades: &[LevelEntry],
    ) -> Vec<SkillTreeInfo> {
        let allocated: HashMap<&str, u32> = allocated
            .iter()
            .filter(|node| self.catalog.character_skill_tree(&node.id).is_some())
            .map(|node| (node.id.as_str(), node.level))
            .collect();
        let rank_bonus: HashMap<String, u32> = merge_levels([rank_upgrades])
            .into_iter()
            .map(|entry| (entry.id, entry.level))
            .collect();

        let mut nodes = Vec::with_capacity(character.skill_trees.len());
        for node_id in &character.skill_trees {
            let Some(node) = self.catalog.character_skill_tree(node_id) else {
                tracing::debug!(node_id = %node_id, "unknown skill tree node");
                return Vec::new();
            };
            let bonus = node
                .level_up_skills
                .first()
                .and_then(|skill| rank_bonus.get(&skill.id))
                .copied()
                .unwrap_or(0);
            nodes.push(SkillTreeInfo {
                id: node_id.clone(),
                level: allocated.get(node_id.as_str()).copied().unwrap_or(0),
                max_level: node.max_level.saturating_add(bonus),
                anchor: node.anchor.clone(),
                icon: node.icon.clone(),
                parent: node.pre_points.first().cloned(),
            });
        }
        nodes
    }
}

/// Resolve a character build. See [`BuildResolver::character`].
pub fn resolve_character(catalog: &Catalog, build: &CharacterBuild) -> Option<CharacterSheet> {
    BuildResolver::new(catalog).character(build)
}

/// Resolve a light cone build. See [`BuildResolver::light_cone`].
pub fn resolve_light_cone(catalog: &Catalog, build: &LightConeBuild) -> Option<LightConeInfo> {
    BuildResolver::new(catalog).light_cone(build)
}

/// Resolve a relic build. See [`BuildResolver::relic`].
pub fn resolve_relic(catalog: &Catalog, build: &RelicBuild) -> Option<RelicInfo> {
    BuildResolver::new(catalog).relic(build)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{Domain, MemorySource};
    use serde_json::json;

    fn catalog() -> Catalog {
        let mut source = MemorySource::empty();
        for domain in Domain::ALL {
            source.insert(domain, "{}");
        }
        let tables = [
            (
                Domain::Properties,
                json!({
                    "BaseHP": {"type": "BaseHP", "name": "HP", "field": "hp"},
                    "HPAddedRatio": {"type": "HPAddedRatio", "name": "HP", "field": "hp", "ratio": true, "percent": true}
                }),
            ),
            (
                Domain::Characters,
                json!({"1001": {"id": "1001", "name": "March 7th", "path": "Knight",
                    "ranks": ["r1", "r2"], "skills": ["s1", "s2"], "skill_trees": ["t1", "t2"]}}),
            ),
            (
                Domain::CharacterRanks,
                json!({
                    "r1": {"id": "r1", "icon": "rank1.png", "level_up_skills": [{"id": "s1", "num": 2}]},
                    "r2": {"id": "r2", "icon": "rank2.png", "level_up_skills": [{"id": "s1", "num": 1}]}
                }),
            ),
            (
                Domain::CharacterSkills,
                json!({
                    "s1": {"id": "s1", "name": "Basic", "max_level": 9, "desc": "Deals #1[i]% ATK",
                        "params": [[0.5], [0.6], [0.7], [0.8]]},
                    "s2": {"id": "s2", "name": "Ultimate", "max_level": 15, "desc": "#1[i]% DEF",
                        "params": [[1.0]]}
                }),
            ),
            (
                Domain::CharacterSkillTrees,
                json!({
                    "t1": {"id": "t1", "max_level": 6, "anchor": "Point01",
                        "level_up_skills": [{"id": "s1", "num": 1}], "levels": []},
                    "t2": {"id": "t2", "max_level": 1, "anchor": "Point07", "pre_points": ["t1"],
                        "levels": [{"properties": [{"type": "HPAddedRatio", "value": 0.04}]}]}
                }),
            ),
            (
                Domain::LightCones,
                json!({"20000": {"id": "20000", "name": "Arrows", "path": "Knight"}}),
            ),
            (
                Domain::LightConeRanks,
                json!({"20000": {"id": "20000", "properties": [
                    [{"type": "HPAddedRatio", "value": 0.1}]
                ]}}),
            ),
            (
                Domain::CharacterPromotions,
                json!({"1001": {"id": "1001", "values": [{"hp": {"base": 100.0, "step": 10.0}}]}}),
            ),
        ];
        for (domain, value) in tables {
            source.insert(domain, value.to_string());
        }
        Catalog::load(&source).unwrap()
    }

    #[test]
    fn test_unknown_character() {
        let catalog = catalog();
        assert!(resolve_character(&catalog, &CharacterBuild::new("9999")).is_none());
    }

    #[test]
    fn test_unallocated_skills_listed_at_zero() {
        let catalog = catalog();
        let sheet = resolve_character(&catalog, &CharacterBuild::new("1001")).unwrap();
        assert_eq!(sheet.skills.len(), 2);
        assert!(sheet.skills.iter().all(|skill| skill.level == 0 && skill.desc.is_empty()));
        assert_eq!(sheet.skills[1].name, "Ultimate");
    }

    #[test]
    fn test_skill_levels_merge_rank_and_tree() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").rank(1).skill_tree("t1", 2);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert_eq!(sheet.skills[0].level, 4);
        assert_eq!(sheet.skills[0].desc, "Deals 80% ATK");
    }

    #[test]
    fn test_skill_level_beyond_params_keeps_template() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").skill_tree("t1", 6);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert_eq!(sheet.skills[0].level, 6);
        assert_eq!(sheet.skills[0].desc, "Deals #1[i]% ATK");
    }

    #[test]
    fn test_skill_tree_info() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").rank(1).skill_tree("t2", 1);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert_eq!(sheet.skill_trees.len(), 2);
        assert_eq!(sheet.skill_trees[0].level, 0);
        // rank 1 grants two levels to s1, the first level-up skill of t1
        assert_eq!(sheet.skill_trees[0].max_level, 8);
        assert_eq!(sheet.skill_trees[1].level, 1);
        assert_eq!(sheet.skill_trees[1].parent.as_deref(), Some("t1"));
        assert_eq!(sheet.rank_icons, vec!["rank1.png", "rank2.png"]);
    }

    #[test]
    fn test_tree_ratio_property_becomes_addition() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").level(11).skill_tree("t2", 1);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert_eq!(sheet.attribute("hp").unwrap().value, 200.0);
        assert_eq!(sheet.property("HPAddedRatio").unwrap().display, "4.0%");
        assert_eq!(sheet.addition("hp").unwrap().value, 8.0);
        assert_eq!(sheet.addition("hp").unwrap().display, "8");
    }

    #[test]
    fn test_out_of_range_level_only_empties_attributes() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").level(90).skill_tree("t2", 1);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert!(sheet.attributes.is_empty());
        assert_eq!(sheet.properties.len(), 1);
        // no base to scale, the raw ratio is carried through
        assert_eq!(sheet.addition("hp").unwrap().value, 0.04);
    }

    #[test]
    fn test_unknown_light_cone_and_relics() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001")
            .light_cone(LightConeBuild::new("nope", 1, 1, 0))
            .relic(RelicBuild::new("nope"));
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert!(sheet.light_cone.is_none());
        assert!(sheet.relics.is_empty());
        assert!(sheet.relic_sets.is_empty());
    }

    #[test]
    fn test_rank_bonuses_to_one_skill_add_up() {
        let catalog = catalog();
        let sheet = resolve_character(&catalog, &CharacterBuild::new("1001").rank(2)).unwrap();
        // r1 grants two levels to s1 and r2 one more
        assert_eq!(sheet.skills[0].level, 3);
        assert_eq!(sheet.skill_trees[0].max_level, 9);
    }

    #[test]
    fn test_unresolved_paths_never_match() {
        let catalog = catalog();
        // "Knight" is on both records but missing from the path table
        let build = CharacterBuild::new("1001").light_cone(LightConeBuild::new("20000", 1, 1, 0));
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert!(sheet.path.is_none());
        let light_cone = sheet.light_cone.as_ref().unwrap();
        assert!(light_cone.path.is_none());
        assert_eq!(light_cone.properties.len(), 1);
        assert!(sheet.properties.is_empty());
        assert!(sheet.additions.is_empty());

        let options = ResolverOptions {
            match_light_cone_path: false,
        };
        let sheet = BuildResolver::with_options(&catalog, options)
            .character(&build)
            .unwrap();
        assert_eq!(sheet.properties.len(), 1);
    }

    #[test]
    fn test_huge_tree_level_saturates() {
        let catalog = catalog();
        let build = CharacterBuild::new("1001").rank(2).skill_tree("t1", u32::MAX);
        let sheet = resolve_character(&catalog, &build).unwrap();
        assert_eq!(sheet.skills[0].level, u32::MAX);
        assert_eq!(sheet.skills[0].desc, "Deals #1[i]% ATK");
        assert_eq!(sheet.skill_trees[0].level, u32::MAX);
    }

    #[test]
    fn test_resolver_is_copy_and_shareable() {
        fn assert_copy<T: Copy + Send + Sync>() {}
        assert_copy::<BuildResolver<'static>>();
    }
}
