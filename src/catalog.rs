//! The reference catalog.
//!
//! `Catalog` owns one typed [`Table`] per reference domain plus a
//! precomputed field -> property index. It is built once from a
//! [`TableSource`] and is read-only afterwards, so a single instance can be
//! shared across threads without locking.

use crate::error::CatalogError;
use crate::records::{
    AffixGroupRecord, AvatarRecord, CharacterRankRecord, CharacterRecord, CharacterSkillRecord,
    CharacterSkillTreeRecord, ElementRecord, LightConeRankRecord, LightConeRecord, PathRecord,
    PromotionRecord, PropertyRecord, RelicRecord, RelicSetRecord,
};
use crate::sheet::{AvatarInfo, ElementInfo, PathInfo};
use crate::source::{DirectorySource, Domain, TableSource};
use crate::table::Table;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::path::PathBuf;

/// Immutable lookup tables for all sixteen reference domains.
///
/// Every lookup returns `None` for an unknown id; only construction can
/// fail.
///
/// # Examples
///
/// ```rust
/// use railstat::{Catalog, Domain, MemorySource};
///
/// let mut source = MemorySource::empty();
/// for domain in Domain::ALL {
///     source.insert(domain, "{}");
/// }
/// source.insert(
///     Domain::Properties,
///     r#"{"HPDelta": {"type": "HPDelta", "name": "HP", "field": "hp"}}"#,
/// );
///
/// let catalog = Catalog::load(&source).unwrap();
/// assert_eq!(catalog.property_for_field("hp").unwrap().kind, "HPDelta");
/// assert!(catalog.character("1001").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    characters: Table<CharacterRecord>,
    character_ranks: Table<CharacterRankRecord>,
    character_skills: Table<CharacterSkillRecord>,
    character_skill_trees: Table<CharacterSkillTreeRecord>,
    character_promotions: Table<PromotionRecord>,
    light_cones: Table<LightConeRecord>,
    light_cone_ranks: Table<LightConeRankRecord>,
    light_cone_promotions: Table<PromotionRecord>,
    relics: Table<RelicRecord>,
    relic_sets: Table<RelicSetRecord>,
    relic_main_affixes: Table<AffixGroupRecord>,
    relic_sub_affixes: Table<AffixGroupRecord>,
    paths: Table<PathRecord>,
    elements: Table<ElementRecord>,
    properties: Table<PropertyRecord>,
    avatars: Table<AvatarRecord>,

    /// Stat field -> type id of the first property (in catalog order)
    /// whose `field` matches.
    field_index: HashMap<String, String>,
}

fn decode<T: DeserializeOwned>(
    source: &impl TableSource,
    domain: Domain,
) -> Result<Table<T>, CatalogError> {
    let raw = source.read_table(domain)?;
    serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed { domain, source })
}

fn build_field_index(properties: &Table<PropertyRecord>) -> HashMap<String, String> {
    let mut index = HashMap::new();
    for (kind, property) in properties.iter() {
        index
            .entry(property.field.clone())
            .or_insert_with(|| kind.to_string());
    }
    index
}

impl Catalog {
    /// Decode every reference table from `source`.
    ///
    /// # Errors
    ///
    /// * `CatalogError::MissingSource` - a table could not be located
    /// * `CatalogError::Io` - a table could not be read
    /// * `CatalogError::Malformed` - a table does not match its record shape
    pub fn load(source: &impl TableSource) -> Result<Self, CatalogError> {
        let properties = decode(source, Domain::Properties)?;
        let field_index = build_field_index(&properties);

        let catalog = Self {
            characters: decode(source, Domain::Characters)?,
            character_ranks: decode(source, Domain::CharacterRanks)?,
            character_skills: decode(source, Domain::CharacterSkills)?,
            character_skill_trees: decode(source, Domain::CharacterSkillTrees)?,
            character_promotions: decode(source, Domain::CharacterPromotions)?,
            light_cones: decode(source, Domain::LightCones)?,
            light_cone_ranks: decode(source, Domain::LightConeRanks)?,
            light_cone_promotions: decode(source, Domain::LightConePromotions)?,
            relics: decode(source, Domain::Relics)?,
            relic_sets: decode(source, Domain::RelicSets)?,
            relic_main_affixes: decode(source, Domain::RelicMainAffixes)?,
            relic_sub_affixes: decode(source, Domain::RelicSubAffixes)?,
            paths: decode(source, Domain::Paths)?,
            elements: decode(source, Domain::Elements)?,
            properties,
            avatars: decode(source, Domain::Avatars)?,
            field_index,
        };

        tracing::info!(
            characters = catalog.characters.len(),
            light_cones = catalog.light_cones.len(),
            relics = catalog.relics.len(),
            properties = catalog.properties.len(),
            "reference catalog loaded"
        );
        Ok(catalog)
    }

    /// Load from `<dir>/<domain>.json` files.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Result<Self, CatalogError> {
        Self::load(&DirectorySource::new(dir))
    }

    /// A character by id.
    pub fn character(&self, id: &str) -> Option<&CharacterRecord> {
        self.characters.get(id)
    }

    /// A character rank (eidolon) by id.
    pub fn character_rank(&self, id: &str) -> Option<&CharacterRankRecord> {
        self.character_ranks.get(id)
    }

    /// A character skill by id.
    pub fn character_skill(&self, id: &str) -> Option<&CharacterSkillRecord> {
        self.character_skills.get(id)
    }

    /// A skill-tree node by id.
    pub fn character_skill_tree(&self, id: &str) -> Option<&CharacterSkillTreeRecord> {
        self.character_skill_trees.get(id)
    }

    /// Promotion curves for a character id.
    pub fn character_promotion(&self, id: &str) -> Option<&PromotionRecord> {
        self.character_promotions.get(id)
    }

    /// A light cone by id.
    pub fn light_cone(&self, id: &str) -> Option<&LightConeRecord> {
        self.light_cones.get(id)
    }

    /// Superimposition data for a light cone id.
    pub fn light_cone_rank(&self, id: &str) -> Option<&LightConeRankRecord> {
        self.light_cone_ranks.get(id)
    }

    /// Promotion curves for a light cone id.
    pub fn light_cone_promotion(&self, id: &str) -> Option<&PromotionRecord> {
        self.light_cone_promotions.get(id)
    }

    /// A relic piece by id.
    pub fn relic(&self, id: &str) -> Option<&RelicRecord> {
        self.relics.get(id)
    }

    /// A relic set by id.
    pub fn relic_set(&self, id: &str) -> Option<&RelicSetRecord> {
        self.relic_sets.get(id)
    }

    /// A main affix group by id (see [`RelicRecord::main_affix_id`]).
    pub fn relic_main_affix_group(&self, id: &str) -> Option<&AffixGroupRecord> {
        self.relic_main_affixes.get(id)
    }

    /// A sub affix group by id (see [`RelicRecord::sub_affix_id`]).
    pub fn relic_sub_affix_group(&self, id: &str) -> Option<&AffixGroupRecord> {
        self.relic_sub_affixes.get(id)
    }

    /// A path by id.
    pub fn path(&self, id: &str) -> Option<&PathRecord> {
        self.paths.get(id)
    }

    /// An element by id.
    pub fn element(&self, id: &str) -> Option<&ElementRecord> {
        self.elements.get(id)
    }

    /// A property record by type id, e.g. `AttackAddedRatio`.
    pub fn property(&self, kind: &str) -> Option<&PropertyRecord> {
        self.properties.get(kind)
    }

    /// A profile avatar by id.
    pub fn avatar(&self, id: &str) -> Option<&AvatarRecord> {
        self.avatars.get(id)
    }

    /// All properties in catalog order.
    pub fn properties(&self) -> &Table<PropertyRecord> {
        &self.properties
    }

    /// The first property, in catalog order, whose output field is `field`.
    pub fn property_for_field(&self, field: &str) -> Option<&PropertyRecord> {
        self.field_index
            .get(field)
            .and_then(|kind| self.properties.get(kind))
    }

    /// Number of records in `domain`'s table.
    pub fn table_len(&self, domain: Domain) -> usize {
        match domain {
            Domain::Characters => self.characters.len(),
            Domain::CharacterRanks => self.character_ranks.len(),
            Domain::CharacterSkills => self.character_skills.len(),
            Domain::CharacterSkillTrees => self.character_skill_trees.len(),
            Domain::CharacterPromotions => self.character_promotions.len(),
            Domain::LightCones => self.light_cones.len(),
            Domain::LightConeRanks => self.light_cone_ranks.len(),
            Domain::LightConePromotions => self.light_cone_promotions.len(),
            Domain::Relics => self.relics.len(),
            Domain::RelicSets => self.relic_sets.len(),
            Domain::RelicMainAffixes => self.relic_main_affixes.len(),
            Domain::RelicSubAffixes => self.relic_sub_affixes.len(),
            Domain::Paths => self.paths.len(),
            Domain::Elements => self.elements.len(),
            Domain::Properties => self.properties.len(),
            Domain::Avatars => self.avatars.len(),
        }
    }

    /// Display info for an avatar (player profile picture).
    pub fn avatar_info(&self, id: &str) -> Option<AvatarInfo> {
        let avatar = self.avatar(id)?;
        Some(AvatarInfo {
            id: id.to_string(),
            name: avatar.name.clone(),
            icon: avatar.icon.clone(),
        })
    }

    /// Display info for a path.
    pub fn path_info(&self, id: &str) -> Option<PathInfo> {
        let path = self.path(id)?;
        Some(PathInfo {
            id: id.to_string(),
            name: path.name.clone(),
            icon: path.icon.clone(),
        })
    }

    /// Display info for an element.
    pub fn element_info(&self, id: &str) -> Option<ElementInfo> {
        let element = self.element(id)?;
        Some(ElementInfo {
            id: id.to_string(),
            name: element.name.clone(),
            color: element.color.clone(),
            icon: element.icon.clone(),
        })
    }
}
