//! Typed reference records.
//!
//! One record type per reference domain, decoded once at catalog
//! construction and never mutated afterwards. Descriptive fields default to
//! empty when a table omits them; ids and numeric curves are required.

use crate::table::Table;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An id paired with an amount (materials, skill level-ups).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub id: String,
    pub num: u32,
}

/// A raw property bonus as stored in the tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// Property type id, resolved through the property catalog.
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

/// Linear stat curve for one promotion tier: `base + step * (level - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub base: f64,
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tag: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub element: String,
    #[serde(default)]
    pub max_sp: Option<u32>,
    /// Rank ids; index `i` unlocks at rank `i + 1`.
    #[serde(default)]
    pub ranks: Vec<String>,
    /// Canonical skill ordering for output.
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub skill_trees: Vec<String>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterRankRecord {
    pub id: String,
    #[serde(default)]
    pub rank: u8,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub materials: Vec<Quantity>,
    #[serde(default)]
    pub level_up_skills: Vec<Quantity>,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSkillRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub element: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub type_text: String,
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub effect_text: String,
    #[serde(default)]
    pub simple_desc: String,
    /// Description template with `#n[...]` placeholders.
    #[serde(default)]
    pub desc: String,
    /// Template parameters per level; index 0 is level 1.
    #[serde(default)]
    pub params: Vec<Vec<f64>>,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTreeLevel {
    #[serde(default)]
    pub promotion: u8,
    #[serde(default)]
    pub properties: Vec<PropertyValue>,
    #[serde(default)]
    pub materials: Vec<Quantity>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSkillTreeRecord {
    pub id: String,
    #[serde(default)]
    pub max_level: u32,
    #[serde(default)]
    pub anchor: String,
    #[serde(default)]
    pub pre_points: Vec<String>,
    #[serde(default)]
    pub level_up_skills: Vec<Quantity>,
    /// Step data; index 0 is allocation level 1.
    #[serde(default)]
    pub levels: Vec<SkillTreeLevel>,
    #[serde(default)]
    pub icon: String,
}

/// Promotion curves shared by characters and light cones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromotionRecord {
    pub id: String,
    /// One ordered field -> curve map per promotion tier.
    pub values: Vec<Table<Promotion>>,
    #[serde(default)]
    pub materials: Vec<Vec<Quantity>>,
}

pub type CharacterPromotionRecord = PromotionRecord;
pub type LightConePromotionRecord = PromotionRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConeRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub preview: String,
    #[serde(default)]
    pub portrait: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConeRankRecord {
    pub id: String,
    #[serde(default)]
    pub skill: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub params: Vec<Vec<f64>>,
    /// Property bonuses per superimposition; index 0 is rank 1.
    #[serde(default)]
    pub properties: Vec<Vec<PropertyValue>>,
}

/// Equipment slot of a relic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RelicSlot {
    Head,
    Hand,
    Body,
    Foot,
    Neck,
    Object,
    /// Any slot name this crate does not know.
    #[serde(other)]
    Unknown,
}

impl RelicSlot {
    /// Numeric slot position used by display layers (HEAD = 1 .. OBJECT = 6,
    /// 0 for an unknown slot).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railstat::records::RelicSlot;
    ///
    /// assert_eq!(RelicSlot::Head.position(), 1);
    /// assert_eq!(RelicSlot::Object.position(), 6);
    /// ```
    pub fn position(self) -> u8 {
        match self {
            RelicSlot::Head => 1,
            RelicSlot::Hand => 2,
            RelicSlot::Body => 3,
            RelicSlot::Foot => 4,
            RelicSlot::Neck => 5,
            RelicSlot::Object => 6,
            RelicSlot::Unknown => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicRecord {
    pub id: String,
    pub set_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub rarity: u8,
    #[serde(rename = "type")]
    pub slot: RelicSlot,
    #[serde(default)]
    pub max_level: u32,
    /// Main affix group id.
    pub main_affix_id: String,
    /// Sub affix group id.
    pub sub_affix_id: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicSetRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Index 0 is the 2-piece bonus, index 1 the 4-piece bonus.
    #[serde(default)]
    pub properties: Vec<Vec<PropertyValue>>,
    /// Same indexing as `properties`.
    #[serde(default)]
    pub desc: Vec<String>,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixRecord {
    pub affix_id: String,
    /// Property type id.
    pub property: String,
    pub base: f64,
    pub step: f64,
    #[serde(default)]
    pub step_num: u32,
}

/// A main or sub affix table for one relic group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffixGroupRecord {
    pub id: String,
    pub affixes: HashMap<String, AffixRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathRecord {
    pub id: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub icon: String,
}

/// Catalog entry describing how a property is named, keyed and displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub name: String,
    /// Stat field this property feeds.
    pub field: String,
    /// Can roll as a relic or light cone affix.
    #[serde(default)]
    pub affix: bool,
    /// Value is a multiplier of the same-field base attribute.
    #[serde(default)]
    pub ratio: bool,
    /// Displayed as a percentage.
    #[serde(default)]
    pub percent: bool,
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}
