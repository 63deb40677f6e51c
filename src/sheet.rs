//! Resolved output types.
//!
//! Everything here is a read-only value built per request and meant to be
//! serialized as-is: nested objects for sub-records, ordered lists for
//! collections.

use crate::format::format_value;
use crate::records::PropertyRecord;
use serde::{Deserialize, Serialize};

/// One computed stat, used for attributes, properties and additions alike.
///
/// Attributes (base stats) and additions are keyed by `field` and carry no
/// `kind`. Properties (bonus stats) are keyed by their property type id in
/// `kind`. Sub-affix entries also report their pip breakdown in `count` and
/// `step`.
///
/// # Examples
///
/// ```rust
/// use railstat::StatEntry;
///
/// let atk = StatEntry::new("atk", "ATK", None, 1000.0, false);
/// assert_eq!(atk.key(), "atk");
/// assert_eq!(atk.display, "1000");
///
/// let doubled = atk.with_value(2000.5);
/// assert_eq!(doubled.display, "2000");
/// assert_eq!(doubled.name, "ATK");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    /// Property type id; `None` for attributes and additions.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub field: String,
    pub name: String,
    pub icon: Option<String>,
    pub value: f64,
    pub display: String,
    pub percent: bool,
    /// Number of sub-affix rolls.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Number of sub-affix bonus steps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<u32>,
}

impl StatEntry {
    /// Create a field-keyed entry, rendering `display` from `value`.
    pub fn new(
        field: impl Into<String>,
        name: impl Into<String>,
        icon: Option<String>,
        value: f64,
        percent: bool,
    ) -> Self {
        Self {
            kind: None,
            field: field.into(),
            name: name.into(),
            icon,
            value,
            display: format_value(value, percent),
            percent,
            count: None,
            step: None,
        }
    }

    /// Create an attribute for `field` displayed with `property`'s metadata.
    pub fn attribute(field: impl Into<String>, property: &PropertyRecord, value: f64) -> Self {
        Self::new(
            field,
            property.name.clone(),
            property.icon.clone(),
            value,
            property.percent,
        )
    }

    /// Create a property entry keyed by `property`'s type id.
    pub fn property(property: &PropertyRecord, value: f64) -> Self {
        Self {
            kind: Some(property.kind.clone()),
            ..Self::new(
                property.field.clone(),
                property.name.clone(),
                property.icon.clone(),
                value,
                property.percent,
            )
        }
    }

    /// Attach a sub-affix pip breakdown.
    pub fn with_pips(mut self, count: u32, step: u32) -> Self {
        self.count = Some(count);
        self.step = Some(step);
        self
    }

    /// The merge key: property type id for properties, field otherwise.
    pub fn key(&self) -> &str {
        self.kind.as_deref().unwrap_or(&self.field)
    }

    /// A new entry with this entry's metadata and a different value.
    ///
    /// `display` is re-rendered and the pip breakdown is dropped, since it
    /// only describes the original roll.
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            kind: self.kind.clone(),
            field: self.field.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
            value,
            display: format_value(value, self.percent),
            percent: self.percent,
            count: None,
            step: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarInfo {
    pub id: String,
    pub name: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInfo {
    pub id: String,
    pub name: String,
    pub color: String,
    pub icon: String,
}

/// A character skill at its resolved level.
///
/// Skills that received no levels are still listed with `level == 0` and
/// an empty `desc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillInfo {
    pub id: String,
    pub name: String,
    pub level: u32,
    pub max_level: u32,
    pub element: Option<ElementInfo>,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_text: String,
    pub effect: String,
    pub effect_text: String,
    pub simple_desc: String,
    /// Description with parameters for `level` expanded.
    pub desc: String,
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillTreeInfo {
    pub id: String,
    pub level: u32,
    /// Node max level, raised by rank upgrades to the node's skill.
    pub max_level: u32,
    pub anchor: String,
    pub icon: String,
    /// First prerequisite node, if any.
    pub parent: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightConeInfo {
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub rank: u32,
    pub level: u32,
    pub promotion: u32,
    pub icon: String,
    pub preview: String,
    pub portrait: String,
    pub path: Option<PathInfo>,
    pub attributes: Vec<StatEntry>,
    pub properties: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicInfo {
    pub id: String,
    pub name: String,
    /// Slot position, see [`RelicSlot::position`](crate::records::RelicSlot::position).
    #[serde(rename = "type")]
    pub slot: u8,
    pub set_id: String,
    pub set_name: String,
    pub rarity: u8,
    pub level: u32,
    pub icon: String,
    pub main_affix: Option<StatEntry>,
    pub sub_affix: Vec<StatEntry>,
}

/// An active relic-set bonus tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelicSetInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    /// Piece tier this bonus belongs to: 2 or 4.
    pub num: u8,
    pub desc: String,
    pub properties: Vec<StatEntry>,
}

/// The fully resolved character build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub id: String,
    pub name: String,
    pub rarity: u8,
    pub rank: u32,
    pub level: u32,
    pub promotion: u32,
    pub icon: String,
    pub preview: String,
    pub portrait: String,
    pub rank_icons: Vec<String>,
    pub path: Option<PathInfo>,
    pub element: Option<ElementInfo>,
    pub skills: Vec<SkillInfo>,
    pub skill_trees: Vec<SkillTreeInfo>,
    pub light_cone: Option<LightConeInfo>,
    pub relics: Vec<RelicInfo>,
    pub relic_sets: Vec<RelicSetInfo>,
    /// Base stats from character and light cone promotion curves.
    pub attributes: Vec<StatEntry>,
    /// Bonus stats converted to absolute values per field.
    pub additions: Vec<StatEntry>,
    /// Bonus stats from skill tree, light cone, relics and set bonuses.
    pub properties: Vec<StatEntry>,
}

impl CharacterSheet {
    /// Look up a final attribute by field.
    pub fn attribute(&self, field: &str) -> Option<&StatEntry> {
        self.attributes.iter().find(|entry| entry.field == field)
    }

    /// Look up an addition by field.
    pub fn addition(&self, field: &str) -> Option<&StatEntry> {
        self.additions.iter().find(|entry| entry.field == field)
    }

    /// Look up a merged property by property type id.
    pub fn property(&self, kind: &str) -> Option<&StatEntry> {
        self.properties
            .iter()
            .find(|entry| entry.kind.as_deref() == Some(kind))
    }
}
