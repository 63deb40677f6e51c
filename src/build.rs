//! Build descriptions.
//!
//! The caller-supplied, minimal description of a character build. Field
//! defaults match what an empty build means in game: rank 0, level 1,
//! promotion 0, nothing allocated and nothing equipped.

use serde::{Deserialize, Serialize};

fn one() -> u32 {
    1
}

/// An id with a level: a skill-tree allocation or a skill level delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub id: String,
    #[serde(default)]
    pub level: u32,
}

impl LevelEntry {
    pub fn new(id: impl Into<String>, level: u32) -> Self {
        Self {
            id: id.into(),
            level,
        }
    }
}

/// One rolled sub affix: how many times it rolled and its bonus steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubAffixBuild {
    pub id: String,
    pub cnt: u32,
    #[serde(default)]
    pub step: u32,
}

impl SubAffixBuild {
    pub fn new(id: impl Into<String>, cnt: u32, step: u32) -> Self {
        Self {
            id: id.into(),
            cnt,
            step,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelicBuild {
    pub id: String,
    #[serde(default = "one")]
    pub level: u32,
    #[serde(default)]
    pub main_affix_id: Option<String>,
    #[serde(default, rename = "sub_affix_info")]
    pub sub_affixes: Vec<SubAffixBuild>,
}

impl RelicBuild {
    /// A level 1 relic with no affixes.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            level: 1,
            main_affix_id: None,
            sub_affixes: Vec::new(),
        }
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn main_affix(mut self, id: impl Into<String>) -> Self {
        self.main_affix_id = Some(id.into());
        self
    }

    pub fn sub_affix(mut self, id: impl Into<String>, cnt: u32, step: u32) -> Self {
        self.sub_affixes.push(SubAffixBuild::new(id, cnt, step));
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightConeBuild {
    pub id: String,
    #[serde(default = "one")]
    pub rank: u32,
    #[serde(default = "one")]
    pub level: u32,
    #[serde(default)]
    pub promotion: u32,
}

impl LightConeBuild {
    pub fn new(id: impl Into<String>, rank: u32, level: u32, promotion: u32) -> Self {
        Self {
            id: id.into(),
            rank,
            level,
            promotion,
        }
    }
}

/// A character build.
///
/// # Examples
///
/// ```rust
/// use railstat::{CharacterBuild, LightConeBuild};
///
/// let build = CharacterBuild::new("1102")
///     .level(70)
///     .promotion(5)
///     .skill_tree("1102001", 2)
///     .light_cone(LightConeBuild::new("23001", 1, 70, 5));
///
/// assert_eq!(build.rank, 0);
/// assert_eq!(build.skill_tree_levels.len(), 1);
///
/// let parsed: CharacterBuild = serde_json::from_str(r#"{"id": "1102"}"#).unwrap();
/// assert_eq!(parsed, CharacterBuild::new("1102"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterBuild {
    pub id: String,
    #[serde(default)]
    pub rank: u32,
    #[serde(default = "one")]
    pub level: u32,
    #[serde(default)]
    pub promotion: u32,
    #[serde(default)]
    pub skill_tree_levels: Vec<LevelEntry>,
    #[serde(default)]
    pub light_cone: Option<LightConeBuild>,
    #[serde(default)]
    pub relics: Option<Vec<RelicBuild>>,
}

impl CharacterBuild {
    /// Rank 0, level 1, promotion 0, nothing allocated or equipped.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            rank: 0,
            level: 1,
            promotion: 0,
            skill_tree_levels: Vec::new(),
            light_cone: None,
            relics: None,
        }
    }

    pub fn rank(mut self, rank: u32) -> Self {
        self.rank = rank;
        self
    }

    pub fn level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn promotion(mut self, promotion: u32) -> Self {
        self.promotion = promotion;
        self
    }

    /// Allocate `level` points to a skill-tree node.
    pub fn skill_tree(mut self, id: impl Into<String>, level: u32) -> Self {
        self.skill_tree_levels.push(LevelEntry::new(id, level));
        self
    }

    pub fn light_cone(mut self, light_cone: LightConeBuild) -> Self {
        self.light_cone = Some(light_cone);
        self
    }

    /// Equip a relic.
    pub fn relic(mut self, relic: RelicBuild) -> Self {
        self.relics.get_or_insert_with(Vec::new).push(relic);
        self
    }
}
