//! Table sources module.
//!
//! A `TableSource` hands raw JSON text for each reference domain to the
//! catalog loader. Sources only locate and read data; decoding into typed
//! records happens in [`Catalog::load`](crate::Catalog::load).

use crate::error::CatalogError;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable naming the folder [`DirectorySource::from_env`] reads.
pub const INDEX_DIR_ENV: &str = "RAILSTAT_INDEX_DIR";

/// Folder used by [`DirectorySource::from_env`] when the variable is unset.
pub const DEFAULT_INDEX_DIR: &str = "index/en";

/// The sixteen reference domains a catalog is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    Characters,
    CharacterRanks,
    CharacterSkills,
    CharacterSkillTrees,
    CharacterPromotions,
    LightCones,
    LightConeRanks,
    LightConePromotions,
    Relics,
    RelicSets,
    RelicMainAffixes,
    RelicSubAffixes,
    Paths,
    Elements,
    Properties,
    Avatars,
}

impl Domain {
    /// Every domain, in load order.
    pub const ALL: [Domain; 16] = [
        Domain::Characters,
        Domain::CharacterRanks,
        Domain::CharacterSkills,
        Domain::CharacterSkillTrees,
        Domain::CharacterPromotions,
        Domain::LightCones,
        Domain::LightConeRanks,
        Domain::LightConePromotions,
        Domain::Relics,
        Domain::RelicSets,
        Domain::RelicMainAffixes,
        Domain::RelicSubAffixes,
        Domain::Paths,
        Domain::Elements,
        Domain::Properties,
        Domain::Avatars,
    ];

    /// Logical table name, also the file stem on disk.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use railstat::Domain;
    ///
    /// assert_eq!(Domain::RelicMainAffixes.name(), "relic_main_affixes");
    /// ```
    pub fn name(self) -> &'static str {
        match self {
            Domain::Characters => "characters",
            Domain::CharacterRanks => "character_ranks",
            Domain::CharacterSkills => "character_skills",
            Domain::CharacterSkillTrees => "character_skill_trees",
            Domain::CharacterPromotions => "character_promotions",
            Domain::LightCones => "light_cones",
            Domain::LightConeRanks => "light_cone_ranks",
            Domain::LightConePromotions => "light_cone_promotions",
            Domain::Relics => "relics",
            Domain::RelicSets => "relic_sets",
            Domain::RelicMainAffixes => "relic_main_affixes",
            Domain::RelicSubAffixes => "relic_sub_affixes",
            Domain::Paths => "paths",
            Domain::Elements => "elements",
            Domain::Properties => "properties",
            Domain::Avatars => "avatars",
        }
    }

    /// Look a domain up by its logical table name.
    pub fn from_name(name: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|domain| domain.name() == name)
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Trait for anything that can supply the raw JSON of a reference table.
pub trait TableSource {
    /// Read the JSON text backing `domain`.
    ///
    /// Returns `CatalogError::MissingSource` when the table cannot be
    /// located at all.
    fn read_table(&self, domain: Domain) -> Result<String, CatalogError>;
}

/// Reads `<root>/<domain>.json` files from a folder.
///
/// # Examples
///
/// ```rust
/// use railstat::{Domain, DirectorySource};
///
/// let source = DirectorySource::new("index/en");
/// assert!(source.table_path(Domain::Paths).ends_with("paths.json"));
/// ```
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Create a source over `root`. The folder is not touched until a
    /// table is read.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create a source over `$RAILSTAT_INDEX_DIR`, or `index/en` when unset.
    pub fn from_env() -> Self {
        let root = std::env::var_os(INDEX_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INDEX_DIR));
        Self::new(root)
    }

    /// The folder this source reads from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of the file backing `domain`.
    pub fn table_path(&self, domain: Domain) -> PathBuf {
        self.root.join(format!("{}.json", domain.name()))
    }
}

impl TableSource for DirectorySource {
    fn read_table(&self, domain: Domain) -> Result<String, CatalogError> {
        let path = self.table_path(domain);
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => CatalogError::MissingSource {
                domain,
                location: path.display().to_string(),
            },
            _ => CatalogError::Io { domain, source },
        })
    }
}

/// In-memory table source keyed by domain.
///
/// Useful for tests and for embedding reference data in a binary.
///
/// # Examples
///
/// ```rust
/// use railstat::{Domain, MemorySource, TableSource};
///
/// let mut source = MemorySource::empty();
/// source.insert(Domain::Paths, "{}");
///
/// assert_eq!(source.read_table(Domain::Paths).unwrap(), "{}");
/// assert!(source.read_table(Domain::Elements).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    tables: HashMap<Domain, String>,
}

impl MemorySource {
    /// Create a new `MemorySource` from a `HashMap`.
    pub fn new(tables: HashMap<Domain, String>) -> Self {
        Self { tables }
    }

    /// Create a new empty `MemorySource`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Insert (or replace) the JSON text of a table.
    pub fn insert(&mut self, domain: Domain, json: impl Into<String>) {
        self.tables.insert(domain, json.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, domain: Domain, json: impl Into<String>) -> Self {
        self.insert(domain, json);
        self
    }
}

impl TableSource for MemorySource {
    fn read_table(&self, domain: Domain) -> Result<String, CatalogError> {
        self.tables
            .get(&domain)
            .cloned()
            .ok_or_else(|| CatalogError::MissingSource {
                domain,
                location: "memory".to_string(),
            })
    }
}
