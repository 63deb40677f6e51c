//! # railstat - Character Build Resolver
//!
//! Turns a compact character build (ids and levels) into a display-ready
//! stat sheet, using a catalog of static game reference tables:
//! - **Deterministic** resolution (same catalog and build, same sheet)
//! - **Read-only** catalog, loaded once and shared freely across threads
//! - **Forgiving** lookups: unknown ids drop out instead of failing
//!
//! ## Core Concepts
//!
//! ### Resolution Pipeline
//!
//! ```text
//! [CharacterBuild] → [attributes + properties] → [merge] → [additions] → [CharacterSheet]
//! ```
//!
//! 1. **Attributes** are base stats interpolated from promotion curves
//! 2. **Properties** are bonuses from skill trees, light cones, relics and sets
//! 3. **Merge** sums same-keyed entries across sources
//! 4. **Additions** convert properties into absolute per-field totals
//!
//! ## Example
//!
//! ```rust
//! use railstat::*;
//!
//! let mut source = MemorySource::empty();
//! for domain in Domain::ALL {
//!     source.insert(domain, "{}");
//! }
//! source.insert(
//!     Domain::Characters,
//!     r#"{"1001": {"id": "1001", "name": "March 7th", "rarity": 4}}"#,
//! );
//! let catalog = Catalog::load(&source).unwrap();
//!
//! let sheet = resolve_character(&catalog, &CharacterBuild::new("1001").level(80)).unwrap();
//! assert_eq!(sheet.name, "March 7th");
//! assert!(sheet.properties.is_empty());
//! assert!(sheet.additions.is_empty());
//! ```
//!
//! ## Modules
//!
//! - [`source`] - Where reference tables are read from
//! - [`catalog`] - Loaded reference tables and lookups
//! - [`records`] - Reference record types
//! - [`build`] - Build input types
//! - [`sheet`] - Resolved output types
//! - [`format`] - Display formatting and description templates
//! - [`attribute`] - Base attributes from promotion curves
//! - [`property`] - Bonus properties and skill level deltas
//! - [`merge`] - Multi-source merging
//! - [`addition`] - Per-field addition totals
//! - [`resolver`] - Main build resolver
//! - [`error`] - Error types

pub mod addition;
pub mod attribute;
pub mod build;
pub mod catalog;
pub mod error;
pub mod format;
pub mod merge;
pub mod property;
pub mod records;
pub mod resolver;
pub mod sheet;
pub mod source;
pub mod table;

// Re-export main types for convenience
pub use catalog::Catalog;
pub use error::CatalogError;
pub use resolver::{
    resolve_character, resolve_light_cone, resolve_relic, BuildResolver, ResolverOptions,
};
pub use table::Table;

pub use source::{DirectorySource, Domain, MemorySource, TableSource};

// Re-export build inputs and sheet outputs
pub use build::{CharacterBuild, LevelEntry, LightConeBuild, RelicBuild, SubAffixBuild};
pub use sheet::{
    AvatarInfo, CharacterSheet, ElementInfo, LightConeInfo, PathInfo, RelicInfo, RelicSetInfo,
    SkillInfo, SkillTreeInfo, StatEntry,
};
