//! Character sheet example: resolve a full build against an index folder
//!
//! This example demonstrates:
//! - Loading the catalog from `RAILSTAT_INDEX_DIR` (default `index/en`)
//! - Describing a build in code, or reading one from a JSON file
//! - Printing the resolved sheet
//!
//! Run with `cargo run --example character_sheet -- [build.json]`.

use railstat::*;

fn default_build() -> CharacterBuild {
    CharacterBuild::new("1102")
        .rank(1)
        .level(80)
        .promotion(6)
        .skill_tree("1102001", 6)
        .skill_tree("1102002", 10)
        .skill_tree("1102201", 1)
        .light_cone(LightConeBuild::new("23001", 1, 80, 6))
        .relic(
            RelicBuild::new("61021")
                .level(15)
                .main_affix("1")
                .sub_affix("8", 2, 1),
        )
        .relic(RelicBuild::new("61022").level(15).main_affix("1"))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = DirectorySource::from_env();
    println!("Loading reference tables from {}", source.root().display());
    let catalog = Catalog::load(&source)?;

    let build = match std::env::args().nth(1) {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => default_build(),
    };

    let Some(sheet) = resolve_character(&catalog, &build) else {
        println!("Unknown character: {}", build.id);
        return Ok(());
    };

    println!("\n=== {} (rank {}, Lv. {}) ===", sheet.name, sheet.rank, sheet.level);
    if let Some(path) = &sheet.path {
        println!("Path: {}", path.name);
    }

    println!("\nSkills:");
    for skill in &sheet.skills {
        println!("  {} Lv. {}/{}", skill.name, skill.level, skill.max_level);
    }

    println!("\nStats:");
    for attribute in &sheet.attributes {
        match sheet.addition(&attribute.field) {
            Some(addition) => println!(
                "  {:<12} {:>8} + {}",
                attribute.name, attribute.display, addition.display
            ),
            None => println!("  {:<12} {:>8}", attribute.name, attribute.display),
        }
    }

    println!("\nActive sets:");
    for set in &sheet.relic_sets {
        println!("  {} ({}pc): {}", set.name, set.num, set.desc);
    }

    println!("\n=== JSON ===");
    println!("{}", serde_json::to_string_pretty(&sheet)?);
    Ok(())
}
