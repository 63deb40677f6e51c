//! Avatar example: metadata lookups without resolving a build
//!
//! Looks up a profile avatar and a path by id and prints them as JSON.
//! Run with `cargo run --example avatar -- <avatar id> [path id]`.

use railstat::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let catalog = Catalog::load(&DirectorySource::from_env())?;

    let mut args = std::env::args().skip(1);
    let avatar_id = args.next().unwrap_or_else(|| "201102".to_string());
    let path_id = args.next().unwrap_or_else(|| "Rogue".to_string());

    match catalog.avatar_info(&avatar_id) {
        Some(avatar) => println!("{}", serde_json::to_string_pretty(&avatar)?),
        None => println!("No avatar with id {avatar_id}"),
    }
    match catalog.path_info(&path_id) {
        Some(path) => println!("{}", serde_json::to_string_pretty(&path)?),
        None => println!("No path with id {path_id}"),
    }
    Ok(())
}
