use anyhow::{Context, Result};

use flexta::validation::{does_folder_exist, expand, is_invalid_path};
use flexta::Config;

pub fn show(config: &Config) -> Result<i32> {
    let folder = config
        .settings_store()
        .get_last_used_folder()
        .context("Failed to read last used folder")?;

    match folder {
        Some(folder) => println!("{}", folder),
        None => println!("No folder remembered yet"),
    }
    Ok(0)
}

pub fn set(config: &Config, folder: &str) -> Result<i32> {
    if is_invalid_path(Some(folder)) {
        eprintln!("❌ Folder path is invalid.");
        return Ok(1);
    }

    let folder = expand(folder.trim());
    if !does_folder_exist(&folder) {
        eprintln!("⚠️  {} does not exist yet", folder.display());
    }

    config
        .settings_store()
        .set_last_used_folder(&folder.to_string_lossy())
        .context("Failed to store last used folder")?;

    println!("✓ New projects will be created in {}", folder.display());
    Ok(0)
}
