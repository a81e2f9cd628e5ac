use anyhow::{Context, Result};

use flexta::validation::{expand, is_invalid_path};
use flexta::Config;

pub fn list(config: &Config, limit: Option<usize>, json: bool) -> Result<i32> {
    let store = config.settings_store();
    let limit = limit.unwrap_or(config.settings.recent_limit);
    let projects = store
        .recent_projects(limit)
        .context("Failed to read recent projects")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
        return Ok(0);
    }

    if projects.is_empty() {
        println!("No recent projects");
        return Ok(0);
    }

    println!("📂 Recent projects:");
    for project in &projects {
        let opened = project.last_opened.with_timezone(&chrono::Local);
        println!("  {}  {}", opened.format("%Y-%m-%d %H:%M"), project.path);
    }

    Ok(0)
}

pub fn add(config: &Config, path: &str) -> Result<i32> {
    if is_invalid_path(Some(path)) {
        eprintln!("❌ Project path is invalid.");
        return Ok(1);
    }

    let path = expand(path.trim()).to_string_lossy().to_string();
    config
        .settings_store()
        .add_recent_project(&path)
        .context("Failed to record recent project")?;

    println!("✓ Recorded {}", path);
    Ok(0)
}

pub fn set(config: &Config, paths: Vec<String>) -> Result<i32> {
    if let Some(bad) = paths.iter().find(|p| is_invalid_path(Some(p.as_str()))) {
        eprintln!("❌ Project path is invalid: {:?}", bad);
        return Ok(1);
    }

    let paths: Vec<String> = paths
        .iter()
        .map(|p| expand(p.trim()).to_string_lossy().to_string())
        .collect();
    config
        .settings_store()
        .set_recent_projects(&paths)
        .context("Failed to replace recent projects")?;

    println!("✓ Recent projects replaced ({} entries)", paths.len());
    Ok(0)
}

pub fn clear(config: &Config) -> Result<i32> {
    config
        .settings_store()
        .set_recent_projects(Vec::<String>::new())
        .context("Failed to clear recent projects")?;

    println!("✓ Recent projects cleared");
    Ok(0)
}
