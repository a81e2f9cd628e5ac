use anyhow::{Context, Result};

use flexta::templates::{self, TemplateSlot};
use flexta::Config;

pub fn execute(config: &Config, json: bool) -> Result<i32> {
    let dir = config.templates_dir();
    let names = templates::available(&dir)
        .with_context(|| format!("Failed to read templates directory: {:?}", dir))?;

    if json {
        let result = serde_json::json!({
            "templates_dir": dir,
            "templates": names,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(0);
    }

    println!("Templates in {}:", dir.display());
    for name in &names {
        let overrides: Vec<&str> = TemplateSlot::all()
            .iter()
            .filter(|slot| dir.join(slot.override_name(name)).is_file())
            .map(|slot| slot.filename())
            .collect();
        if overrides.is_empty() {
            println!("  {} (built-in)", name);
        } else {
            println!("  {} (overrides {})", name, overrides.join(", "));
        }
    }

    Ok(0)
}
