use anyhow::{Context, Result};

use flexta::scaffold::Scaffold;
use flexta::templates::DEFAULT_TEMPLATE;
use flexta::{Config, ScaffoldError};

pub fn execute(
    config: &Config,
    name: &str,
    location: Option<String>,
    template: Option<String>,
    json: bool,
) -> Result<i32> {
    let store = config.settings_store();

    let location = match location {
        Some(location) => location,
        None => match store.get_last_used_folder()? {
            Some(folder) => folder,
            None => std::env::current_dir()
                .context("Failed to read current directory")?
                .to_string_lossy()
                .to_string(),
        },
    };
    let template = template.as_deref().unwrap_or(DEFAULT_TEMPLATE);

    let scaffold = Scaffold::new(config.templates_dir());
    let project = match scaffold.create_project_from(name, &location, template) {
        Ok(project) => project,
        Err(ScaffoldError::Validation(err)) => {
            if json {
                let result = serde_json::json!({ "error": err.to_string() });
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                eprintln!("❌ {}", err);
            }
            return Ok(1);
        }
        Err(err) => return Err(err).context("Failed to create project"),
    };

    let project_path = project.path.to_string_lossy().to_string();
    store
        .add_recent_project(&project_path)
        .context("Failed to record recent project")?;
    if let Some(parent) = project.path.parent() {
        store
            .set_last_used_folder(&parent.to_string_lossy())
            .context("Failed to remember project folder")?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&project)?);
        return Ok(0);
    }

    println!("✓ Created project at {}", project.path.display());
    for (file, path) in &project.files_written {
        println!("  {:<12} {}", file, path.display());
    }

    Ok(0)
}
