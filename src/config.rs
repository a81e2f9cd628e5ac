//! Optional user configuration in `~/.flexta/config.toml`
//!
//! Every field has a default, so a missing file is the same as an empty one.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::paths;
use crate::settings::{SettingsStore, DEFAULT_RECENT_LIMIT};
use crate::validation::expand;

/// Configuration for Flexta
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub settings: SettingsSection,
    #[serde(default)]
    pub templates: TemplatesSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSection {
    /// Settings database location (default: ~/.flexta/settings.db)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<String>,
    /// Entries shown by `flexta recent` when no limit is given
    #[serde(default = "default_recent_limit")]
    pub recent_limit: usize,
}

fn default_recent_limit() -> usize {
    DEFAULT_RECENT_LIMIT
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            db_path: None,
            recent_limit: default_recent_limit(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplatesSection {
    /// Override templates directory (default: <exe dir>/resources/templates)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,
}

impl Config {
    /// Load `~/.flexta/config.toml`, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Load a config file, falling back to defaults if absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::load_from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn load_from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid flexta configuration")?;
        Ok(config)
    }

    /// Settings database location after `~` expansion
    pub fn db_path(&self) -> PathBuf {
        match &self.settings.db_path {
            Some(path) => expand(path),
            None => paths::settings_db(),
        }
    }

    /// Templates directory after `~` expansion
    pub fn templates_dir(&self) -> PathBuf {
        match &self.templates.dir {
            Some(dir) => expand(dir),
            None => paths::install_templates_dir(),
        }
    }

    /// Settings store at the configured location
    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::open(self.db_path())
    }
}
