//! Single source of truth for the Flexta filesystem layout.
//!
//! This module defines WHERE data lives. It has no I/O beyond reading the
//! environment, no validation, no business logic.
//!
//! # User-Level Paths (~/.flexta/)
//!
//! ```text
//! ~/.flexta/
//! ├── config.toml              # Optional overrides
//! └── settings.db              # SQLite: settings + recent projects
//! ```
//!
//! Setting `FLEXTA_HOME` relocates the whole directory.
//!
//! # Install-Level Paths
//!
//! ```text
//! <exe dir>/
//! └── resources/templates/     # default.html, default.css, default.js, ...
//! ```

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable that replaces `~/.flexta`
pub const HOME_ENV: &str = "FLEXTA_HOME";

const SETTINGS_DIRNAME: &str = ".flexta";
const DB_FILENAME: &str = "settings.db";

// =============================================================================
// User Level (~/.flexta/)
// =============================================================================

/// User's flexta home directory: `~/.flexta/` (or `$FLEXTA_HOME`)
pub fn flexta_home() -> PathBuf {
    flexta_home_from(std::env::var_os(HOME_ENV))
}

/// Resolve the home directory from a `FLEXTA_HOME` value; empty means unset
fn flexta_home_from(override_dir: Option<OsString>) -> PathBuf {
    match override_dir {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => home_dir().join(SETTINGS_DIRNAME),
    }
}

/// Settings database: `~/.flexta/settings.db`
pub fn settings_db() -> PathBuf {
    flexta_home().join(DB_FILENAME)
}

/// Config file: `~/.flexta/config.toml`
pub fn config_path() -> PathBuf {
    flexta_home().join("config.toml")
}

/// The user's home directory, falling back to the working directory
pub fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

// =============================================================================
// Install Level
// =============================================================================

/// Bundled templates shipped next to the binary: `<exe dir>/resources/templates/`
pub fn install_templates_dir() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    templates_dir_in(&exe_dir)
}

/// Templates directory below an installation root
pub fn templates_dir_in(root: &Path) -> PathBuf {
    root.join("resources").join("templates")
}
