//! Settings module - user preferences and recent projects
//!
//! Persists a key/value settings table and an ordered recent-projects list
//! in `~/.flexta/settings.db`. The database file and schema are created on
//! first use; every operation opens its own connection and drops it before
//! returning.
//!
//! # Example
//!
//! ```no_run
//! use flexta::{paths, settings::SettingsStore};
//!
//! let store = SettingsStore::open(paths::settings_db());
//! store.add_recent_project("/home/user/sites/demo")?;
//! for path in store.get_recent_projects(10)? {
//!     println!("{}", path);
//! }
//! # Ok::<(), flexta::error::StorageError>(())
//! ```

mod store;

pub use store::{Clock, SettingsStore};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Setting key holding the folder the user last picked
pub const LAST_USED_FOLDER: &str = "last_used_folder";

/// Default number of entries shown in recent-project listings
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// A recently created or opened project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentProject {
    pub path: String,
    pub last_opened: DateTime<Utc>,
}
