pub mod config;
pub mod error;
pub mod paths;
pub mod scaffold;
pub mod settings;
pub mod templates;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{ScaffoldError, StorageError, ValidationError};
pub use scaffold::{ProjectResult, Scaffold};
pub use settings::{RecentProject, SettingsStore};
