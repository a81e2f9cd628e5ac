//! Error types for the library surface.

use std::path::PathBuf;
use thiserror::Error;

/// User-input problems, shown inline and never fatal
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Project name cannot be empty.")]
    EmptyName,

    #[error("Project location is invalid.")]
    InvalidLocation,

    #[error("Project folder already exists.")]
    FolderExists(PathBuf),
}

/// Settings database failures
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Failed to create settings directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open settings database {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Settings database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Corrupt timestamp {value:?} for {path:?}")]
    Timestamp { path: String, value: String },
}

/// Project scaffolding failures
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to read template {path:?}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create project directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// The validation failure, if this error is one
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            ScaffoldError::Validation(v) => Some(v),
            _ => None,
        }
    }
}
