//! Input predicates for project names and locations.
//!
//! Pure functions; none of them touch the filesystem except
//! [`does_folder_exist`], which only stats.

use std::path::{Path, PathBuf};

/// True if the name is empty or whitespace only
pub fn is_empty_name(name: &str) -> bool {
    name.trim().is_empty()
}

/// True if the path is missing, blank, or contains a NUL byte
///
/// Any other string is a well-formed path on every supported platform once
/// `~` is expanded. Existence is not checked.
pub fn is_invalid_path(path: Option<&str>) -> bool {
    let Some(raw) = path else {
        return true;
    };
    let text = raw.trim();
    text.is_empty() || text.contains('\0')
}

/// True only if the path (after `~` expansion) names an existing entry
pub fn does_folder_exist(path: impl AsRef<Path>) -> bool {
    let text = path.as_ref().to_string_lossy();
    if text.contains('\0') {
        return false;
    }
    expand(&text).try_exists().unwrap_or(false)
}

/// Expand a leading `~` into the user's home directory
pub fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
