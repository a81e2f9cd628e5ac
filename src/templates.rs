//! Starter file templates
//!
//! Built-in defaults are embedded at compile time. A templates directory
//! (normally `<exe dir>/resources/templates/`) can override any of them:
//! files are matched by `<template>.<ext>`, so `default.css` replaces the
//! built-in stylesheet and `landing.html` belongs to a `landing` template set.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::ScaffoldError;

/// Template set used when none is named
pub const DEFAULT_TEMPLATE: &str = "default";

// =============================================================================
// Embedded Defaults
// =============================================================================

mod builtin {
    pub const INDEX_HTML: &str = include_str!("../resources/defaults/index.html");
    pub const STYLES_CSS: &str = include_str!("../resources/defaults/styles.css");
    pub const SCRIPT_JS: &str = include_str!("../resources/defaults/script.js");
}

/// One of the three files every new project receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TemplateSlot {
    Html,
    Css,
    Js,
}

impl TemplateSlot {
    /// Every slot, in the order files are written
    pub fn all() -> &'static [TemplateSlot] {
        &[TemplateSlot::Html, TemplateSlot::Css, TemplateSlot::Js]
    }

    /// Name of the file written into the project
    pub fn filename(&self) -> &'static str {
        match self {
            TemplateSlot::Html => "index.html",
            TemplateSlot::Css => "styles.css",
            TemplateSlot::Js => "script.js",
        }
    }

    /// Extension used to find override files
    pub fn extension(&self) -> &'static str {
        match self {
            TemplateSlot::Html => "html",
            TemplateSlot::Css => "css",
            TemplateSlot::Js => "js",
        }
    }

    pub fn builtin(&self) -> &'static str {
        match self {
            TemplateSlot::Html => builtin::INDEX_HTML,
            TemplateSlot::Css => builtin::STYLES_CSS,
            TemplateSlot::Js => builtin::SCRIPT_JS,
        }
    }

    /// Override file name for a template set: `default.html`, `landing.css`, ...
    pub fn override_name(&self, template: &str) -> String {
        format!("{}.{}", template, self.extension())
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Content for one slot of a template set
///
/// An override file with non-blank content wins (trimmed, newline-terminated);
/// otherwise the built-in default is used.
pub fn resolve(
    templates_dir: &Path,
    template: &str,
    slot: TemplateSlot,
) -> Result<String, ScaffoldError> {
    let path = templates_dir.join(slot.override_name(template));

    if path.exists() {
        let content = fs::read_to_string(&path).map_err(|source| ScaffoldError::Template {
            path: path.clone(),
            source,
        })?;
        let trimmed = content.trim();
        if !trimmed.is_empty() {
            tracing::debug!(template = %path.display(), "using override template");
            return Ok(format!("{}\n", trimmed));
        }
    }

    Ok(slot.builtin().to_string())
}

/// Template sets available in a directory, sorted, always including `default`
///
/// A missing directory yields just the built-in set.
pub fn available(templates_dir: &Path) -> std::io::Result<Vec<String>> {
    let mut names = BTreeSet::new();
    names.insert(DEFAULT_TEMPLATE.to_string());

    if !templates_dir.exists() {
        return Ok(names.into_iter().collect());
    }

    for entry in fs::read_dir(templates_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let file_name = file_name.to_string_lossy();
        if let Some((stem, ext)) = file_name.split_once('.') {
            if !stem.is_empty() && !ext.is_empty() {
                names.insert(stem.to_string());
            }
        }
    }

    Ok(names.into_iter().collect())
}
