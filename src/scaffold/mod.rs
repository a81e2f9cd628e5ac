//! Project scaffolding
//!
//! Creates a fresh project directory and writes `index.html`, `styles.css`
//! and `script.js` into it. Inputs are validated first, in a fixed order:
//! name, location, then whether the target already exists.
//!
//! Template content is resolved before anything touches the disk. If a file
//! write fails after the directory was created, the directory is removed
//! again so no half-populated project is left behind. Parent folders that
//! were created for the project are removed with it.
//!
//! # Example
//!
//! ```no_run
//! use flexta::scaffold::Scaffold;
//!
//! let scaffold = Scaffold::new("/opt/flexta/resources/templates");
//! let project = scaffold.create_project("Demo", "~/sites")?;
//! println!("Created {}", project.path.display());
//! # Ok::<(), flexta::error::ScaffoldError>(())
//! ```

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ScaffoldError, ValidationError};
use crate::templates::{self, TemplateSlot, DEFAULT_TEMPLATE};
use crate::validation::{does_folder_exist, expand, is_empty_name, is_invalid_path};

/// Outcome of a successful scaffold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectResult {
    /// The created project directory
    pub path: PathBuf,
    /// File name -> absolute path written
    pub files_written: BTreeMap<String, PathBuf>,
}

pub struct Scaffold {
    templates_path: PathBuf,
}

impl Scaffold {
    pub fn new(templates_path: impl AsRef<Path>) -> Self {
        Self {
            templates_path: templates_path.as_ref().to_path_buf(),
        }
    }

    /// Create `<base_path>/<name>` from the `default` template set
    pub fn create_project(
        &self,
        name: &str,
        base_path: &str,
    ) -> Result<ProjectResult, ScaffoldError> {
        self.create_project_from(name, base_path, DEFAULT_TEMPLATE)
    }

    /// Create `<base_path>/<name>` from a named template set
    pub fn create_project_from(
        &self,
        name: &str,
        base_path: &str,
        template: &str,
    ) -> Result<ProjectResult, ScaffoldError> {
        let project_dir = target_dir(name, Some(base_path))?;

        let mut contents = Vec::with_capacity(TemplateSlot::all().len());
        for slot in TemplateSlot::all() {
            contents.push((*slot, templates::resolve(&self.templates_path, template, *slot)?));
        }

        // Topmost folder this call creates; removed again on failure
        let created_root = first_missing_ancestor(&project_dir);

        if let Some(parent) = project_dir.parent() {
            if let Err(source) = fs::create_dir_all(parent) {
                if created_root != project_dir && created_root.exists() {
                    roll_back(&created_root);
                }
                return Err(ScaffoldError::CreateDir {
                    path: parent.to_path_buf(),
                    source,
                });
            }
        }
        // create_dir, not create_dir_all: never merge into an existing folder
        if let Err(source) = fs::create_dir(&project_dir) {
            if created_root != project_dir {
                roll_back(&created_root);
            }
            return Err(ScaffoldError::CreateDir {
                path: project_dir,
                source,
            });
        }

        let files_written = write_or_roll_back(&created_root, &project_dir, &contents)?;
        tracing::debug!(
            project = %project_dir.display(),
            template,
            files = files_written.len(),
            "scaffolded project"
        );
        Ok(ProjectResult {
            path: project_dir,
            files_written,
        })
    }
}

/// Validate inputs and compute the directory a project would be created in
///
/// Checks run in order: empty name, invalid location, existing folder.
pub fn target_dir(name: &str, base_path: Option<&str>) -> Result<PathBuf, ValidationError> {
    if is_empty_name(name) {
        return Err(ValidationError::EmptyName);
    }
    let base = match base_path {
        Some(base) if !is_invalid_path(Some(base)) => base.trim(),
        _ => return Err(ValidationError::InvalidLocation),
    };

    let project_dir = expand(base).join(name.trim());
    if does_folder_exist(&project_dir) {
        return Err(ValidationError::FolderExists(project_dir));
    }
    Ok(project_dir)
}

/// Topmost directory on the way to `dir` that does not exist yet
///
/// Returns `dir` itself when its parent already exists.
fn first_missing_ancestor(dir: &Path) -> PathBuf {
    let mut root = dir.to_path_buf();
    for ancestor in dir.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() || ancestor.exists() {
            break;
        }
        root = ancestor.to_path_buf();
    }
    root
}

/// Write every file into `project_dir`, removing `created_root` on failure
fn write_or_roll_back(
    created_root: &Path,
    project_dir: &Path,
    contents: &[(TemplateSlot, String)],
) -> Result<BTreeMap<String, PathBuf>, ScaffoldError> {
    write_files(project_dir, contents).map_err(|err| {
        roll_back(created_root);
        err
    })
}

fn roll_back(created_root: &Path) {
    if let Err(cleanup) = fs::remove_dir_all(created_root) {
        tracing::warn!(
            path = %created_root.display(),
            error = %cleanup,
            "failed to roll back partial project"
        );
    }
}

fn write_files(
    project_dir: &Path,
    contents: &[(TemplateSlot, String)],
) -> Result<BTreeMap<String, PathBuf>, ScaffoldError> {
    let mut files_written = BTreeMap::new();
    for (slot, content) in contents {
        let file_path = project_dir.join(slot.filename());
        fs::write(&file_path, content).map_err(|source| ScaffoldError::Write {
            path: file_path.clone(),
            source,
        })?;
        files_written.insert(slot.filename().to_string(), file_path);
    }
    Ok(files_written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn scaffold_without_overrides(root: &Path) -> Scaffold {
        Scaffold::new(root.join("no-templates"))
    }

    #[test]
    fn test_target_dir_checks_in_order() {
        assert_eq!(target_dir("", None), Err(ValidationError::EmptyName));
        assert_eq!(target_dir("  ", Some("")), Err(ValidationError::EmptyName));
        assert_eq!(target_dir("Demo", None), Err(ValidationError::InvalidLocation));
        assert_eq!(target_dir("Demo", Some(" ")), Err(ValidationError::InvalidLocation));
        assert_eq!(
            target_dir("Demo", Some("bad\0path")),
            Err(ValidationError::InvalidLocation)
        );
    }

    #[test]
    fn test_target_dir_trims_name() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap();

        let target = target_dir("  Demo  ", Some(base)).unwrap();
        assert_eq!(target, dir.path().join("Demo"));
    }

    #[test]
    fn test_create_project_writes_three_files() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap();
        let scaffold = scaffold_without_overrides(dir.path());

        let result = scaffold.create_project("Demo", base).unwrap();

        assert_eq!(result.path, dir.path().join("Demo"));
        assert_eq!(result.files_written.len(), 3);
        for slot in TemplateSlot::all() {
            let written = &result.files_written[slot.filename()];
            assert_eq!(written, &dir.path().join("Demo").join(slot.filename()));
            let content = fs::read_to_string(written).unwrap();
            assert_eq!(content, slot.builtin());
        }
    }

    #[test]
    fn test_create_project_uses_overrides() {
        let dir = tempdir().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("default.html"), "  <p>custom</p>  ").unwrap();

        let base = dir.path().to_str().unwrap();
        let result = Scaffold::new(&templates).create_project("Demo", base).unwrap();

        let html = fs::read_to_string(&result.files_written["index.html"]).unwrap();
        assert_eq!(html, "<p>custom</p>\n");
        let css = fs::read_to_string(&result.files_written["styles.css"]).unwrap();
        assert_eq!(css, TemplateSlot::Css.builtin());
    }

    #[test]
    fn test_create_project_rejects_empty_name() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap();
        let scaffold = scaffold_without_overrides(dir.path());

        let err = scaffold.create_project("", base).unwrap_err();
        assert_eq!(err.as_validation(), Some(&ValidationError::EmptyName));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_create_project_twice_reports_existing_folder() {
        let dir = tempdir().unwrap();
        let base = dir.path().to_str().unwrap();
        let scaffold = scaffold_without_overrides(dir.path());

        scaffold.create_project("Demo", base).unwrap();
        let err = scaffold.create_project("Demo", base).unwrap_err();

        assert!(matches!(
            err.as_validation(),
            Some(ValidationError::FolderExists(path)) if path == &dir.path().join("Demo")
        ));
        assert_eq!(err.to_string(), "Project folder already exists.");
    }

    #[test]
    fn test_create_project_creates_missing_base() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("a").join("b");
        let scaffold = scaffold_without_overrides(dir.path());

        let result = scaffold
            .create_project("Demo", base.to_str().unwrap())
            .unwrap();
        assert!(result.path.join("index.html").is_file());
    }

    #[test]
    fn test_template_failure_leaves_nothing_behind() {
        let dir = tempdir().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir_all(templates.join("default.js")).unwrap();

        let base = dir.path().join("projects");
        fs::create_dir(&base).unwrap();

        let err = Scaffold::new(&templates)
            .create_project("Demo", base.to_str().unwrap())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::Template { .. }));
        assert!(!base.join("Demo").exists());
    }

    #[test]
    fn test_write_failure_removes_project_dir() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("Demo");
        fs::create_dir(&project).unwrap();
        // A directory where a file should go makes the write fail
        fs::create_dir(project.join("styles.css")).unwrap();

        let contents: Vec<_> = TemplateSlot::all()
            .iter()
            .map(|slot| (*slot, slot.builtin().to_string()))
            .collect();
        let err = write_or_roll_back(&project, &project, &contents).unwrap_err();

        assert!(matches!(
            &err,
            ScaffoldError::Write { path, .. } if path == &project.join("styles.css")
        ));
        assert!(!project.exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_write_failure_removes_created_parents() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("a").join("b");
        let project = base.join("Demo");
        assert_eq!(first_missing_ancestor(&project), dir.path().join("a"));

        fs::create_dir_all(project.join("index.html")).unwrap();
        let contents = vec![(TemplateSlot::Html, "<p></p>".to_string())];
        let err = write_or_roll_back(&dir.path().join("a"), &project, &contents).unwrap_err();

        assert!(matches!(err, ScaffoldError::Write { .. }));
        assert!(!dir.path().join("a").exists());
        assert!(dir.path().exists());
    }

    #[test]
    fn test_first_missing_ancestor_stops_at_existing() {
        let dir = tempdir().unwrap();
        let project = dir.path().join("Demo");
        assert_eq!(first_missing_ancestor(&project), project);

        fs::create_dir(dir.path().join("a")).unwrap();
        let nested = dir.path().join("a").join("b").join("Demo");
        assert_eq!(first_missing_ancestor(&nested), dir.path().join("a").join("b"));
    }

    #[test]
    fn test_named_template() {
        let dir = tempdir().unwrap();
        let templates = dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("landing.js"), "alert(1);").unwrap();

        let base = dir.path().to_str().unwrap();
        let result = Scaffold::new(&templates)
            .create_project_from("Site", base, "landing")
            .unwrap();

        let js = fs::read_to_string(&result.files_written["script.js"]).unwrap();
        assert_eq!(js, "alert(1);\n");
    }
}
