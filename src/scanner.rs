//! Project directory scanning.
//!
//! A project is any non-hidden subdirectory of the base directory. The
//! resulting list is sorted by name and treated as immutable for the
//! duration of one run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A candidate project directory.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Project {
    /// Directory name
    pub name: String,
    /// Absolute path to the directory
    pub path: PathBuf,
}

/// Scans `base_dir` for project directories.
///
/// Hidden entries (leading dot) and plain files are skipped. The returned
/// list is sorted by name.
pub fn scan(base_dir: &Path) -> Result<Vec<Project>> {
    let entries = fs::read_dir(base_dir).context(format!(
        "Failed to read directory: {}",
        base_dir.display()
    ))?;

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.path().is_dir() {
            continue;
        }
        let Some(name) = entry.file_name().to_str().map(String::from) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        projects.push(Project {
            path: base_dir.join(&name),
            name,
        });
    }

    projects.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_sorted_and_filtered() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path();
        fs::create_dir(base.join("zeta")).unwrap();
        fs::create_dir(base.join("alpha")).unwrap();
        fs::create_dir(base.join(".hidden")).unwrap();
        fs::write(base.join("not-a-dir.txt"), "").unwrap();

        let projects = scan(base).unwrap();
        let names: Vec<&str> = projects.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert_eq!(projects[0].path, base.join("alpha"));
    }

    #[test]
    fn test_scan_empty_dir() {
        let temp_dir = TempDir::new().unwrap();
        let projects = scan(temp_dir.path()).unwrap();
        assert!(projects.is_empty());
    }

    #[test]
    fn test_scan_missing_dir_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(scan(&missing).is_err());
    }
}
