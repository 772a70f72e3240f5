//! Project folder layouts.

use crate::config::{DEFAULT_PROJECT_FOLDERS, DEFAULT_PROJECT_ROOT};
use crate::ToolkitResult;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A root folder and the sub-folders to create inside it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderScaffold {
    pub root: String,
    pub folders: Vec<String>,
}

impl Default for FolderScaffold {
    fn default() -> Self {
        Self::new(DEFAULT_PROJECT_ROOT, DEFAULT_PROJECT_FOLDERS)
    }
}

impl FolderScaffold {
    /// Creates a layout from a root and its sub-folders.
    pub fn new<I, S>(root: impl Into<String>, folders: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            root: root.into(),
            folders: folders.into_iter().map(Into::into).collect(),
        }
    }

    /// Paths this layout describes under `asset_root`.
    pub fn paths(&self, asset_root: &Path) -> Vec<PathBuf> {
        let root = asset_root.join(&self.root);
        self.folders.iter().map(|folder| root.join(folder)).collect()
    }

    /// Creates every folder under `asset_root`, including missing parents.
    ///
    /// Existing folders are not an error.
    pub fn create_in(&self, asset_root: &Path) -> ToolkitResult<Vec<PathBuf>> {
        let paths = self.paths(asset_root);
        for path in &paths {
            fs::create_dir_all(path)?;
            debug!("Ensured folder {}", path.display());
        }
        Ok(paths)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let scaffold = FolderScaffold::default();
        assert_eq!(scaffold.root, "_Project");
        assert_eq!(scaffold.folders, vec!["Scripts", "Prefabs", "Art", "Scenes"]);
    }

    #[test]
    fn test_paths_are_relative_to_asset_root() {
        let scaffold = FolderScaffold::new("Game", ["Audio"]);
        let paths = scaffold.paths(Path::new("Assets"));
        assert_eq!(paths, vec![PathBuf::from("Assets").join("Game").join("Audio")]);
    }

    #[test]
    fn test_create_in_is_idempotent() {
        let assets = tempfile::tempdir().unwrap();
        let scaffold = FolderScaffold::default();

        let first = scaffold.create_in(assets.path()).unwrap();
        let second = scaffold.create_in(assets.path()).unwrap();

        assert_eq!(first, second);
        for path in &first {
            assert!(path.is_dir());
        }
    }

    #[test]
    fn test_create_in_fails_when_path_is_a_file() {
        let assets = tempfile::tempdir().unwrap();
        fs::write(assets.path().join("_Project"), b"not a folder").unwrap();

        let result = FolderScaffold::default().create_in(assets.path());
        assert!(matches!(result, Err(crate::ToolkitError::Io(_))));
    }
}
