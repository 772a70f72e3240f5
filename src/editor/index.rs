//! Asset index refreshing.

use crate::ToolkitResult;
use std::fs;
use std::path::{Path, PathBuf};

/// The host's catalogue of assets, refreshed after files change on disk.
pub trait AssetIndex {
    /// Re-reads the asset tree.
    fn refresh(&mut self) -> ToolkitResult<()>;
}

/// An asset index backed by a directory listing.
///
/// Entries are paths relative to the asset root, sorted, directories
/// included.
#[derive(Debug, Clone)]
pub struct DirectoryIndex {
    root: PathBuf,
    entries: Vec<PathBuf>,
}

impl DirectoryIndex {
    /// Creates an index for `root`. Call [`AssetIndex::refresh`] to fill it.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            entries: Vec::new(),
        }
    }

    /// The asset root being indexed.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Indexed paths, relative to the root.
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    /// Whether `relative` was present at the last refresh.
    pub fn contains(&self, relative: impl AsRef<Path>) -> bool {
        self.entries
            .binary_search_by(|entry| entry.as_path().cmp(relative.as_ref()))
            .is_ok()
    }

    fn scan(&self, dir: &Path, entries: &mut Vec<PathBuf>) -> ToolkitResult<()> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();
            if let Ok(relative) = path.strip_prefix(&self.root) {
                entries.push(relative.to_path_buf());
            }
            // Symlinks are listed but not followed.
            if entry.file_type()?.is_dir() {
                self.scan(&path, entries)?;
            }
        }
        Ok(())
    }
}

impl AssetIndex for DirectoryIndex {
    fn refresh(&mut self) -> ToolkitResult<()> {
        let mut entries = Vec::new();
        self.scan(&self.root, &mut entries)?;
        entries.sort();
        log::debug!(
            "Indexed {} assets under {}",
            entries.len(),
            self.root.display()
        );
        self.entries = entries;
        Ok(())
    }
}
