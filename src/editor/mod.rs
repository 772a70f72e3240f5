//! # Editor Module
//!
//! Project setup commands.
//!
//! The "Create Default Folders" command lays out the standard project
//! directories under the asset root and then refreshes the asset index so
//! the new folders show up.

pub mod index;
pub mod scaffold;

pub use index::*;
pub use scaffold::*;

use crate::ToolkitResult;
use std::path::{Path, PathBuf};

/// Creates `_Project/{Scripts,Prefabs,Art,Scenes}` under `asset_root` and
/// refreshes `index`.
///
/// Folders that already exist are left alone. Returns the created (or
/// already present) folder paths.
pub fn create_default_folders(
    asset_root: &Path,
    index: &mut impl AssetIndex,
) -> ToolkitResult<Vec<PathBuf>> {
    scaffold_and_refresh(&FolderScaffold::default(), asset_root, index)
}

/// Creates the folders described by `scaffold` and refreshes `index`.
pub fn scaffold_and_refresh(
    scaffold: &FolderScaffold,
    asset_root: &Path,
    index: &mut impl AssetIndex,
) -> ToolkitResult<Vec<PathBuf>> {
    let folders = scaffold.create_in(asset_root)?;
    index.refresh()?;
    Ok(folders)
}
