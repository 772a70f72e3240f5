//! # Configuration
//!
//! Toolkit-wide constants and the settings file loaded by the CLI.

use crate::{FolderScaffold, IsoSettings, PhysicsSettings, ToolkitError, ToolkitResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Standard gravity magnitude in m/s².
pub const STANDARD_GRAVITY: f32 = 9.81;

/// Default multiplier applied by [`crate::hit_direction`].
pub const DEFAULT_HIT_INTENSITY: f32 = 3.0;

/// Euler angles (degrees, x/y/z) of the default isometric rotation.
pub const DEFAULT_ISO_EULER: [f32; 3] = [0.0, 45.0, 0.0];

/// Folder created under the asset root by the default scaffold.
pub const DEFAULT_PROJECT_ROOT: &str = "_Project";

/// Sub-folders created inside [`DEFAULT_PROJECT_ROOT`].
pub const DEFAULT_PROJECT_FOLDERS: [&str; 4] = ["Scripts", "Prefabs", "Art", "Scenes"];

/// Settings shared by the CLI and embedding applications.
///
/// Every field falls back to its default when missing from the JSON
/// document, so a settings file only needs to name what it overrides.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::ToolkitConfig;
///
/// let config = ToolkitConfig::from_json_str(r#"{ "hit_intensity": 5.0 }"#).unwrap();
/// assert_eq!(config.hit_intensity, 5.0);
/// assert_eq!(config.scaffold.root, "_Project");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    /// Ambient physics constants
    pub physics: PhysicsSettings,
    /// Isometric rotation angles
    pub iso: IsoSettings,
    /// Hit-direction multiplier
    pub hit_intensity: f32,
    /// Project folder layout
    pub scaffold: FolderScaffold,
}

impl Default for ToolkitConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            iso: IsoSettings::default(),
            hit_intensity: DEFAULT_HIT_INTENSITY,
            scaffold: FolderScaffold::default(),
        }
    }
}

impl ToolkitConfig {
    /// Parses and validates a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> ToolkitResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ToolkitResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that the values can be used by the helpers.
    pub fn validate(&self) -> ToolkitResult<()> {
        let gravity = self.physics.gravity;
        if !(gravity.x.is_finite() && gravity.y.is_finite() && gravity.z.is_finite()) {
            return Err(ToolkitError::InvalidConfig(format!(
                "gravity must be finite, got {:?}",
                gravity
            )));
        }
        if !self.hit_intensity.is_finite() {
            return Err(ToolkitError::InvalidConfig(format!(
                "hit_intensity must be finite, got {}",
                self.hit_intensity
            )));
        }
        if self.iso.euler.iter().any(|angle| !angle.is_finite()) {
            return Err(ToolkitError::InvalidConfig(
                "iso euler angles must be finite".to_string(),
            ));
        }
        if self.scaffold.root.trim().is_empty() {
            return Err(ToolkitError::InvalidConfig(
                "scaffold root must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
