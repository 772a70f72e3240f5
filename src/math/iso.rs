//! Isometric projection.

use crate::config::DEFAULT_ISO_EULER;
use cgmath::{Deg, Matrix3, Quaternion, Rotation3, Vector3};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static DEFAULT_PROJECTION: OnceLock<IsoProjection> = OnceLock::new();

/// Euler angles of an isometric rotation, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsoSettings {
    /// Rotation about x, y and z
    pub euler: [f32; 3],
}

impl Default for IsoSettings {
    fn default() -> Self {
        Self {
            euler: DEFAULT_ISO_EULER,
        }
    }
}

impl IsoSettings {
    /// Builds the projection these angles describe.
    pub fn projection(&self) -> IsoProjection {
        let [x, y, z] = self.euler;
        IsoProjection::from_euler(x, y, z)
    }
}

/// A fixed rotation that turns world-space input into an isometric frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    matrix: Matrix3<f32>,
}

impl Default for IsoProjection {
    fn default() -> Self {
        IsoSettings::default().projection()
    }
}

impl IsoProjection {
    /// Slightly tilted variant of the default angles, used by some camera
    /// rigs.
    pub const TILTED_EULER: [f32; 3] = [3.234, 45.0, 0.0];

    /// Builds the rotation from Euler angles in degrees.
    ///
    /// Rotations apply about z first, then x, then y.
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        let rotation = Quaternion::from_angle_y(Deg(y))
            * Quaternion::from_angle_x(Deg(x))
            * Quaternion::from_angle_z(Deg(z));
        Self {
            matrix: Matrix3::from(rotation),
        }
    }

    /// The process-wide projection using [`DEFAULT_ISO_EULER`].
    pub fn shared() -> &'static IsoProjection {
        DEFAULT_PROJECTION.get_or_init(IsoProjection::default)
    }

    /// Rotates `input` into the isometric frame.
    pub fn apply(&self, input: Vector3<f32>) -> Vector3<f32> {
        self.matrix * input
    }
}

/// Rotates `input` by the shared default isometric projection.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{cgmath::Vector3, to_iso};
///
/// let up = Vector3::new(0.0_f32, 1.0, 0.0);
/// let projected = to_iso(up);
/// assert!((projected.y - 1.0).abs() < 1e-6);
/// ```
pub fn to_iso(input: Vector3<f32>) -> Vector3<f32> {
    IsoProjection::shared().apply(input)
}

/// Method form of [`to_iso`] for vectors.
pub trait ToIso {
    /// Rotates `self` by the shared default isometric projection.
    fn to_iso(self) -> Self;
}

impl ToIso for Vector3<f32> {
    fn to_iso(self) -> Self {
        to_iso(self)
    }
}
