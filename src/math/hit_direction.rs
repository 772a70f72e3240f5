//! Hit-direction decomposition.

use crate::config::DEFAULT_HIT_INTENSITY;
use cgmath::{InnerSpace, Quaternion, Vector3};
use serde::{Deserialize, Serialize};

/// A rigid frame: a position plus its forward and right basis vectors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub position: Vector3<f32>,
    pub forward: Vector3<f32>,
    pub right: Vector3<f32>,
}

impl Frame {
    /// Creates a frame from explicit basis vectors.
    pub fn new(position: Vector3<f32>, forward: Vector3<f32>, right: Vector3<f32>) -> Self {
        Self {
            position,
            forward,
            right,
        }
    }

    /// Creates an unrotated frame (+Z forward, +X right) at `position`.
    pub fn at(position: Vector3<f32>) -> Self {
        Self::new(position, Vector3::unit_z(), Vector3::unit_x())
    }

    /// Creates a frame at `position` rotated by `rotation`.
    pub fn from_rotation(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Self::new(
            position,
            rotation * Vector3::unit_z(),
            rotation * Vector3::unit_x(),
        )
    }
}

/// Reaction amounts along a frame's right and forward axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitDirection {
    /// Negative when the hit came from the right
    pub horizontal: f32,
    /// Negative when the hit came from the front
    pub vertical: f32,
}

/// Splits an impact into horizontal and vertical reaction amounts.
///
/// The impact vector runs from the frame's position to `hit_point` and is
/// not normalized, so farther hits give proportionally larger amounts.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{cgmath::Vector3, hit_direction, Frame};
///
/// let frame = Frame::at(Vector3::new(0.0, 0.0, 0.0));
/// let hit = hit_direction(&frame, Vector3::new(0.0, 0.0, 1.0), 3.0);
/// assert_eq!(hit.horizontal, 0.0);
/// assert_eq!(hit.vertical, -3.0);
/// ```
pub fn hit_direction(frame: &Frame, hit_point: Vector3<f32>, intensity: f32) -> HitDirection {
    let impact = hit_point - frame.position;
    HitDirection {
        horizontal: -intensity * frame.right.dot(impact),
        vertical: -intensity * frame.forward.dot(impact),
    }
}

/// [`hit_direction`] with [`DEFAULT_HIT_INTENSITY`].
pub fn hit_direction_default(frame: &Frame, hit_point: Vector3<f32>) -> HitDirection {
    hit_direction(frame, hit_point, DEFAULT_HIT_INTENSITY)
}
