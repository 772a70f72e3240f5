//! Projectile launch calculations.

use super::angle_between;
use crate::config::STANDARD_GRAVITY;
use cgmath::{Deg, InnerSpace, Quaternion, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

/// Ambient physics constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsSettings {
    /// World gravity acceleration
    pub gravity: Vector3<f32>,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: Vector3::new(0.0, -STANDARD_GRAVITY, 0.0),
        }
    }
}

impl PhysicsSettings {
    /// Magnitude of the gravity vector.
    pub fn gravity_magnitude(&self) -> f32 {
        self.gravity.magnitude()
    }

    /// Launch velocity for hitting `dest` from `start` at `alpha` degrees
    /// above the horizon, under these settings' gravity.
    ///
    /// See [`velocity_towards_target_with_angle`].
    pub fn velocity_towards_target(
        &self,
        alpha: f32,
        start: Vector3<f32>,
        dest: Vector3<f32>,
    ) -> Vector3<f32> {
        velocity_towards_target_with_angle(alpha, start, dest, self.gravity_magnitude())
    }

    /// Position of a projectile `t` seconds after leaving `start` with
    /// `velocity`, ignoring drag.
    pub fn position_at(&self, start: Vector3<f32>, velocity: Vector3<f32>, t: f32) -> Vector3<f32> {
        start + velocity * t + self.gravity * (0.5 * t * t)
    }
}

/// Computes the launch velocity that carries a projectile from `start` to
/// `dest` when fired at `alpha` degrees above the horizon.
///
/// `gravity` is the magnitude of a downward (-Y) acceleration. The result
/// is not validated: when the target cannot be reached at this angle the
/// components are NaN.
///
/// # Examples
///
/// ```
/// use lrs_toolkit::{cgmath::Vector3, velocity_towards_target_with_angle};
///
/// let start = Vector3::new(0.0, 0.0, 0.0);
/// let dest = Vector3::new(0.0, 0.0, 10.0);
/// let velocity = velocity_towards_target_with_angle(45.0, start, dest, 9.81);
///
/// // Straight ahead: no sideways component, equal rise and run.
/// assert!(velocity.x.abs() < 1e-4);
/// assert!((velocity.y - velocity.z).abs() < 1e-4);
/// ```
pub fn velocity_towards_target_with_angle(
    alpha: f32,
    start: Vector3<f32>,
    dest: Vector3<f32>,
    gravity: f32,
) -> Vector3<f32> {
    let angle = alpha.to_radians();

    let planar_target = Vector3::new(dest.x, 0.0, dest.z);
    let planar_start = Vector3::new(start.x, 0.0, start.z);

    let distance = (planar_target - planar_start).magnitude();
    let y_offset = start.y - dest.y;

    let initial_velocity = (1.0 / angle.cos())
        * ((0.5 * gravity * distance.powi(2)) / (distance * angle.tan() + y_offset)).sqrt();

    // Launch velocity as if the target were straight ahead (+Z).
    let velocity = Vector3::new(
        0.0,
        initial_velocity * angle.sin(),
        initial_velocity * angle.cos(),
    );

    let side = if planar_target.x > planar_start.x { 1.0 } else { -1.0 };
    let bearing = angle_between(Vector3::unit_z(), planar_target - planar_start) * side;

    Quaternion::from_angle_y(Deg(bearing)) * velocity
}
