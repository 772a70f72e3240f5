//! # Game Mathematics
//!
//! Pure numeric helpers for gameplay code.
//!
//! All vectors use the host convention: +Y is up, +Z is forward and +X is
//! right. None of the helpers validate their inputs; degenerate ranges and
//! unreachable targets yield NaN or infinity, which callers must expect.

pub mod ballistics;
pub mod hit_direction;
pub mod iso;
pub mod range;

pub use ballistics::*;
pub use hit_direction::*;
pub use iso::*;
pub use range::*;

use cgmath::{InnerSpace, Vector3};

/// Unsigned angle in degrees between two vectors, in `[0, 180]`.
///
/// Returns 0 when either vector is (nearly) zero.
pub fn angle_between(from: Vector3<f32>, to: Vector3<f32>) -> f32 {
    let denominator = (from.magnitude2() * to.magnitude2()).sqrt();
    if denominator < 1e-15 {
        return 0.0;
    }
    let cosine = (from.dot(to) / denominator).clamp(-1.0, 1.0);
    cosine.acos().to_degrees()
}
