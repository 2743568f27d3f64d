//! Planar vector helpers.
//! The pet moves on the ground plane, so points are [`Vec2`] values whose
//! `x` is the scene's x axis and whose `y` carries the scene's z axis.
use glam::Vec2;

use crate::numeric::normalize_degrees;
use crate::MODEL_FACING_OFFSET_DEG;

/// Builds a ground-plane point from scene `x` and `z` coordinates.
#[must_use]
pub const fn ground(x: f32, z: f32) -> Vec2 {
    Vec2::new(x, z)
}

/// Returns the planar distance between two ground points.
///
/// # Examples
/// ```
/// use whiskers::vector_math::{ground, planar_distance};
/// let distance = planar_distance(ground(0.0, 0.0), ground(3.0, 4.0));
/// assert!((distance - 5.0).abs() < f32::EPSILON);
/// ```
#[must_use]
pub fn planar_distance(from: Vec2, to: Vec2) -> f32 {
    from.distance(to)
}

/// Returns the yaw in degrees the model needs to face `to` from `from`.
///
/// The bearing is `atan2(dx, dz)` shifted by the model's forward-axis
/// offset and normalised into `(-180, 180]`. Coincident points keep the
/// bearing of a zero vector, which is the offset itself.
///
/// # Examples
/// ```
/// use whiskers::vector_math::{facing_degrees, ground};
/// // Straight ahead along +z: bearing 0, plus the model's half turn.
/// let yaw = facing_degrees(ground(0.0, 0.0), ground(0.0, 2.0));
/// assert!((yaw - 180.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn facing_degrees(from: Vec2, to: Vec2) -> f32 {
    let delta = to - from;
    if !delta.is_finite() {
        return normalize_degrees(MODEL_FACING_OFFSET_DEG);
    }
    let bearing = delta.x.atan2(delta.y).to_degrees();
    normalize_degrees(bearing + MODEL_FACING_OFFSET_DEG)
}
