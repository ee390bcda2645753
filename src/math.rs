//! Directed-frame math over [`glam::Vec2`].
//!
//! Free functions used by the rig to place features relative to reference
//! points on the head: angle and magnitude queries, rotation, midpoints.
//! All functions are pure; none mutate their arguments.

use crate::errors::RigError;
use glam::Vec2;
use std::f32::consts::FRAC_PI_2;

/// Rotates `v` about the origin by `angle` radians.
pub fn rotate_vec(v: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}

/// Polar angle of `v - center`, measured from the vertical axis.
///
/// Not `atan2`: when the x-component is exactly zero the result is ±π/2 by
/// the sign of the y-component, otherwise `atan(y/x) + π/2 ± π/2` with the
/// sign chosen by the sign of x. `angle_of(Vec2::new(1.0, 0.0), Vec2::ZERO)`
/// is 0. Downstream orientation logic assumes this convention.
pub fn angle_of(v: Vec2, center: Vec2) -> f32 {
    let p = v - center;
    if p.x == 0.0 {
        return if p.y < 0.0 { -FRAC_PI_2 } else { FRAC_PI_2 };
    }
    (p.y / p.x).atan() + FRAC_PI_2 + if p.x < 0.0 { FRAC_PI_2 } else { -FRAC_PI_2 }
}

/// Euclidean norm of `v`.
pub fn magnitude(v: Vec2) -> f32 {
    v.length()
}

/// Returns `v` rescaled along its own direction to `length(v) + delta`.
///
/// The zero vector has no direction; callers must not pass one.
pub fn extend_magnitude(v: Vec2, delta: f32) -> Result<Vec2, RigError> {
    let len = v.length();
    if len == 0.0 {
        return Err(RigError::DegenerateVector);
    }
    Ok(v / len * (len + delta))
}

/// Returns `v` rescaled along its own direction to exactly `mag`.
pub fn with_magnitude(v: Vec2, mag: f32) -> Result<Vec2, RigError> {
    let len = v.length();
    if len == 0.0 {
        return Err(RigError::DegenerateVector);
    }
    Ok(v / len * mag)
}

pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) / 2.0
}
