use std::f64::consts::{PI, TAU};

use glam::DVec2;

/// Forward direction of an unrotated camera on the ground plane.
pub const UP_VECTOR: DVec2 = DVec2::new(0.0, 1.0);

/// Unsigned angle between two planar vectors, in `[0, π]`.
///
/// Returns zero when either vector has zero length.
pub fn angle_between(a: DVec2, b: DVec2) -> f64 {
    let magnitude = a.length() * b.length();
    if magnitude == 0.0 {
        return 0.0;
    }
    (a.dot(b) / magnitude).clamp(-1.0, 1.0).acos()
}

/// Signed angle from [`UP_VECTOR`] to `v`, counterclockwise positive.
///
/// Vectors pointing to the right of the up vector (positive x) give negative
/// angles, vectors to the left give positive angles. A vector straight down
/// maps to `+π`.
pub fn heading_from_up(v: DVec2) -> f64 {
    let angle = angle_between(UP_VECTOR, v);
    if v.x > UP_VECTOR.x {
        -angle
    } else {
        angle
    }
}

/// Wrap an angle into `(-π, π]`.
pub fn wrap_angle(angle: f64) -> f64 {
    PI - (PI - angle).rem_euclid(TAU)
}

/// Rotate a planar vector counterclockwise by `angle` radians.
#[inline]
pub fn rotate(v: DVec2, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(v.x * cos - v.y * sin, v.y * cos + v.x * sin)
}
