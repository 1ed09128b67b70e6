//! Polar coordinate helpers

use bevy::math::{Quat, Vec3};

/// Convert polar coordinates (radius, angle in radians) to a position on the
/// XY plane
pub fn polar_to_cartesian(radius: f32, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    Vec3::new(radius * cos, radius * sin, 0.0)
}

/// Rotation about the vertical (Y) axis by `degrees`
pub fn spin_about_vertical(degrees: f32) -> Quat {
    Quat::from_rotation_y(degrees.to_radians())
}
