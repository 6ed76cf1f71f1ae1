pub mod mat4;
pub mod vec3;
pub mod vec4;

use std::f32::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f32) -> f32 {
    degrees * (PI / 180.0)
}

/// Cotangent of an angle given in degrees.
#[inline]
pub fn cot(degrees: f32) -> f32 {
    1.0 / deg_to_rad(degrees).tan()
}
