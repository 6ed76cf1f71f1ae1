//! Scene camera.
//!
//! # View Convention
//!
//! The view matrix is the camera's own transform, `Translation(position) *
//! Euler(orientation)`, applied directly to scene geometry rather than its
//! inverse. Backface culling, the clip planes and the screen mapping all
//! assume this: with the camera at the origin and no rotation, geometry in
//! front of the viewer has `+Z` view depth and negative clip-space `w`.
//!
//! Orientation is stored as Euler angles in degrees:
//! - **x / pitch**: rotation around X
//! - **y / yaw**: rotation around Y
//! - **z / roll**: rotation around Z

use serde::{Deserialize, Serialize};

use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Camera {
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
    /// Field of view in degrees.
    pub fov: f32,
    pub position: Vec3,
    pub orientation: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
            fov: 90.0,
            position: Vec3::ZERO,
            orientation: Vec3::ZERO,
        }
    }
}

impl Camera {
    pub fn new(near: f32, far: f32, fov: f32, position: Vec3, orientation: Vec3) -> Self {
        Self {
            near,
            far,
            fov,
            position,
            orientation,
        }
    }

    /// World space to view space: `Translation(position) * Euler(orientation)`.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(self.position.x, self.position.y, self.position.z)
            * Mat4::euler(self.orientation)
    }

    /// View space to clip space for a target of the given aspect ratio (width / height).
    pub fn projection_matrix(&self, aspect_ratio: f32) -> Mat4 {
        Mat4::perspective(self.fov, aspect_ratio, self.near, self.far)
    }
}
