//! Position / orientation / scale of a mesh.
//!
//! Provides a [`Transform`] struct with a fluent API. The world matrix is
//! derived from the three fields on demand, so it is always recomputed from
//! the current state each frame.

use crate::math::{mat4::Mat4, vec3::Vec3};

/// A 3D transform with position, orientation (Euler angles in degrees), and scale.
///
/// Provides a fluent API where mutating methods return `&mut Self` for chaining:
///
/// ```ignore
/// transform
///     .set_position_xyz(0.0, 0.0, 3.0)
///     .rotate_y(15.0)
///     .set_scale_uniform(2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    position: Vec3,
    orientation: Vec3, // degrees: x=pitch, y=yaw, z=roll
    scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            orientation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new(position: Vec3, orientation: Vec3, scale: Vec3) -> Self {
        Self {
            position,
            orientation,
            scale,
        }
    }

    // ============ Position ============

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) -> &mut Self {
        self.position = position;
        self
    }

    pub fn set_position_xyz(&mut self, x: f32, y: f32, z: f32) -> &mut Self {
        self.position = Vec3::new(x, y, z);
        self
    }

    /// Translate by a delta vector.
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        self.position = self.position + delta;
        self
    }

    // ============ Orientation ============

    /// Get the orientation (Euler angles in degrees).
    pub fn orientation(&self) -> Vec3 {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: Vec3) -> &mut Self {
        self.orientation = orientation;
        self
    }

    /// Rotate around the X axis (pitch), in degrees.
    pub fn rotate_x(&mut self, degrees: f32) -> &mut Self {
        self.orientation.x += degrees;
        self
    }

    /// Rotate around the Y axis (yaw), in degrees.
    pub fn rotate_y(&mut self, degrees: f32) -> &mut Self {
        self.orientation.y += degrees;
        self
    }

    /// Rotate around the Z axis (roll), in degrees.
    pub fn rotate_z(&mut self, degrees: f32) -> &mut Self {
        self.orientation.z += degrees;
        self
    }

    // ============ Scale ============

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: Vec3) -> &mut Self {
        self.scale = scale;
        self
    }

    /// Set uniform scale (same value for x, y, z).
    pub fn set_scale_uniform(&mut self, s: f32) -> &mut Self {
        self.scale = Vec3::new(s, s, s);
        self
    }

    // ============ Matrix Generation ============

    /// Generate the world matrix.
    ///
    /// Order: Scale * Rotation(Yaw * Pitch * Roll) * Translation
    /// (row vectors: scale applied first, then rotation, then translation)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::scaling(self.scale.x, self.scale.y, self.scale.z)
            * Mat4::euler(self.orientation)
            * Mat4::translation(self.position.x, self.position.y, self.position.z)
    }
}
