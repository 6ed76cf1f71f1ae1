//! 4x4 transformation matrix using the row-vector convention.
//!
//! # Convention
//! - Vectors are **row vectors** on the left: `v' = v * M`
//! - Storage is row-major, element (row `i`, column `j`) lives at flat offset `i * 4 + j`
//! - Translation is stored in **row 3**
//! - Transforms chain **left-to-right**: `v * A * B` applies A first, then B
//!
//! # Example
//! ```ignore
//! let world = scale * rotation * translation; // scale first, then rotate, then translate
//! let moved = vertex * world;
//! ```
//!
//! Every angle taken by a builder is in degrees.

use std::ops::Mul;

use super::vec3::Vec3;
use super::vec4::Vec4;
use super::{cot, deg_to_rad};

/// 4x4 matrix stored as `data[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat4 {
    data: [[f32; 4]; 4],
}

impl Mat4 {
    pub fn new(data: [[f32; 4]; 4]) -> Self {
        Mat4 { data }
    }

    pub fn identity() -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Builds a matrix from 16 row-major floats.
    pub fn from_flat(flat: [f32; 16]) -> Self {
        let mut data = [[0.0f32; 4]; 4];
        for (i, row) in data.iter_mut().enumerate() {
            row.copy_from_slice(&flat[i * 4..i * 4 + 4]);
        }
        Mat4 { data }
    }

    /// Returns the 16 floats in row-major order.
    pub fn to_flat(&self) -> [f32; 16] {
        let mut flat = [0.0f32; 16];
        for (i, row) in self.data.iter().enumerate() {
            flat[i * 4..i * 4 + 4].copy_from_slice(row);
        }
        flat
    }

    /// Creates a translation matrix.
    ///
    /// Translation is stored in row 3 (row-vector convention).
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [x, y, z, 1.0],
        ])
    }

    /// Creates a scale matrix.
    pub fn scaling(x: f32, y: f32, z: f32) -> Self {
        Mat4::new([
            [x, 0.0, 0.0, 0.0],
            [0.0, y, 0.0, 0.0],
            [0.0, 0.0, z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the X axis (pitch).
    pub fn pitch(degrees: f32) -> Self {
        let radians = deg_to_rad(degrees);
        let c = radians.cos();
        let s = radians.sin();
        Mat4::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Y axis (yaw).
    pub fn yaw(degrees: f32) -> Self {
        let radians = deg_to_rad(degrees);
        let c = radians.cos();
        let s = radians.sin();
        Mat4::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Rotation around the Z axis (roll).
    pub fn roll(degrees: f32) -> Self {
        let radians = deg_to_rad(degrees);
        let c = radians.cos();
        let s = radians.sin();
        Mat4::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Composed Euler rotation: `Yaw * Pitch * Roll`.
    ///
    /// `orientation.x` is pitch, `orientation.y` is yaw, `orientation.z` is roll,
    /// all in degrees. The product order is fixed.
    pub fn euler(orientation: Vec3) -> Self {
        Mat4::yaw(orientation.y) * Mat4::pitch(orientation.x) * Mat4::roll(orientation.z)
    }

    /// Perspective projection into clip space.
    ///
    /// The X row is divided by the aspect ratio and the W column carries `-1`,
    /// so `w_clip = -z_view` and a perspective divide is required afterwards.
    pub fn perspective(fov_degrees: f32, aspect_ratio: f32, near: f32, far: f32) -> Self {
        let f = cot(fov_degrees / 2.0);
        let depth = far - near;
        Mat4::new([
            [f / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, f, 0.0, 0.0],
            [0.0, 0.0, -(far / depth), -1.0],
            [0.0, 0.0, (far * near) / depth, 0.0],
        ])
    }

    /// Multiplies every vertex of a buffer by this matrix, in place.
    pub fn transform_vertices(&self, vertices: &mut [Vec4]) {
        for vertex in vertices.iter_mut() {
            *vertex = *vertex * *self;
        }
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

/// Matrix multiplication: `out = self * rhs`.
///
/// With row vectors, `v * (A * B)` applies A first, then B.
impl Mul<Mat4> for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Self::Output {
        let mut result = [[0.0f32; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                result[row][col] = self.data[row][0] * rhs.data[0][col]
                    + self.data[row][1] * rhs.data[1][col]
                    + self.data[row][2] * rhs.data[2][col]
                    + self.data[row][3] * rhs.data[3][col];
            }
        }

        Mat4::new(result)
    }
}

/// Transform a homogeneous row vector: `Vec4 * Mat4`.
impl Mul<Mat4> for Vec4 {
    type Output = Vec4;

    fn mul(self, m: Mat4) -> Self::Output {
        let d = &m.data;
        Vec4::new(
            self.x * d[0][0] + self.y * d[1][0] + self.z * d[2][0] + self.w * d[3][0],
            self.x * d[0][1] + self.y * d[1][1] + self.z * d[2][1] + self.w * d[3][1],
            self.x * d[0][2] + self.y * d[1][2] + self.z * d[2][2] + self.w * d[3][2],
            self.x * d[0][3] + self.y * d[1][3] + self.z * d[2][3] + self.w * d[3][3],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_vec4_eq(a: Vec4, b: Vec4) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
        assert_relative_eq!(a.w, b.w, epsilon = 1e-5);
    }

    #[test]
    fn flat_layout_is_row_major() {
        let m = Mat4::translation(1.0, 2.0, 3.0);
        let flat = m.to_flat();
        assert_eq!(&flat[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(Mat4::from_flat(flat), m);
    }

    #[test]
    fn translation_moves_points_not_directions() {
        let m = Mat4::translation(1.0, -2.0, 3.0);
        assert_vec4_eq(Vec4::point(1.0, 1.0, 1.0) * m, Vec4::point(2.0, -1.0, 4.0));
        let dir = Vec4::new(1.0, 1.0, 1.0, 0.0);
        assert_vec4_eq(dir * m, dir);
    }

    #[test]
    fn yaw_quarter_turn_maps_z_to_x() {
        // Row 2 of the yaw matrix is (-s, 0, c): +Z goes to -X for a +90 degree yaw.
        let v = Vec4::point(0.0, 0.0, 1.0) * Mat4::yaw(90.0);
        assert_vec4_eq(v, Vec4::point(-1.0, 0.0, 0.0));
    }

    #[test]
    fn pitch_and_roll_quarter_turns() {
        let v = Vec4::point(0.0, 1.0, 0.0) * Mat4::pitch(90.0);
        assert_vec4_eq(v, Vec4::point(0.0, 0.0, -1.0));
        let v = Vec4::point(1.0, 0.0, 0.0) * Mat4::roll(90.0);
        assert_vec4_eq(v, Vec4::point(0.0, -1.0, 0.0));
    }

    #[test]
    fn multiplication_order_is_left_to_right() {
        let s = Mat4::scaling(2.0, 2.0, 2.0);
        let t = Mat4::translation(1.0, 0.0, 0.0);
        let p = Vec4::point(1.0, 0.0, 0.0);
        // Scale then translate.
        assert_vec4_eq(p * (s * t), Vec4::point(3.0, 0.0, 0.0));
        // Translate then scale.
        assert_vec4_eq(p * (t * s), Vec4::point(4.0, 0.0, 0.0));
    }

    #[test]
    fn euler_order_is_yaw_pitch_roll() {
        let o = Vec3::new(30.0, 45.0, 60.0);
        let expected = Mat4::yaw(45.0) * Mat4::pitch(30.0) * Mat4::roll(60.0);
        assert_eq!(Mat4::euler(o), expected);
        let swapped = Mat4::roll(60.0) * Mat4::pitch(30.0) * Mat4::yaw(45.0);
        assert_ne!(Mat4::euler(o), swapped);
    }

    #[test]
    fn perspective_puts_negated_depth_in_w() {
        let m = Mat4::perspective(90.0, 1.0, 0.1, 100.0);
        let clip = Vec4::point(0.0, 0.0, 3.0) * m;
        assert_relative_eq!(clip.w, -3.0, epsilon = 1e-6);
        // cot(45) = 1, so x and y pass through before the divide.
        let clip = Vec4::point(1.0, 2.0, 3.0) * m;
        assert_relative_eq!(clip.x, 1.0, epsilon = 1e-5);
        assert_relative_eq!(clip.y, 2.0, epsilon = 1e-5);
    }

    #[test]
    fn perspective_divides_x_by_aspect() {
        let m = Mat4::perspective(90.0, 2.0, 0.1, 100.0);
        let flat = m.to_flat();
        assert_relative_eq!(flat[0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(flat[5], 1.0, epsilon = 1e-6);
        assert_relative_eq!(flat[2 * 4 + 3], -1.0);
    }

    #[test]
    fn transform_vertices_applies_to_every_record() {
        let mut buffer = vec![Vec4::point(0.0, 0.0, 0.0), Vec4::point(1.0, 1.0, 1.0)];
        Mat4::translation(0.0, 0.0, 5.0).transform_vertices(&mut buffer);
        assert_vec4_eq(buffer[0], Vec4::point(0.0, 0.0, 5.0));
        assert_vec4_eq(buffer[1], Vec4::point(1.0, 1.0, 6.0));
    }
}
