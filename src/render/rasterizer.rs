//! Edge function-based triangle rasterization.
//!
//! For every pixel center in a triangle's bounding box, three edge functions
//! decide coverage and double as unnormalized barycentric weights for the
//! depth interpolation.
//!
//! # Edge Function
//!
//! For an edge from A to B evaluated at P:
//!
//! ```text
//! E(P) = (B.x - A.x) * (P.y - A.y) - (B.y - A.y) * (P.x - A.x)
//! ```
//!
//! The signed area of the triangle is `E(v0, v1, v2)`. When it is negative
//! the edge values of interior points are all negative too, so they are
//! flipped before the inside test. Pixels on an edge count as inside.
//!
//! # Depth
//!
//! ```text
//! lambda_i = E_i(P) / area
//! z = lambda_0 * z_0 + lambda_1 * z_1 + lambda_2 * z_2
//! ```
//!
//! The interpolation is affine in screen space; there is no perspective
//! correction. The color is the triangle's flat color.

use super::framebuffer::FrameBuffer;
use crate::math::vec4::Vec4;
use crate::pipeline::Geometry;

/// Triangle rasterizer using the edge function algorithm.
#[derive(Debug, Default, Clone, Copy)]
pub struct EdgeFunctionRasterizer;

impl EdgeFunctionRasterizer {
    pub fn new() -> Self {
        EdgeFunctionRasterizer
    }

    #[inline]
    fn edge_function(a: Vec4, b: Vec4, px: f32, py: f32) -> f32 {
        (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
    }

    /// Draw every face of screen-space geometry. Returns how many faces were
    /// skipped as degenerate.
    pub fn draw(&self, geometry: &Geometry, buffer: &mut FrameBuffer) -> usize {
        geometry
            .faces
            .iter()
            .filter(|face| !self.fill_triangle(geometry.corners(face), face.color.to_argb(), buffer))
            .count()
    }

    /// Fill one screen-space triangle with depth testing.
    ///
    /// Returns `false` without drawing if the triangle has zero area or a
    /// non-finite coordinate.
    pub fn fill_triangle(&self, corners: [Vec4; 3], color: u32, buffer: &mut FrameBuffer) -> bool {
        let [v0, v1, v2] = corners;
        if !corners.iter().all(Vec4::is_finite) {
            return false;
        }

        // ─────────────────────────────────────────────────────────────────────
        // Step 1: Signed area
        // ─────────────────────────────────────────────────────────────────────
        let area = Self::edge_function(v0, v1, v2.x, v2.y);
        if area == 0.0 {
            return false;
        }
        let sign = area.signum();
        let inv_area = 1.0 / area;

        // ─────────────────────────────────────────────────────────────────────
        // Step 2: Bounding box, clipped to the buffer
        // ─────────────────────────────────────────────────────────────────────
        let last_x = i32::try_from(buffer.width()).unwrap_or(i32::MAX) - 1;
        let last_y = i32::try_from(buffer.height()).unwrap_or(i32::MAX) - 1;
        let min_x = (v0.x.min(v1.x).min(v2.x).floor() as i32).max(0);
        let max_x = (v0.x.max(v1.x).max(v2.x).floor() as i32).min(last_x);
        let min_y = (v0.y.min(v1.y).min(v2.y).floor() as i32).max(0);
        let max_y = (v0.y.max(v1.y).max(v2.y).floor() as i32).min(last_y);

        // ─────────────────────────────────────────────────────────────────────
        // Step 3: Test each pixel center, interpolate depth, depth test
        // ─────────────────────────────────────────────────────────────────────
        for y in min_y..=max_y {
            let py = y as f32 + 0.5;
            for x in min_x..=max_x {
                let px = x as f32 + 0.5;

                let w0 = Self::edge_function(v1, v2, px, py);
                let w1 = Self::edge_function(v2, v0, px, py);
                let w2 = Self::edge_function(v0, v1, px, py);

                if w0 * sign >= 0.0 && w1 * sign >= 0.0 && w2 * sign >= 0.0 {
                    let depth = (w0 * v0.z + w1 * v1.z + w2 * v2.z) * inv_area;
                    buffer.set_pixel_with_depth(x, y, depth, color);
                }
            }
        }

        true
    }
}
