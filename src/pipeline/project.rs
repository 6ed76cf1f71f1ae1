//! Perspective divide and viewport mapping.

use crate::math::vec4::Vec4;

/// Clip space to NDC: divide all four components by `w`.
///
/// A zero `w` yields non-finite coordinates, which the rasterizer skips.
pub fn perspective_divide(vertices: &mut [Vec4]) {
    for v in vertices.iter_mut() {
        let inv_w = 1.0 / v.w;
        *v = *v * inv_w;
    }
}

/// NDC to pixel coordinates. Rows grow downward, so Y is flipped; Z keeps
/// its NDC value for the depth test.
pub fn to_screen(vertices: &mut [Vec4], width: u32, height: u32) {
    let (w, h) = (width as f32, height as f32);
    for v in vertices.iter_mut() {
        v.x = (v.x + 1.0) * 0.5 * w;
        v.y = (1.0 - v.y) * 0.5 * h;
    }
}
