//! Clip-space clipping against the homogeneous view volume.
//!
//! The projection puts geometry in front of the camera at negative `w`, so
//! the volume is bounded by:
//!
//! ```text
//! w <= x <= -w
//! w <= y <= -w
//! w <= z <= -w
//! ```
//!
//! Each plane is a linear function of (x, y, z, w) whose value is the signed
//! distance, non-negative inside. Planes are independent of the projection
//! parameters, so the clipper never needs rebuilding.
//!
//! # Triangle rule
//!
//! Each plane pass classifies the three corners of every face, keeping their
//! original order:
//!
//! - 3 inside: the face is kept as is.
//! - 2 inside: the quad left over is split into `{in0, in1, i1}` and
//!   `{in1, i2, i1}`, where `i1`/`i2` lie on the edges from `in0`/`in1` to
//!   the outside corner.
//! - 1 inside: `{in0, i2, i1}`, with `i1`/`i2` on the edges toward the first
//!   and second outside corner.
//! - 0 inside: the face is dropped.

use crate::math::vec4::Vec4;
use crate::pipeline::{Face, Geometry, VertexRemap};

/// Intersections whose distance delta is below this are treated as parallel.
const PARALLEL_EPSILON: f32 = 1e-6;

/// The six planes of the clip volume.
///
/// The signed distance is non-negative when inside the clip volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClipPlane {
    /// x >= w
    Left,
    /// x <= -w
    Right,
    /// y >= w
    Bottom,
    /// y <= -w
    Top,
    /// z >= w
    Near,
    /// z <= -w
    Far,
}

impl ClipPlane {
    /// The planes in clipping order.
    pub const ALL: [ClipPlane; 6] = [
        ClipPlane::Left,
        ClipPlane::Right,
        ClipPlane::Bottom,
        ClipPlane::Top,
        ClipPlane::Near,
        ClipPlane::Far,
    ];

    #[inline]
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.x - p.w,
            Self::Right => -p.x - p.w,
            Self::Bottom => p.y - p.w,
            Self::Top => -p.y - p.w,
            Self::Near => p.z - p.w,
            Self::Far => -p.z - p.w,
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec4) -> bool {
        self.signed_distance(p) >= 0.0
    }

    /// Point where the segment `a -> b` crosses this plane, or `None` when
    /// the segment runs (nearly) parallel to it.
    pub fn intersect(&self, a: Vec4, b: Vec4) -> Option<Vec4> {
        let da = self.signed_distance(a);
        let db = self.signed_distance(b);
        let denom = da - db;
        if denom.abs() < PARALLEL_EPSILON {
            return None;
        }
        Some(a.lerp(b, da / denom))
    }
}

/// Clips geometry against all six planes, in order.
pub struct ClipSpaceClipper {
    planes: [ClipPlane; 6],
}

impl ClipSpaceClipper {
    pub fn new() -> Self {
        Self {
            planes: ClipPlane::ALL,
        }
    }

    /// Clip `geometry` in place.
    ///
    /// Every pass writes into `scratch` and the two buffers are swapped, so on
    /// return `geometry` holds the result and `scratch` holds garbage.
    pub fn clip(&self, geometry: &mut Geometry, scratch: &mut Geometry, remap: &mut VertexRemap) {
        for &plane in &self.planes {
            if geometry.is_empty() {
                geometry.vertices.clear();
                break;
            }
            clip_against_plane(plane, geometry, remap, scratch);
            std::mem::swap(geometry, scratch);
        }
    }
}

impl Default for ClipSpaceClipper {
    fn default() -> Self {
        Self::new()
    }
}

/// Single plane pass: write the part of `src` inside `plane` into `dst`.
///
/// Unclipped corners are shared through `remap`; each intersection becomes a
/// new vertex. A face that needs a degenerate intersection is dropped.
pub fn clip_against_plane(
    plane: ClipPlane,
    src: &Geometry,
    remap: &mut VertexRemap,
    dst: &mut Geometry,
) {
    dst.clear();
    remap.reset();
    let mut degenerate = 0usize;

    for face in &src.faces {
        let corners = src.corners(face);

        let mut inside = [0usize; 3];
        let mut outside = [0usize; 3];
        let (mut n_in, mut n_out) = (0, 0);
        for (k, &p) in corners.iter().enumerate() {
            if plane.contains(p) {
                inside[n_in] = k;
                n_in += 1;
            } else {
                outside[n_out] = k;
                n_out += 1;
            }
        }

        match n_in {
            3 => {
                let indices = face.indices.map(|i| remap.remap(i, &src.vertices, dst));
                dst.faces.push(Face::new(indices, face.color));
            }
            2 => {
                let (in0, in1, out) = (inside[0], inside[1], outside[0]);
                let Some(p1) = plane.intersect(corners[in0], corners[out]) else {
                    degenerate += 2;
                    continue;
                };
                let a = remap.remap(face.indices[in0], &src.vertices, dst);
                let b = remap.remap(face.indices[in1], &src.vertices, dst);
                let i1 = dst.push_vertex(p1);
                dst.faces.push(Face::new([a, b, i1], face.color));

                match plane.intersect(corners[in1], corners[out]) {
                    Some(p2) => {
                        let i2 = dst.push_vertex(p2);
                        dst.faces.push(Face::new([b, i2, i1], face.color));
                    }
                    None => degenerate += 1,
                }
            }
            1 => {
                let in0 = inside[0];
                let hits = (
                    plane.intersect(corners[in0], corners[outside[0]]),
                    plane.intersect(corners[in0], corners[outside[1]]),
                );
                let (Some(p1), Some(p2)) = hits else {
                    degenerate += 1;
                    continue;
                };
                let a = remap.remap(face.indices[in0], &src.vertices, dst);
                let i1 = dst.push_vertex(p1);
                let i2 = dst.push_vertex(p2);
                dst.faces.push(Face::new([a, i2, i1], face.color));
            }
            _ => {}
        }
    }

    if degenerate > 0 {
        log::trace!(
            "{:?} plane: skipped {} triangles with parallel intersections",
            plane,
            degenerate
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use approx::assert_relative_eq;

    // w = -1 puts the visible volume at [-1, 1] on every axis.
    fn p(x: f32, y: f32, z: f32) -> Vec4 {
        Vec4::new(x, y, z, -1.0)
    }

    fn triangle(a: Vec4, b: Vec4, c: Vec4) -> Geometry {
        Geometry {
            vertices: vec![a, b, c],
            faces: vec![Face::new([0, 1, 2], Color::GREEN)],
        }
    }

    fn clip_all(mut geometry: Geometry) -> Geometry {
        let mut scratch = Geometry::default();
        ClipSpaceClipper::new().clip(&mut geometry, &mut scratch, &mut VertexRemap::default());
        geometry
    }

    #[test]
    fn signed_distances_are_positive_inside() {
        let center = p(0.0, 0.0, 0.0);
        for plane in ClipPlane::ALL {
            assert_relative_eq!(plane.signed_distance(center), 1.0);
        }
        assert!(!ClipPlane::Left.contains(p(-1.5, 0.0, 0.0)));
        assert!(!ClipPlane::Top.contains(p(0.0, 1.5, 0.0)));
        assert!(ClipPlane::Top.contains(p(0.0, 1.0, 0.0)));
    }

    #[test]
    fn geometry_behind_the_camera_is_outside() {
        // Positive w: no x satisfies w <= x <= -w.
        let behind = Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!(!(ClipPlane::Left.contains(behind) && ClipPlane::Right.contains(behind)));
    }

    #[test]
    fn fully_inside_triangle_is_unchanged() {
        let input = triangle(p(-0.5, -0.5, 0.1), p(0.5, -0.5, 0.2), p(0.0, 0.5, 0.3));
        let out = clip_all(input.clone());
        assert_eq!(out, input);
    }

    #[test]
    fn fully_outside_one_plane_yields_nothing() {
        let input = triangle(p(-3.0, 0.0, 0.0), p(-2.0, 0.5, 0.0), p(-4.0, -0.5, 0.0));
        let mut out = Geometry::default();
        clip_against_plane(ClipPlane::Left, &input, &mut VertexRemap::default(), &mut out);
        assert!(out.faces.is_empty());
        assert!(out.vertices.is_empty());

        assert!(clip_all(input).is_empty());
    }

    #[test]
    fn two_inside_splits_into_a_quad() {
        let input = triangle(p(0.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-3.0, 0.0, 0.0));
        let mut out = Geometry::default();
        clip_against_plane(ClipPlane::Left, &input, &mut VertexRemap::default(), &mut out);

        assert_eq!(out.faces.len(), 2);
        assert_eq!(out.vertices.len(), 4);
        assert_eq!(out.faces[0].indices, [0, 1, 2]);
        assert_eq!(out.faces[1].indices, [1, 3, 2]);
        assert!(out.faces.iter().all(|f| f.color == Color::GREEN));

        let i1 = out.vertices[2];
        let i2 = out.vertices[3];
        assert_relative_eq!(i1.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(i1.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(i2.x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(i2.y, 2.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn one_inside_shrinks_to_one_triangle() {
        let input = triangle(p(0.0, 0.0, 0.0), p(-3.0, 0.0, 0.0), p(-3.0, 1.0, 0.0));
        let mut out = Geometry::default();
        clip_against_plane(ClipPlane::Left, &input, &mut VertexRemap::default(), &mut out);

        assert_eq!(out.faces.len(), 1);
        assert_eq!(out.faces[0].indices, [0, 2, 1]);
        // i1 on the edge toward (-3, 0), i2 toward (-3, 1).
        assert_relative_eq!(out.vertices[1].y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(out.vertices[2].x, -1.0, epsilon = 1e-6);
        assert_relative_eq!(out.vertices[2].y, 1.0 / 3.0, epsilon = 1e-6);
    }

    #[test]
    fn shared_corners_are_copied_once_per_pass() {
        let geometry = Geometry {
            vertices: vec![
                p(-0.5, -0.5, 0.0),
                p(0.5, -0.5, 0.0),
                p(0.5, 0.5, 0.0),
                p(-0.5, 0.5, 0.0),
            ],
            faces: vec![
                Face::new([0, 1, 2], Color::RED),
                Face::new([0, 2, 3], Color::RED),
            ],
        };
        let out = clip_all(geometry.clone());
        assert_eq!(out, geometry);
    }

    #[test]
    fn survivors_lie_inside_every_plane() {
        let input = Geometry {
            vertices: vec![
                p(-3.0, 0.0, 0.0),
                p(3.0, 0.5, 0.0),
                p(0.0, -3.0, 0.2),
                p(0.5, 4.0, -2.5),
                Vec4::new(0.2, 0.1, 0.0, 1.0),
            ],
            faces: vec![
                Face::new([0, 1, 2], Color::RED),
                Face::new([0, 1, 3], Color::BLUE),
                Face::new([1, 3, 4], Color::GREEN),
            ],
        };
        let out = clip_all(input);

        assert!(!out.is_empty());
        for face in &out.faces {
            for v in out.corners(face) {
                for plane in ClipPlane::ALL {
                    assert!(
                        plane.signed_distance(v) >= -1e-5,
                        "{:?} outside {:?}",
                        v,
                        plane
                    );
                }
            }
        }
    }

    fn clip_left(input: &Geometry) -> Geometry {
        let mut out = Geometry::default();
        clip_against_plane(ClipPlane::Left, input, &mut VertexRemap::default(), &mut out);
        out
    }

    #[test]
    fn two_inside_face_needing_a_parallel_first_intersection_is_dropped() {
        // in0 sits on the plane and the outside corner is a hair past it.
        let input = triangle(p(-1.0, 0.0, 0.0), p(0.0, 1.0, 0.0), p(-1.000_000_1, 0.5, 0.0));
        let out = clip_left(&input);
        assert!(out.faces.is_empty());
        assert!(out.vertices.is_empty());
    }

    #[test]
    fn two_inside_face_keeps_its_first_half_when_only_the_second_intersection_is_parallel() {
        // in1 sits on the plane, in0 is well inside.
        let input = triangle(p(0.0, 0.0, 0.0), p(-1.0, 1.0, 0.0), p(-1.000_000_1, 0.5, 0.0));
        let out = clip_left(&input);

        assert_eq!(out.faces.len(), 1);
        assert_eq!(out.faces[0].indices, [0, 1, 2]);
        assert_eq!(out.vertices.len(), 3);
        assert_eq!(out.vertices[0], input.vertices[0]);
        assert_eq!(out.vertices[1], input.vertices[1]);
        assert_relative_eq!(out.vertices[2].x, -1.0, epsilon = 1e-5);
    }

    #[test]
    fn one_inside_face_with_a_parallel_edge_is_dropped() {
        let input = triangle(p(-1.0, 0.0, 0.0), p(-1.000_000_1, 0.5, 0.0), p(-3.0, 1.0, 0.0));
        let out = clip_left(&input);
        assert!(out.faces.is_empty());
        assert!(out.vertices.is_empty());
    }

    #[test]
    fn parallel_intersection_is_skipped() {
        assert!(ClipPlane::Left
            .intersect(p(-1.0, 0.0, 0.0), p(-1.0, 1.0, 0.0))
            .is_none());
    }
}
