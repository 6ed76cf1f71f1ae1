//! Backface culling in view space.

use super::{Face, Geometry, VertexRemap};

/// True when the face points back toward a viewer at the origin.
///
/// The first vertex stands in for the view direction, which only holds in
/// view space: culling must stay after the view transform and before
/// projection.
#[inline]
pub fn is_front_facing(face: &Face, geometry: &Geometry) -> bool {
    let [a, b, c] = geometry.corners(face).map(|v| v.xyz());
    let normal = (b - a).cross(c - a);
    normal.dot(a) < 0.0
}

/// Copy the front-facing faces of `input` into `out`, along with only the
/// vertices they reference. Each kept vertex is copied once.
pub fn cull_backfaces(input: &Geometry, remap: &mut VertexRemap, out: &mut Geometry) {
    out.clear();
    remap.reset();

    for face in input.faces.iter().filter(|f| is_front_facing(f, input)) {
        let indices = face
            .indices
            .map(|i| remap.remap(i, &input.vertices, out));
        out.faces.push(Face::new(indices, face.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::Color;
    use crate::math::vec3::Vec3;
    use crate::math::vec4::Vec4;
    use crate::mesh::Mesh;
    use crate::pipeline::flatten::flatten;
    use crate::scene::Scene;

    fn culled_cube(position: Vec3) -> Geometry {
        let mut scene = Scene::default();
        scene.add_mesh(Mesh::cube(position, Vec3::ZERO, Vec3::ONE));
        let mut world = Geometry::default();
        flatten(&scene, &mut world);

        let mut out = Geometry::default();
        cull_backfaces(&world, &mut VertexRemap::default(), &mut out);
        out
    }

    #[test]
    fn only_the_camera_facing_side_of_a_cube_survives() {
        let out = culled_cube(Vec3::new(0.0, 0.0, 3.0));
        assert_eq!(out.faces.len(), 2);
        assert!(out.faces.iter().all(|f| f.color == Color::BLUE));
        assert_eq!(out.faces[0].indices, [0, 1, 2]);
        assert_eq!(out.faces[1].indices, [0, 2, 3]);
    }

    #[test]
    fn survivors_face_the_viewer() {
        let out = culled_cube(Vec3::new(1.5, -2.0, 4.0));
        assert!(!out.faces.is_empty());
        for face in &out.faces {
            assert!(is_front_facing(face, &out));
        }
    }

    #[test]
    fn shared_vertices_are_copied_once_and_all_are_referenced() {
        let out = culled_cube(Vec3::new(1.5, -2.0, 4.0));

        // Three faces visible from off-axis: 7 distinct corners.
        assert_eq!(out.faces.len(), 6);
        assert_eq!(out.vertices.len(), 7);

        let mut referenced = vec![false; out.vertices.len()];
        for face in &out.faces {
            for &i in &face.indices {
                referenced[i as usize] = true;
            }
        }
        assert!(referenced.iter().all(|&r| r));

        for (i, a) in out.vertices.iter().enumerate() {
            for b in &out.vertices[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn back_facing_triangle_is_dropped_with_its_vertices() {
        let input = Geometry {
            vertices: vec![
                Vec4::point(0.0, 0.0, 5.0),
                Vec4::point(1.0, 0.0, 5.0),
                Vec4::point(0.0, 1.0, 5.0),
            ],
            // (v2-v1) x (v3-v1) = +Z, pointing away from the origin.
            faces: vec![Face::new([0, 1, 2], Color::RED)],
        };

        let mut out = Geometry::default();
        cull_backfaces(&input, &mut VertexRemap::default(), &mut out);
        assert!(out.faces.is_empty());
        assert!(out.vertices.is_empty());

        let flipped = Geometry {
            faces: vec![Face::new([0, 2, 1], Color::RED)],
            ..input
        };
        cull_backfaces(&flipped, &mut VertexRemap::default(), &mut out);
        assert_eq!(out.faces.len(), 1);
        assert_eq!(out.vertices.len(), 3);
    }
}
