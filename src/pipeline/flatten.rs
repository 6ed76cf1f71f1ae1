//! Scene to world-space geometry.

use super::{Face, Geometry};
use crate::math::vec4::Vec4;
use crate::scene::Scene;

/// Write every mesh of the scene into `out` in world space.
///
/// Vertex order is mesh order, then each mesh's own vertex order. Face
/// handles are offset by the number of vertices written before the mesh, so
/// they stay valid in the combined buffer.
pub fn flatten(scene: &Scene, out: &mut Geometry) {
    out.clear();

    for mesh in scene.meshes() {
        let world = mesh.world_matrix();
        let base = out.vertices.len() as u32;

        out.vertices
            .extend(mesh.vertices().iter().map(|&v| Vec4::from(v) * world));
        out.faces.extend(
            mesh.triangles()
                .iter()
                .map(|t| Face::new(t.vertices.map(|i| base + i), t.color)),
        );
    }
}
