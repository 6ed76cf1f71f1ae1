//! The mesh table and the single active camera.

use crate::camera::Camera;
use crate::mesh::Mesh;

/// Handle to a mesh added to a [`Scene`].
///
/// Handles stay valid until the mesh is removed; slots are never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId(usize);

#[derive(Debug, Default)]
pub struct Scene {
    meshes: Vec<Option<Mesh>>,
    camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self {
            meshes: Vec::new(),
            camera,
        }
    }

    pub fn add_mesh(&mut self, mesh: Mesh) -> MeshId {
        self.meshes.push(Some(mesh));
        MeshId(self.meshes.len() - 1)
    }

    /// Take a mesh back out of the scene. Returns `None` for a stale handle.
    pub fn remove_mesh(&mut self, id: MeshId) -> Option<Mesh> {
        self.meshes.get_mut(id.0).and_then(Option::take)
    }

    pub fn mesh(&self, id: MeshId) -> Option<&Mesh> {
        self.meshes.get(id.0).and_then(Option::as_ref)
    }

    pub fn mesh_mut(&mut self, id: MeshId) -> Option<&mut Mesh> {
        self.meshes.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Meshes in insertion order.
    pub fn meshes(&self) -> impl Iterator<Item = &Mesh> {
        self.meshes.iter().flatten()
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes().next().is_none()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }
}
