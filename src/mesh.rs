//! Triangle meshes.
//!
//! A [`Mesh`] owns its local-space vertices and its triangles. Triangles refer
//! to vertices by index into the same mesh, so a vertex's owning mesh is the
//! one that contains it; that is the only association flattening needs to
//! find the right world transform.

use std::fmt;
use std::path::Path;

use crate::colors::Color;
use crate::math::mat4::Mat4;
use crate::math::vec3::Vec3;
use crate::transform::Transform;

/// Three vertex indices into the owning mesh, in winding order, plus a flat color.
///
/// Winding decides facing: a triangle is front-facing when
/// `(v2 - v1) x (v3 - v1)` points back toward the viewer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub vertices: [u32; 3],
    pub color: Color,
}

impl Triangle {
    pub const fn new(a: u32, b: u32, c: u32, color: Color) -> Self {
        Self {
            vertices: [a, b, c],
            color,
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    Obj(tobj::LoadError),
    /// The file parsed but held no triangles.
    Empty(String),
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "OBJ error: {}", e),
            LoadError::Empty(path) => write!(f, "no geometry in {}", path),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Empty(_) => None,
        }
    }
}

// Unit cube corners, half extent 0.5.
const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(-0.5, 0.5, -0.5),
    Vec3::new(0.5, 0.5, -0.5),
    Vec3::new(0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, 0.5, 0.5),
    Vec3::new(0.5, 0.5, 0.5),
    Vec3::new(0.5, -0.5, 0.5),
    Vec3::new(-0.5, -0.5, 0.5),
];

// Every face winds so that (v2 - v1) x (v3 - v1) points out of the cube.
const CUBE_TRIANGLES: [Triangle; 12] = [
    // -Z
    Triangle::new(0, 1, 2, Color::BLUE),
    Triangle::new(0, 2, 3, Color::BLUE),
    // +Z
    Triangle::new(4, 7, 6, Color::BLUE),
    Triangle::new(4, 6, 5, Color::BLUE),
    // +X
    Triangle::new(1, 5, 6, Color::RED),
    Triangle::new(1, 6, 2, Color::RED),
    // -X
    Triangle::new(0, 3, 7, Color::RED),
    Triangle::new(0, 7, 4, Color::RED),
    // +Y
    Triangle::new(0, 4, 5, Color::GREEN),
    Triangle::new(0, 5, 1, Color::GREEN),
    // -Y
    Triangle::new(3, 2, 6, Color::GREEN),
    Triangle::new(3, 6, 7, Color::GREEN),
];

#[derive(Debug, Clone)]
pub struct Mesh {
    name: String,
    vertices: Vec<Vec3>,
    triangles: Vec<Triangle>,
    transform: Transform,
}

impl Mesh {
    pub fn new(
        name: impl Into<String>,
        vertices: Vec<Vec3>,
        triangles: Vec<Triangle>,
        transform: Transform,
    ) -> Self {
        debug_assert!(
            triangles
                .iter()
                .all(|t| t.vertices.iter().all(|&i| (i as usize) < vertices.len())),
            "Triangle refers to a vertex outside its mesh"
        );
        Self {
            name: name.into(),
            vertices,
            triangles,
            transform,
        }
    }

    /// Axis-aligned cube of side 1 centered on the mesh origin.
    ///
    /// Faces are colored per axis: Z faces blue, X faces red, Y faces green.
    pub fn cube(position: Vec3, orientation: Vec3, scale: Vec3) -> Self {
        Self::new(
            "cube",
            CUBE_VERTICES.to_vec(),
            CUBE_TRIANGLES.to_vec(),
            Transform::new(position, orientation, scale),
        )
    }

    /// Load every object of an OBJ file into a single mesh with a flat color.
    ///
    /// Faces are triangulated on import and keep the file's winding.
    pub fn from_obj<P: AsRef<Path>>(path: P, color: Color) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path, &options)?;

        let mut vertices = Vec::new();
        let mut triangles = Vec::new();
        for model in &models {
            let base = vertices.len() as u32;
            vertices.extend(
                model
                    .mesh
                    .positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            triangles.extend(model.mesh.indices.chunks_exact(3).map(|face| {
                Triangle::new(base + face[0], base + face[1], base + face[2], color)
            }));
        }

        if triangles.is_empty() {
            return Err(LoadError::Empty(path.display().to_string()));
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        log::info!(
            "Loaded {}: {} vertices, {} triangles",
            name,
            vertices.len(),
            triangles.len()
        );
        Ok(Self::new(name, vertices, triangles, Transform::default()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn transform_mut(&mut self) -> &mut Transform {
        &mut self.transform
    }

    /// World matrix derived from the current position, orientation and scale.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }
}
