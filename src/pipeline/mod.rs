//! Per-frame geometry buffers and the non-clipping pipeline stages.
//!
//! Every stage reads one [`Geometry`] and writes a fresh one: vertices are
//! homogeneous `Vec4`s and faces refer to them by logical index. The
//! stride-4 float layout of the flat export ([`Geometry::to_flat`]) is only
//! materialized on request.

pub mod cull;
pub mod flatten;
pub mod project;

use std::collections::HashMap;

use crate::colors::Color;
use crate::math::vec4::Vec4;

/// Floats per vertex record in the flat export.
pub const VERTEX_STRIDE: usize = 4;
/// Floats per triangle record in the flat export.
pub const FACE_STRIDE: usize = 6;

/// A triangle of a [`Geometry`]: three vertex handles in winding order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub indices: [u32; 3],
    pub color: Color,
}

impl Face {
    pub fn new(indices: [u32; 3], color: Color) -> Self {
        Self { indices, color }
    }
}

/// Vertices and the faces that index them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub vertices: Vec<Vec4>,
    pub faces: Vec<Face>,
}

impl Geometry {
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
        }
    }

    /// Drop all records, keeping the allocations.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.faces.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn push_vertex(&mut self, v: Vec4) -> u32 {
        self.vertices.push(v);
        (self.vertices.len() - 1) as u32
    }

    /// The three corner positions of a face.
    #[inline]
    pub fn corners(&self, face: &Face) -> [Vec4; 3] {
        face.indices.map(|i| self.vertices[i as usize])
    }

    /// Export as the stride-4 vertex / stride-6 triangle float buffers.
    ///
    /// Triangle indices are written as `handle * 4`, i.e. raw offsets into
    /// the vertex buffer.
    pub fn to_flat(&self) -> (Vec<f32>, Vec<f32>) {
        let mut vertices = Vec::with_capacity(self.vertices.len() * VERTEX_STRIDE);
        for v in &self.vertices {
            vertices.extend_from_slice(&[v.x, v.y, v.z, v.w]);
        }

        let mut faces = Vec::with_capacity(self.faces.len() * FACE_STRIDE);
        for f in &self.faces {
            let [a, b, c] = f.indices.map(|i| (i as usize * VERTEX_STRIDE) as f32);
            faces.extend_from_slice(&[a, b, c, f.color.r, f.color.g, f.color.b]);
        }

        (vertices, faces)
    }
}

/// Maps vertex handles of a source buffer to handles in a compacted output,
/// copying each source vertex at most once.
#[derive(Debug, Default)]
pub struct VertexRemap {
    map: HashMap<u32, u32>,
}

impl VertexRemap {
    /// Forget all mappings before a new pass.
    pub fn reset(&mut self) {
        self.map.clear();
    }

    /// Return the output handle for `index`, copying the vertex over on first use.
    pub fn remap(&mut self, index: u32, src: &[Vec4], dst: &mut Geometry) -> u32 {
        *self
            .map
            .entry(index)
            .or_insert_with(|| dst.push_vertex(src[index as usize]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_export_uses_stride_offsets() {
        let geometry = Geometry {
            vertices: vec![
                Vec4::point(0.0, 0.0, 0.0),
                Vec4::point(1.0, 0.0, 0.0),
                Vec4::point(0.0, 1.0, 0.0),
            ],
            faces: vec![Face::new([2, 0, 1], Color::new(0.25, 0.5, 1.0))],
        };

        let (vertices, faces) = geometry.to_flat();
        assert_eq!(vertices.len(), 12);
        assert_eq!(&vertices[4..8], &[1.0, 0.0, 0.0, 1.0]);
        assert_eq!(faces, vec![8.0, 0.0, 4.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn remap_copies_each_vertex_once() {
        let src = [Vec4::point(1.0, 0.0, 0.0), Vec4::point(2.0, 0.0, 0.0)];
        let mut dst = Geometry::default();
        let mut remap = VertexRemap::default();

        assert_eq!(remap.remap(1, &src, &mut dst), 0);
        assert_eq!(remap.remap(0, &src, &mut dst), 1);
        assert_eq!(remap.remap(1, &src, &mut dst), 0);
        assert_eq!(dst.vertices, vec![src[1], src[0]]);

        remap.reset();
        assert_eq!(remap.remap(1, &src, &mut dst), 2);
    }
}
