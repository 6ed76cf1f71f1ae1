//! Core rendering engine.
//!
//! [`Engine::render`] runs one frame of the pipeline, strictly in order:
//!
//! ```text
//! flatten -> view -> cull -> projection -> clip -> divide -> screen -> rasterize
//! ```
//!
//! Stage buffers live in a [`FrameArena`] owned by the engine. Each stage
//! clears its output and writes fresh records; the two geometry buffers are
//! swapped between stages so only their capacity survives across frames.

use crate::clipper::ClipSpaceClipper;
use crate::colors;
use crate::error::RenderError;
use crate::pipeline::cull::cull_backfaces;
use crate::pipeline::flatten::flatten;
use crate::pipeline::project::{perspective_divide, to_screen};
use crate::pipeline::{Geometry, VertexRemap};
use crate::render::{EdgeFunctionRasterizer, FrameBuffer, RenderTarget};
use crate::scene::Scene;

/// Per-stage record counts of the last rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub world_vertices: usize,
    pub world_faces: usize,
    pub culled_vertices: usize,
    pub culled_faces: usize,
    pub clipped_vertices: usize,
    pub clipped_faces: usize,
    /// Faces the rasterizer rejected as degenerate.
    pub skipped_faces: usize,
}

/// Scratch memory for one render call, reused frame to frame.
#[derive(Debug, Default)]
struct FrameArena {
    front: Geometry,
    back: Geometry,
    remap: VertexRemap,
    depth: Vec<f32>,
}

impl FrameArena {
    /// Make the last stage's output the next stage's input.
    fn swap(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }
}

pub struct Engine {
    clear_color: u32,
    clipper: ClipSpaceClipper,
    rasterizer: EdgeFunctionRasterizer,
    arena: FrameArena,
    stats: FrameStats,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_clear_color(colors::BLACK)
    }

    pub fn with_clear_color(clear_color: u32) -> Self {
        Self {
            clear_color,
            clipper: ClipSpaceClipper::new(),
            rasterizer: EdgeFunctionRasterizer::new(),
            arena: FrameArena::default(),
            stats: FrameStats::default(),
        }
    }

    pub fn clear_color(&self) -> u32 {
        self.clear_color
    }

    pub fn set_clear_color(&mut self, color: u32) {
        self.clear_color = color;
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    /// Screen-space geometry of the last rendered frame.
    pub fn screen_geometry(&self) -> &Geometry {
        &self.arena.front
    }

    /// Render `scene` into `target`.
    ///
    /// An empty scene (or a zero-sized target) is a no-op that leaves the
    /// target untouched. Any error comes from the target and is fatal to the
    /// session.
    pub fn render(
        &mut self,
        scene: &Scene,
        target: &mut dyn RenderTarget,
    ) -> Result<(), RenderError> {
        if scene.is_empty() {
            return Ok(());
        }
        let (width, height) = target.size();
        if width == 0 || height == 0 {
            log::trace!("Skipping frame for {}x{} target", width, height);
            return Ok(());
        }

        let camera = scene.camera();
        let mut stats = FrameStats::default();

        // ─────────────────────────────────────────────────────────────────────
        // Geometry: world -> view -> cull -> clip -> screen
        // ─────────────────────────────────────────────────────────────────────
        flatten(scene, &mut self.arena.front);
        stats.world_vertices = self.arena.front.vertices.len();
        stats.world_faces = self.arena.front.faces.len();

        camera
            .view_matrix()
            .transform_vertices(&mut self.arena.front.vertices);

        let FrameArena {
            front, back, remap, ..
        } = &mut self.arena;
        cull_backfaces(front, remap, back);
        self.arena.swap();
        stats.culled_vertices = self.arena.front.vertices.len();
        stats.culled_faces = self.arena.front.faces.len();

        let aspect_ratio = width as f32 / height as f32;
        camera
            .projection_matrix(aspect_ratio)
            .transform_vertices(&mut self.arena.front.vertices);

        let FrameArena {
            front, back, remap, ..
        } = &mut self.arena;
        self.clipper.clip(front, back, remap);
        stats.clipped_vertices = front.vertices.len();
        stats.clipped_faces = front.faces.len();

        perspective_divide(&mut front.vertices);
        to_screen(&mut front.vertices, width, height);

        // ─────────────────────────────────────────────────────────────────────
        // Pixels
        // ─────────────────────────────────────────────────────────────────────
        let FrameArena { front, depth, .. } = &mut self.arena;
        depth.resize(width as usize * height as usize, f32::INFINITY);
        let screen = &*front;
        let clear_color = self.clear_color;
        let rasterizer = &self.rasterizer;
        let mut skipped = 0;

        let painted = target.paint(&mut |pixels, pitch| {
            let mut buffer = FrameBuffer::new(pixels, pitch, &mut depth[..], width, height);
            buffer.clear(clear_color);
            skipped = rasterizer.draw(screen, &mut buffer);
        });
        if let Err(e) = painted {
            log::error!("Failed to paint frame: {}", e);
            return Err(e);
        }

        stats.skipped_faces = skipped;
        if skipped > 0 {
            log::trace!("Rasterizer skipped {} degenerate faces", skipped);
        }
        log::debug!(
            "Frame: world {}v/{}f, culled {}v/{}f, clipped {}v/{}f",
            stats.world_vertices,
            stats.world_faces,
            stats.culled_vertices,
            stats.culled_faces,
            stats.clipped_vertices,
            stats.clipped_faces
        );
        self.stats = stats;
        Ok(())
    }
}
