//! A fixed-function, fully sequential CPU 3D rendering pipeline.
//!
//! A [`Scene`] of meshes and a camera goes through flattening, the view
//! transform, backface culling, projection, clip-space clipping, the
//! perspective divide and edge-function rasterization with a depth buffer.
//! SDL2 is used only to show the result.
//!
//! # Quick Start
//!
//! ```ignore
//! use sgl::prelude::*;
//!
//! let mut window = Window::new("My App", 640, 480)?;
//! let mut scene = Scene::default();
//! scene.add_mesh(Mesh::cube(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::ONE));
//! Engine::new().render(&scene, &mut window)?;
//! ```

pub mod camera;
pub mod clipper;
pub mod colors;
pub mod config;
pub mod engine;
pub mod error;
pub mod math;
pub mod mesh;
pub mod pipeline;
pub mod render;
pub mod scene;
pub mod transform;
pub mod window;

pub use camera::Camera;
pub use config::{Config, ConfigError};
pub use engine::{Engine, FrameStats};
pub use error::RenderError;
pub use mesh::{LoadError, Mesh, Triangle};
pub use scene::{MeshId, Scene};
pub use transform::Transform;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::camera::Camera;
    pub use crate::colors::Color;
    pub use crate::config::Config;
    pub use crate::engine::Engine;
    pub use crate::error::RenderError;
    pub use crate::mesh::{Mesh, Triangle};
    pub use crate::scene::{MeshId, Scene};
    pub use crate::transform::Transform;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::render::{OffscreenTarget, RenderTarget};

    // Window & Input
    pub use crate::window::{FrameLimiter, Window, WindowEvent};
}

/// Module exposing internals for benchmarking. Not part of the stable API.
pub mod bench {
    pub use crate::clipper::ClipSpaceClipper;
    pub use crate::pipeline::{Face, Geometry, VertexRemap};
    pub use crate::render::{EdgeFunctionRasterizer, FrameBuffer};
}
