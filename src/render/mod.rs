//! Pixel output: depth-tested frame buffer views, render targets and the
//! triangle rasterizer.

pub mod framebuffer;
pub mod rasterizer;
pub mod target;

pub use framebuffer::FrameBuffer;
pub use rasterizer::EdgeFunctionRasterizer;
pub use target::{OffscreenTarget, RenderTarget};
