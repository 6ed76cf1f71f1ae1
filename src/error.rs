//! Errors reported by the render session.
//!
//! Everything here is a resource failure: once a render call returns one of
//! these the caller is expected to tear the window down. Degenerate geometry
//! never surfaces as an error.

use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// SDL, video, timer or event pump initialization.
    Init(String),
    /// Window or canvas creation, fullscreen toggling.
    Window(String),
    /// Streaming texture creation, resize or lock.
    Texture(String),
    /// Copying the frame to the canvas.
    Present(String),
    /// Writing an offscreen frame to disk.
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Init(msg) => write!(f, "initialization failed: {}", msg),
            RenderError::Window(msg) => write!(f, "window error: {}", msg),
            RenderError::Texture(msg) => write!(f, "texture error: {}", msg),
            RenderError::Present(msg) => write!(f, "present failed: {}", msg),
            RenderError::Image(e) => write!(f, "image error: {}", e),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Image(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}
