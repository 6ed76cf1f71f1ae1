//! Surfaces the engine can paint a frame into.

use std::path::Path;

use super::framebuffer::BYTES_PER_PIXEL;
use crate::error::RenderError;

/// A lockable ARGB8888 pixel surface.
pub trait RenderTarget {
    /// Current size in pixels.
    fn size(&self) -> (u32, u32);

    /// Lock the pixel buffer, hand it to `painter` together with its pitch in
    /// bytes, then unlock and present it.
    fn paint(&mut self, painter: &mut dyn FnMut(&mut [u8], usize)) -> Result<(), RenderError>;
}

/// An in-memory render target. Used for screenshots and tests.
#[derive(Debug, Clone)]
pub struct OffscreenTarget {
    width: u32,
    height: u32,
    pitch: usize,
    pixels: Vec<u8>,
}

impl OffscreenTarget {
    /// Tightly packed rows, zero-filled.
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_pitch(width, height, width as usize * BYTES_PER_PIXEL)
    }

    /// Rows `pitch` bytes apart. `pitch` is raised to at least one full row.
    pub fn with_pitch(width: u32, height: u32, pitch: usize) -> Self {
        let pitch = pitch.max(width as usize * BYTES_PER_PIXEL);
        Self {
            width,
            height,
            pitch,
            pixels: vec![0; pitch * height as usize],
        }
    }

    pub fn pitch(&self) -> usize {
        self.pitch
    }

    pub fn bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// ARGB word at (x, y). Panics when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({}, {}) out of bounds", x, y);
        let offset = y as usize * self.pitch + x as usize * BYTES_PER_PIXEL;
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        u32::from_ne_bytes(bytes)
    }

    /// Reallocate for a new size, dropping the old contents.
    pub fn resize(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let [a, r, g, b] = self.pixel(x, y).to_be_bytes();
            image::Rgba([r, g, b, a])
        })
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RenderError> {
        self.to_image()
            .save_with_format(path, image::ImageFormat::Png)?;
        Ok(())
    }
}

impl RenderTarget for OffscreenTarget {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn paint(&mut self, painter: &mut dyn FnMut(&mut [u8], usize)) -> Result<(), RenderError> {
        painter(&mut self.pixels, self.pitch);
        Ok(())
    }
}
