//! Frame buffer abstraction for 2D pixel access.
//!
//! Wraps a locked ARGB8888 pixel buffer together with the frame's depth
//! buffer. Rows of the pixel buffer are `pitch` bytes apart, which may be
//! more than `width * 4`.

/// Bytes per ARGB8888 pixel.
pub const BYTES_PER_PIXEL: usize = 4;

/// A borrowed view of a color buffer and its depth buffer.
///
/// # Depth Buffer
///
/// One NDC depth per pixel, reset to `+inf` on [`FrameBuffer::clear`].
/// Smaller is nearer; a pixel is only overwritten by a strictly nearer
/// fragment.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    pitch: usize,
    depth_buffer: &'a mut [f32],
    width: u32,
    height: u32,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(
        pixels: &'a mut [u8],
        pitch: usize,
        depth_buffer: &'a mut [f32],
        width: u32,
        height: u32,
    ) -> Self {
        debug_assert!(
            pitch >= width as usize * BYTES_PER_PIXEL,
            "Pitch is shorter than a row"
        );
        debug_assert!(
            pixels.len() >= pitch * height as usize,
            "Pixel buffer too small for pitch * height"
        );
        debug_assert_eq!(
            depth_buffer.len(),
            width as usize * height as usize,
            "Depth buffer size doesn't match dimensions"
        );
        Self {
            pixels,
            pitch,
            depth_buffer,
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill every visible pixel with `color` and reset depth to `+inf`.
    /// Row padding past `width` is left alone.
    pub fn clear(&mut self, color: u32) {
        let bytes = color.to_ne_bytes();
        let row_bytes = self.width as usize * BYTES_PER_PIXEL;
        for row in self.pixels.chunks_mut(self.pitch).take(self.height as usize) {
            for px in row[..row_bytes].chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&bytes);
            }
        }
        self.depth_buffer.fill(f32::INFINITY);
    }

    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    #[inline]
    fn byte_offset(&self, x: i32, y: i32) -> usize {
        y as usize * self.pitch + x as usize * BYTES_PER_PIXEL
    }

    /// Write `color` at (x, y) if `depth` is strictly nearer than what is there.
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, depth: f32, color: u32) {
        if !self.in_bounds(x, y) {
            return;
        }
        let idx = y as usize * self.width as usize + x as usize;
        if depth < self.depth_buffer[idx] {
            self.depth_buffer[idx] = depth;
            let offset = self.byte_offset(x, y);
            self.pixels[offset..offset + BYTES_PER_PIXEL].copy_from_slice(&color.to_ne_bytes());
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let offset = self.byte_offset(x, y);
        let mut bytes = [0u8; BYTES_PER_PIXEL];
        bytes.copy_from_slice(&self.pixels[offset..offset + BYTES_PER_PIXEL]);
        Some(u32::from_ne_bytes(bytes))
    }

    pub fn depth(&self, x: i32, y: i32) -> Option<f32> {
        self.in_bounds(x, y)
            .then(|| self.depth_buffer[y as usize * self.width as usize + x as usize])
    }
}
