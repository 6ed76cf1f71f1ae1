//! Flat triangle colors and packed ARGB8888 words.

use serde::{Deserialize, Serialize};

/// Opaque black, the default clear color.
pub const BLACK: u32 = 0xFF000000;

/// An RGB color with components conceptually in [0, 1]. No alpha.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Packs the color into an opaque `0xFFRRGGBB` word, clamping each channel.
    pub fn to_argb(self) -> u32 {
        pack_color(self.r, self.g, self.b, 1.0)
    }
}

/// Pack floating-point RGBA components in [0, 1] into an ARGB8888 word.
#[inline]
pub fn pack_color(r: f32, g: f32, b: f32, a: f32) -> u32 {
    let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u32;
    (to_byte(a) << 24) | (to_byte(r) << 16) | (to_byte(g) << 8) | to_byte(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_pack_to_expected_words() {
        assert_eq!(Color::RED.to_argb(), 0xFFFF0000);
        assert_eq!(Color::GREEN.to_argb(), 0xFF00FF00);
        assert_eq!(Color::BLUE.to_argb(), 0xFF0000FF);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        assert_eq!(Color::new(2.0, -1.0, 0.5).to_argb(), 0xFFFF0080);
    }
}
