//! 8-bit color types used by color properties

use serde::{Deserialize, Serialize};

/// RGB color with one unsigned byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorRgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorRgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Extend to RGBA with the given alpha
    pub const fn with_alpha(self, a: u8) -> ColorRgba {
        ColorRgba::new(self.r, self.g, self.b, a)
    }
}

/// RGBA color with one unsigned byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColorRgba {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl ColorRgba {
    /// Create a new RGBA color
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Drop the alpha channel
    pub const fn to_rgb(self) -> ColorRgb {
        ColorRgb::new(self.r, self.g, self.b)
    }
}

impl Default for ColorRgba {
    /// Opaque black
    fn default() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

/// Convert a normalized channel value to a byte, clamping to `[0, 1]`.
pub(crate) fn unit_to_byte(value: f32) -> u8 {
    // Clamped to [0, 255] before the cast
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let byte = (value.clamp(0.0, 1.0) * 255.0).round() as u8;
    byte
}

/// Convert a byte channel to a normalized value in `[0, 1]`.
pub(crate) fn byte_to_unit(value: u8) -> f32 {
    f32::from(value) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_byte_conversion() {
        assert_eq!(unit_to_byte(0.0), 0);
        assert_eq!(unit_to_byte(1.0), 255);
        assert_eq!(unit_to_byte(2.0), 255);
        assert_eq!(unit_to_byte(-1.0), 0);
        assert_eq!(unit_to_byte(byte_to_unit(128)), 128);
    }

    #[test]
    fn test_rgb_rgba_conversion() {
        let rgb = ColorRgb::new(10, 20, 30);
        let rgba = rgb.with_alpha(40);

        assert_eq!(rgba, ColorRgba::new(10, 20, 30, 40));
        assert_eq!(rgba.to_rgb(), rgb);
    }
}
