//! Floating-point RGB color type.
//!
//! Filtered sampling accumulates in `f32` to avoid integer rounding bias;
//! [`Color`] is the working representation, with conversions to and from the
//! packed 8-bit storage format at the edges.
//!
//! # Usage
//!
//! ```rust
//! use tex_core::Color;
//!
//! let c = Color::from_rgb8([255, 0, 127]);
//! assert_eq!(c.r, 1.0);
//! assert_eq!(c.to_rgb8(), [255, 0, 127]);
//! ```
//!
//! # Used By
//!
//! - [`crate::level::MipLevel`] - texel lookup result
//! - `tex-ops` - sampling and filtering arithmetic

use std::ops::{Add, Mul, Sub};

/// An RGB color with `f32` channels, nominally in `[0, 1]`.
///
/// Intermediate filter results may transiently leave `[0, 1]`; conversion
/// back to 8-bit storage clamps.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Black (all channels zero).
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    /// White (all channels one).
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);

    /// Creates a color from explicit channel values.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Converts packed 8-bit channels to float by dividing by 255.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tex_core::Color;
    ///
    /// let c = Color::from_rgb8([255, 255, 0]);
    /// assert_eq!(c, Color::new(1.0, 1.0, 0.0));
    /// ```
    #[inline]
    pub fn from_rgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: rgb[0] as f32 / 255.0,
            g: rgb[1] as f32 / 255.0,
            b: rgb[2] as f32 / 255.0,
        }
    }

    /// Converts to packed 8-bit channels.
    ///
    /// Each channel is clamped to `[0, 1]`, scaled by 255, and truncated.
    #[inline]
    pub fn to_rgb8(self) -> [u8; 3] {
        [
            (255.0 * self.r.clamp(0.0, 1.0)) as u8,
            (255.0 * self.g.clamp(0.0, 1.0)) as u8,
            (255.0 * self.b.clamp(0.0, 1.0)) as u8,
        ]
    }
}

impl Add for Color {
    type Output = Color;

    #[inline]
    fn add(self, rhs: Color) -> Color {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl Sub for Color {
    type Output = Color;

    #[inline]
    fn sub(self, rhs: Color) -> Color {
        Color::new(self.r - rhs.r, self.g - rhs.g, self.b - rhs.b)
    }
}

impl Mul<f32> for Color {
    type Output = Color;

    #[inline]
    fn mul(self, rhs: f32) -> Color {
        Color::new(self.r * rhs, self.g * rhs, self.b * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_rgb8() {
        let c = Color::from_rgb8([0, 128, 255]);
        assert_eq!(c.r, 0.0);
        assert_relative_eq!(c.g, 128.0 / 255.0);
        assert_eq!(c.b, 1.0);
    }

    #[test]
    fn test_to_rgb8_clamps() {
        let c = Color::new(-0.5, 0.5, 1.5);
        assert_eq!(c.to_rgb8(), [0, 127, 255]);
    }

    #[test]
    fn test_rgb8_roundtrip() {
        for v in [0u8, 1, 63, 127, 128, 200, 254, 255] {
            let c = Color::from_rgb8([v, v, v]);
            assert_eq!(c.to_rgb8(), [v, v, v]);
        }
    }

    #[test]
    fn test_color_ops() {
        let a = Color::new(0.25, 0.5, 0.75);
        let b = Color::new(0.25, 0.25, 0.25);
        assert_eq!(a + b, Color::new(0.5, 0.75, 1.0));
        assert_eq!(a - b, Color::new(0.0, 0.25, 0.5));
        assert_eq!(b * 2.0, Color::new(0.5, 0.5, 0.5));
    }
}
