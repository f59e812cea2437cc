//! Interpolation functions for texture filtering.
//!
//! Bilinear and trilinear sampling are built entirely from nested linear
//! interpolations, so the exact lerp form matters: it must return `a` at
//! `t = 0` and `b` at `t = 1`, and be monotonic in `t` per channel.
//!
//! # Usage
//!
//! ```rust
//! use tex_math::{lerp, fract};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert!((fract(1.75) - 0.75).abs() < 1e-6);
//! ```

use tex_core::Color;

/// Linear interpolation between two values.
///
/// Returns `a` when `t = 0.0`, and `b` when `t = 1.0`.
/// For values outside [0, 1], the result is extrapolated.
///
/// # Formula
///
/// `a + (b - a) * t`
///
/// # Example
///
/// ```rust
/// use tex_math::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
/// ```
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Channel-wise linear interpolation between two colors.
///
/// # Example
///
/// ```rust
/// use tex_core::Color;
/// use tex_math::lerp_color;
///
/// let mid = lerp_color(Color::BLACK, Color::WHITE, 0.5);
/// assert_eq!(mid, Color::new(0.5, 0.5, 0.5));
/// ```
#[inline]
pub fn lerp_color(a: Color, b: Color, t: f32) -> Color {
    Color::new(lerp(a.r, b.r, t), lerp(a.g, b.g, t), lerp(a.b, b.b, t))
}

/// Fract: returns the fractional part of a value.
///
/// # Example
///
/// ```rust
/// use tex_math::fract;
///
/// assert!((fract(1.75) - 0.75).abs() < 1e-6);
/// ```
#[inline]
pub fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// Clamps a value to [0, 1].
///
/// # Example
///
/// ```rust
/// use tex_math::saturate;
///
/// assert_eq!(saturate(-0.5), 0.0);
/// assert_eq!(saturate(1.5), 1.0);
/// ```
#[inline]
pub fn saturate(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}
