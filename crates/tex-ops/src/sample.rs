//! Single-level and cross-level texture sampling.
//!
//! All lookups go through the clamp-to-edge texel accessor on
//! [`MipLevel`](tex_core::MipLevel), so UVs outside `[0, 1]` saturate to the
//! border instead of faulting. Nearest sampling maps UV by `(extent - 1)` so
//! rounding picks the closest texel center; bilinear maps by `extent` so the
//! fractional offsets line up with the texel-center convention.

use glam::Vec2;
use tex_core::{Color, Texture};
use tex_math::{fract, lerp_color};

use crate::lod::level_of_detail;
use crate::params::{SampleParams, TexelFilter};

/// Fractional LODs below this are treated as exactly integral, skipping the
/// second bilinear tap.
const LEVEL_SNAP_EPSILON: f32 = 0.005;

/// Samples the texture for one query: resolves the LOD from the derivative
/// hints, then dispatches on the texel filter.
///
/// This is the single per-pixel entry point the rasterizer calls.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use tex_core::Texture;
/// use tex_ops::{sample, SampleParams, TexelFilter, LevelFilter};
///
/// let texture = Texture::from_rgb8(2, 2, vec![255; 12]).unwrap();
/// let params = SampleParams::at(Vec2::new(0.5, 0.5), TexelFilter::Linear, LevelFilter::Zero);
/// assert_eq!(sample(&texture, &params).to_rgb8(), [255, 255, 255]);
/// ```
pub fn sample(texture: &Texture, params: &SampleParams) -> Color {
    let lod = level_of_detail(texture, params);
    match params.texel_filter {
        TexelFilter::Nearest => sample_nearest(texture, params.uv, lod.floor() as usize),
        TexelFilter::Linear => sample_trilinear(texture, params.uv, lod),
    }
}

/// Nearest-neighbor sample at one fixed mip level.
///
/// UV is scaled by `(width - 1, height - 1)` and each axis rounds
/// independently: a fractional offset below 0.5 rounds down, otherwise up.
pub fn sample_nearest(texture: &Texture, uv: Vec2, level: usize) -> Color {
    let index = level.min(texture.num_levels().saturating_sub(1));
    let Some(level) = texture.level(index) else {
        return Color::BLACK;
    };
    if level.is_empty() {
        return Color::BLACK;
    }

    let x = (level.width() - 1) as f32 * uv.x;
    let y = (level.height() - 1) as f32 * uv.y;
    let x0 = x.floor();
    let y0 = y.floor();
    let sx = if x - x0 < 0.5 { x0 } else { x0 + 1.0 };
    let sy = if y - y0 < 0.5 { y0 } else { y0 + 1.0 };
    level.texel(sx as i32, sy as i32)
}

/// Bilinear sample at one fixed mip level.
///
/// UV is scaled by `(width, height)`, floored to the base texel, and the
/// four neighbors are blended with two nested lerps (along x, then y). Each
/// neighbor fetch clamps per axis, so a border query may legitimately read
/// the same edge texel twice.
pub fn sample_bilinear(texture: &Texture, uv: Vec2, level: usize) -> Color {
    let index = level.min(texture.num_levels().saturating_sub(1));
    let Some(level) = texture.level(index) else {
        return Color::BLACK;
    };
    if level.is_empty() {
        return Color::BLACK;
    }

    let x = level.width() as f32 * uv.x;
    let y = level.height() as f32 * uv.y;
    let s = x - x.floor();
    let t = y - y.floor();
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;

    let c00 = level.texel(x0, y0);
    let c10 = level.texel(x0 + 1, y0);
    let c01 = level.texel(x0, y0 + 1);
    let c11 = level.texel(x0 + 1, y0 + 1);

    lerp_color(lerp_color(c00, c10, s), lerp_color(c01, c11, s), t)
}

/// Trilinear sample: bilinear at the two levels bracketing `lod`, blended by
/// the fractional part.
///
/// Degenerates to a single bilinear tap when the fraction is (nearly) zero
/// or `floor(lod)` is already the coarsest level, so magnification and
/// minification share one code path.
pub fn sample_trilinear(texture: &Texture, uv: Vec2, lod: f32) -> Color {
    let lod = lod.max(0.0);
    let l0 = lod.floor() as usize;
    let frac = fract(lod);

    let fine = sample_bilinear(texture, uv, l0);
    if frac < LEVEL_SNAP_EPSILON || l0 + 1 >= texture.num_levels() {
        return fine;
    }
    lerp_color(fine, sample_bilinear(texture, uv, l0 + 1), frac)
}
