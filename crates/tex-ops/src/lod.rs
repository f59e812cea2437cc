//! Level-of-detail resolution from screen-space derivatives.
//!
//! The UV forward differences are scaled by the base image extent to get the
//! texture-space footprint of one screen pixel; the LOD is the base-2 log of
//! the larger derivative magnitude, so the filter width is chosen for the
//! worst (most aliasing-prone) direction.

use tex_core::Texture;

use crate::params::{LevelFilter, SampleParams};

/// Resolves the continuous mip level for one query.
///
/// The result is always finite and clamped to `[0, num_levels - 1]`:
/// degenerate footprints (zero derivatives, empty or missing base level)
/// resolve to 0 rather than NaN.
///
/// With [`LevelFilter::Nearest`] the value is rounded half-up to a discrete
/// level, still expressed on the continuous scale; with
/// [`LevelFilter::Linear`] it is returned unrounded for trilinear blending.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use tex_core::Texture;
/// use tex_ops::{level_of_detail, SampleParams, TexelFilter, LevelFilter};
///
/// let texture = Texture::from_rgb8(16, 16, vec![0; 16 * 16 * 3]).unwrap();
/// let params = SampleParams::at(Vec2::ZERO, TexelFilter::Linear, LevelFilter::Linear);
/// assert_eq!(level_of_detail(&texture, &params), 0.0);
/// ```
pub fn level_of_detail(texture: &Texture, params: &SampleParams) -> f32 {
    if params.level_filter == LevelFilter::Zero {
        return 0.0;
    }
    let Some(base) = texture.level(0) else {
        return 0.0;
    };
    if base.is_empty() {
        return 0.0;
    }

    let dx = (params.uv_dx - params.uv) * base.width() as f32;
    let dy = (params.uv_dy - params.uv) * base.height() as f32;
    let footprint = dx.length().max(dy.length());
    // NaN compares false against 0.0, so it must be caught here with the
    // degenerate footprints; log2 of a positive value never produces NaN,
    // and clamp bounds an infinite footprint to the coarsest level.
    if footprint.is_nan() || footprint <= 0.0 {
        return 0.0;
    }

    let max_level = (texture.num_levels() - 1) as f32;
    let lod = footprint.log2().clamp(0.0, max_level);

    match params.level_filter {
        LevelFilter::Nearest => {
            // Round half-up: a fraction of exactly 0.5 picks the coarser level.
            let rounded = lod.floor();
            if lod - rounded < 0.5 {
                rounded
            } else {
                rounded + 1.0
            }
        }
        _ => lod,
    }
}
