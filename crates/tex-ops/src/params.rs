//! Per-query sampling parameters.
//!
//! The rasterizer fills one [`SampleParams`] per covered pixel: the UV at the
//! pixel center plus the UVs one pixel to the right and one pixel below
//! (forward differences), which [`crate::lod`] turns into a screen-space
//! footprint estimate. None of the UVs are required to lie in `[0, 1]`;
//! lookups clamp to the edge instead of faulting.

use glam::Vec2;

/// Texel filtering mode within a single mip level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TexelFilter {
    /// Nearest-neighbor (fastest, blocky).
    Nearest,
    /// Bilinear interpolation of the four neighboring texels.
    #[default]
    Linear,
}

/// Mip level selection mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LevelFilter {
    /// Always sample the full-resolution base level (no anti-aliasing).
    #[default]
    Zero,
    /// Round the continuous LOD to the nearest discrete level.
    Nearest,
    /// Keep the continuous LOD and blend the two adjacent levels.
    Linear,
}

/// All inputs for one sampling query.
///
/// Transient, not owned by the texture; the rasterizer builds one per pixel.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use tex_ops::{SampleParams, TexelFilter, LevelFilter};
///
/// let params = SampleParams {
///     uv: Vec2::new(0.5, 0.5),
///     uv_dx: Vec2::new(0.51, 0.5),
///     uv_dy: Vec2::new(0.5, 0.51),
///     texel_filter: TexelFilter::Linear,
///     level_filter: LevelFilter::Linear,
/// };
/// assert_eq!(params.level_filter, LevelFilter::Linear);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleParams {
    /// Texture-space position at the query pixel center.
    pub uv: Vec2,
    /// UV at one pixel to the right of the query pixel.
    pub uv_dx: Vec2,
    /// UV at one pixel below the query pixel.
    pub uv_dy: Vec2,
    /// Filtering mode within a level.
    pub texel_filter: TexelFilter,
    /// Mip level selection mode.
    pub level_filter: LevelFilter,
}

impl SampleParams {
    /// Creates parameters with a zero footprint (both derivatives equal to
    /// `uv`), which always resolves to LOD 0.
    pub fn at(uv: Vec2, texel_filter: TexelFilter, level_filter: LevelFilter) -> Self {
        Self {
            uv,
            uv_dx: uv,
            uv_dy: uv,
            texel_filter,
            level_filter,
        }
    }
}
