//! Mipmap pyramid generation.
//!
//! Each coarser level is built by filtering the immediately finer one down
//! to `max(1, extent / 2)` per axis. Even extents use a 2-tap box filter;
//! odd extents round down, so the filter widens to 3 taps with a trapezoidal
//! profile whose edge weights taper across the output index. The per-output
//! weights always sum to 1, which keeps the image mean stable across levels
//! even when a dimension is odd.
//!
//! Accumulation happens in `f32` on `[0, 1]` channels; results are written
//! back as truncated 8-bit values. Generation is a one-shot batch over the
//! whole pyramid; levels finer than the start level are never touched.

use tex_core::{MipLevel, Texture, MAX_MIP_LEVELS};
use tex_math::saturate;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{OpsError, OpsResult};

/// Builds all coarser levels of the pyramid from an existing level.
///
/// Levels coarser than `start_level` are discarded and regenerated; levels
/// finer than it are left untouched. The number of added levels is
/// `floor(log2(max(width, height)))` of the start level, capped so the
/// total never exceeds [`MAX_MIP_LEVELS`].
///
/// Once this returns, the level store is frozen and sampling may proceed
/// concurrently; concurrent calls to this function on one texture must be
/// serialized by the caller.
///
/// # Errors
///
/// Returns [`OpsError::InvalidStartLevel`] if `start_level` does not name an
/// existing level.
///
/// # Example
///
/// ```rust
/// use tex_core::Texture;
/// use tex_ops::generate_mips;
///
/// let mut texture = Texture::from_rgb8(8, 8, vec![200; 8 * 8 * 3]).unwrap();
/// generate_mips(&mut texture, 0).unwrap();
/// assert_eq!(texture.num_levels(), 4); // 8x8, 4x4, 2x2, 1x1
/// ```
pub fn generate_mips(texture: &mut Texture, start_level: usize) -> OpsResult<()> {
    let num_levels = texture.num_levels();
    if start_level >= num_levels {
        return Err(OpsError::InvalidStartLevel {
            start_level,
            num_levels,
        });
    }

    let (base_w, base_h) = texture.levels()[start_level].dimensions();
    let extent = base_w.max(base_h);
    let mut num_sub_levels = if extent > 0 { extent.ilog2() as usize } else { 0 };
    num_sub_levels = num_sub_levels.min(MAX_MIP_LEVELS.saturating_sub(start_level + 1));

    let levels = texture.levels_mut();
    levels.truncate(start_level + 1);
    levels.reserve(num_sub_levels);
    for i in 0..num_sub_levels {
        let next = downsample(&levels[start_level + i])?;
        levels.push(next);
    }

    debug!(
        start_level,
        added = num_sub_levels,
        total = start_level + num_sub_levels + 1,
        "generated mip pyramid"
    );
    Ok(())
}

/// Per-axis downsampling filter.
///
/// An even source extent halves exactly: 2 taps, both weighted `1/2`. An odd
/// source extent rounds down, so each output texel covers 3 source texels
/// with edge weights that shift linearly across the output index
/// (`decimal = 1/dst_extent`); `norm = 1/(2 + decimal)` makes every weight
/// triple sum to 1.
struct AxisFilter {
    support: usize,
    decimal: f32,
    norm: f32,
}

impl AxisFilter {
    fn new(src_extent: u32, dst_extent: u32) -> Self {
        if src_extent & 1 == 1 {
            let decimal = 1.0 / dst_extent as f32;
            Self {
                support: 3,
                decimal,
                norm: 1.0 / (2.0 + decimal),
            }
        } else {
            Self {
                support: 2,
                decimal: 0.0,
                norm: 0.5,
            }
        }
    }

    /// Weight triple for output index `i`; only the first `support` entries
    /// are used.
    #[inline]
    fn weights(&self, i: usize) -> [f32; 3] {
        [
            self.norm * (1.0 - self.decimal * i as f32),
            self.norm,
            self.norm * self.decimal * (i as f32 + 1.0),
        ]
    }
}

#[inline]
fn rgb8_to_f32(src: &[u8]) -> [f32; 3] {
    [
        src[0] as f32 / 255.0,
        src[1] as f32 / 255.0,
        src[2] as f32 / 255.0,
    ]
}

#[inline]
fn f32_to_rgb8(dst: &mut [u8], src: [f32; 3]) {
    dst[0] = (255.0 * saturate(src[0])) as u8;
    dst[1] = (255.0 * saturate(src[1])) as u8;
    dst[2] = (255.0 * saturate(src[2])) as u8;
}

/// Filters one level down to half resolution (floored, minimum 1 per axis).
fn downsample(prev: &MipLevel) -> OpsResult<MipLevel> {
    let (prev_w, prev_h) = prev.dimensions();
    let curr_w = (prev_w / 2).max(1);
    let curr_h = (prev_h / 2).max(1);

    let w_filter = AxisFilter::new(prev_w, curr_w);
    let h_filter = AxisFilter::new(prev_h, curr_h);

    let pitch = curr_w as usize * 3;
    let mut texels = vec![0u8; pitch * curr_h as usize];

    if curr_h == prev_h {
        // Reduction only in width (height is already 1).
        fill_row_horizontal(prev.row(0), &w_filter, curr_w as usize, &mut texels);
    } else if curr_w == prev_w {
        // Reduction only in height (width is already 1).
        for j in 0..curr_h as usize {
            let weights = h_filter.weights(j);
            let mut acc = [0.0f32; 3];
            for jj in 0..h_filter.support {
                let src = rgb8_to_f32(&prev.row((2 * j + jj) as u32)[..3]);
                acc[0] += weights[jj] * src[0];
                acc[1] += weights[jj] * src[1];
                acc[2] += weights[jj] * src[2];
            }
            f32_to_rgb8(&mut texels[j * 3..j * 3 + 3], acc);
        }
    } else {
        // Reduction in both axes: separable weights over a support region of
        // up to 3x3 source texels. Output rows are independent.
        #[cfg(feature = "parallel")]
        texels
            .par_chunks_mut(pitch)
            .enumerate()
            .for_each(|(j, row)| fill_row_2d(prev, &w_filter, &h_filter, curr_w as usize, j, row));

        #[cfg(not(feature = "parallel"))]
        for (j, row) in texels.chunks_mut(pitch).enumerate() {
            fill_row_2d(prev, &w_filter, &h_filter, curr_w as usize, j, row);
        }
    }

    Ok(MipLevel::from_texels(curr_w, curr_h, texels)?)
}

fn fill_row_horizontal(src_row: &[u8], w_filter: &AxisFilter, curr_w: usize, out: &mut [u8]) {
    for i in 0..curr_w {
        let weights = w_filter.weights(i);
        let mut acc = [0.0f32; 3];
        for ii in 0..w_filter.support {
            let o = (2 * i + ii) * 3;
            let src = rgb8_to_f32(&src_row[o..o + 3]);
            acc[0] += weights[ii] * src[0];
            acc[1] += weights[ii] * src[1];
            acc[2] += weights[ii] * src[2];
        }
        f32_to_rgb8(&mut out[i * 3..i * 3 + 3], acc);
    }
}

fn fill_row_2d(
    prev: &MipLevel,
    w_filter: &AxisFilter,
    h_filter: &AxisFilter,
    curr_w: usize,
    j: usize,
    out_row: &mut [u8],
) {
    let h_weights = h_filter.weights(j);
    for i in 0..curr_w {
        let w_weights = w_filter.weights(i);
        let mut acc = [0.0f32; 3];
        for jj in 0..h_filter.support {
            let src_row = prev.row((2 * j + jj) as u32);
            for ii in 0..w_filter.support {
                let weight = h_weights[jj] * w_weights[ii];
                let o = (2 * i + ii) * 3;
                let src = rgb8_to_f32(&src_row[o..o + 3]);
                acc[0] += weight * src[0];
                acc[1] += weight * src[1];
                acc[2] += weight * src[2];
            }
        }
        f32_to_rgb8(&mut out_row[i * 3..i * 3 + 3], acc);
    }
}
