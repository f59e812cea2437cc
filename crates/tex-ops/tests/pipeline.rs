//! End-to-end sampling scenarios over a generated pyramid.

use glam::Vec2;
use tex_core::{Color, Texture};
use tex_ops::{
    generate_mips, sample, sample_bilinear, LevelFilter, SampleParams, TexelFilter,
};

/// 4x4 checkerboard; texels with even x+y are white, odd are black.
fn checkerboard_4x4() -> Texture {
    let mut texels = Vec::with_capacity(4 * 4 * 3);
    for y in 0..4u32 {
        for x in 0..4u32 {
            let v = if (x + y) % 2 == 0 { 255 } else { 0 };
            texels.extend_from_slice(&[v, v, v]);
        }
    }
    Texture::from_rgb8(4, 4, texels).unwrap()
}

#[test]
fn checkerboard_center_nearest_is_reproducible() {
    let mut texture = checkerboard_4x4();
    generate_mips(&mut texture, 0).unwrap();

    let params = SampleParams::at(
        Vec2::new(0.5, 0.5),
        TexelFilter::Nearest,
        LevelFilter::Zero,
    );
    let first = sample(&texture, &params);
    // tie-break at the exact center rounds both axes up to texel (2, 2)
    assert_eq!(first, Color::WHITE);
    for _ in 0..16 {
        assert_eq!(sample(&texture, &params), first);
    }
}

#[test]
fn minification_footprint_selects_coarser_level() {
    let mut texture = checkerboard_4x4();
    generate_mips(&mut texture, 0).unwrap();

    // A footprint of two base texels per pixel resolves to LOD 1 exactly,
    // so trilinear sampling must equal a single bilinear tap at level 1.
    let uv = Vec2::new(0.5, 0.5);
    let params = SampleParams {
        uv,
        uv_dx: uv + Vec2::new(2.0 / 4.0, 0.0),
        uv_dy: uv,
        texel_filter: TexelFilter::Linear,
        level_filter: LevelFilter::Linear,
    };
    assert_eq!(sample(&texture, &params), sample_bilinear(&texture, uv, 1));
}

#[test]
fn magnification_degenerates_to_base_bilinear() {
    let mut texture = checkerboard_4x4();
    generate_mips(&mut texture, 0).unwrap();

    // A sub-texel footprint clamps to LOD 0.
    let uv = Vec2::new(0.3, 0.6);
    let params = SampleParams {
        uv,
        uv_dx: uv + Vec2::new(0.05, 0.0),
        uv_dy: uv + Vec2::new(0.0, 0.05),
        texel_filter: TexelFilter::Linear,
        level_filter: LevelFilter::Linear,
    };
    assert_eq!(sample(&texture, &params), sample_bilinear(&texture, uv, 0));
}

#[test]
fn out_of_range_uv_samples_the_border() {
    let mut texture = checkerboard_4x4();
    generate_mips(&mut texture, 0).unwrap();

    let corner = texture.base().texel(0, 0);
    for filter in [TexelFilter::Nearest, TexelFilter::Linear] {
        let params = SampleParams::at(Vec2::new(-3.0, -7.0), filter, LevelFilter::Zero);
        assert_eq!(sample(&texture, &params), corner);
    }
}
