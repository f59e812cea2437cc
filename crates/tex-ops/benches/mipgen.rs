use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use tex_core::Texture;
use tex_ops::generate_mips;

fn ramp_texels(width: u32, height: u32) -> Vec<u8> {
    let mut texels = Vec::with_capacity((width * height * 3) as usize);
    for i in 0..(width * height) {
        let v = ((i * 37) % 251) as u8;
        texels.extend_from_slice(&[v, v.wrapping_add(10), v.wrapping_add(20)]);
    }
    texels
}

fn bench_generate_mips(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_mips");
    for size in [256u32, 512, 1024] {
        let texels = ramp_texels(size, size);
        group.bench_function(format!("rgb8_{size}x{size}"), |b| {
            b.iter(|| {
                let mut tex = Texture::from_rgb8(size, size, texels.clone()).unwrap();
                generate_mips(black_box(&mut tex), 0).unwrap();
                black_box(tex.num_levels());
            });
        });
    }
    // odd dimensions exercise the 3-tap trapezoidal path
    let texels = ramp_texels(1023, 767);
    group.bench_function("rgb8_1023x767_odd", |b| {
        b.iter(|| {
            let mut tex = Texture::from_rgb8(1023, 767, texels.clone()).unwrap();
            generate_mips(black_box(&mut tex), 0).unwrap();
            black_box(tex.num_levels());
        });
    });
    group.finish();
}

criterion_group!(benches, bench_generate_mips);
criterion_main!(benches);
