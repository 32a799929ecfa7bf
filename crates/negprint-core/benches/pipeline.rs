//! Benchmarks for negprint-core pipeline operations
//!
//! Run with: cargo bench -p negprint-core

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use negprint_core::models::{BlendMode, ToneCurveStage};
use negprint_core::pipeline::{apply_tone_curve, blend_sample, build_gamma_lut};
use negprint_core::Raster;

/// Synthetic diagonal gradient raster.
fn generate_test_raster(width: u32, height: u32) -> Raster {
    let mut data = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            data.push(((x + y) % 256) as u8);
        }
    }
    Raster::from_raw(width, height, data).expect("generated buffer matches dimensions")
}

fn bench_tone_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone_curve");
    let stage = ToneCurveStage::Enabled { gamma: 2.2 };

    for size in [256u32, 512, 1024, 2048].iter() {
        let pixel_count = (*size as u64) * (*size as u64);
        group.throughput(Throughput::Elements(pixel_count));

        group.bench_with_input(
            BenchmarkId::new("apply", format!("{}x{}", size, size)),
            size,
            |b, &s| {
                b.iter_batched(
                    || generate_test_raster(s, s),
                    |raster| apply_tone_curve(black_box(raster), black_box(&stage)),
                    criterion::BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_gamma_lut(c: &mut Criterion) {
    c.bench_function("build_gamma_lut", |b| {
        b.iter(|| build_gamma_lut(black_box(2.2)));
    });
}

fn bench_blend_operators(c: &mut Criterion) {
    let mut group = c.benchmark_group("blend_sample");

    for mode in [
        BlendMode::Overlay,
        BlendMode::Screen,
        BlendMode::Multiply,
        BlendMode::SoftLight,
        BlendMode::HardLight,
    ] {
        group.bench_with_input(
            BenchmarkId::new("mode", format!("{:?}", mode)),
            &mode,
            |b, &m| {
                b.iter(|| {
                    let mut acc = 0u32;
                    for a in 0..=255u8 {
                        acc += blend_sample(black_box(m), a, a.wrapping_mul(3)) as u32;
                    }
                    acc
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_tone_curve, bench_gamma_lut, bench_blend_operators);
criterion_main!(benches);
