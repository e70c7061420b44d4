//! Benchmarks for the tint filter.
//!
//! Run with: `cargo bench -p tint-bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use tint_core::{PixelBuffer, Rgb8, Rgba8};
use tint_ops::{
    apply_tint, apply_tint_in_place, apply_tint_tiled, resolve_effective_color, tint_pixel,
    CancelFlag, ColorSource, TintParams, Unstoppable,
};

fn test_image(w: u32, h: u32) -> PixelBuffer {
    let mut img = PixelBuffer::new(w, h);
    for (i, px) in img.data_mut().iter_mut().enumerate() {
        let v = (i % 251) as u8;
        *px = Rgba8::new(v, v.wrapping_mul(3), v.wrapping_add(91), 255);
    }
    img
}

/// Benchmark effective color resolution.
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let rgb = TintParams::new(ColorSource::Rgb(Rgb8::new(200, 100, 50)), 0.5);
    let hsv = TintParams::new(
        ColorSource::Hsv(tint_core::Hsv::new(210, 80, 90).unwrap_or_default()),
        0.5,
    );

    group.bench_function("rgb", |b| b.iter(|| resolve_effective_color(black_box(&rgb))));
    group.bench_function("hsv", |b| b.iter(|| resolve_effective_color(black_box(&hsv))));
    group.finish();
}

/// Benchmark the per-pixel kernel.
fn bench_pixel(c: &mut Criterion) {
    let img = test_image(256, 256);
    let color = Rgb8::new(227, 177, 152);
    let mut group = c.benchmark_group("pixel");
    group.throughput(Throughput::Elements(img.data().len() as u64));
    group.bench_function("tint_pixel", |b| {
        b.iter(|| {
            img.data()
                .iter()
                .map(|&p| tint_pixel(black_box(p), color))
                .collect::<Vec<_>>()
        })
    });
    group.finish();
}

/// Benchmark whole-image render: serial, in place, and tiled.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let color = Rgb8::new(227, 177, 152);

    for &(w, h) in &[(512u32, 512u32), (1920, 1080), (4096, 2160)] {
        let src = test_image(w, h);
        let mut dst = PixelBuffer::new(w, h);
        let label = format!("{w}x{h}");
        group.throughput(Throughput::Elements(u64::from(w) * u64::from(h)));

        group.bench_with_input(BenchmarkId::new("serial", &label), &src, |b, src| {
            b.iter(|| apply_tint(src, &mut dst, src.bounds(), color, &Unstoppable))
        });

        group.bench_with_input(BenchmarkId::new("in_place", &label), &src, |b, src| {
            let mut buf = src.clone();
            b.iter(|| apply_tint_in_place(&mut buf, src.bounds(), color, &Unstoppable))
        });

        // A live flag costs one atomic load per row.
        let flag = CancelFlag::new();
        for band_rows in [16u32, 64, 256] {
            group.bench_with_input(
                BenchmarkId::new(format!("tiled_{band_rows}"), &label),
                &src,
                |b, src| {
                    b.iter(|| apply_tint_tiled(src, &mut dst, src.bounds(), color, band_rows, &flag))
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_pixel, bench_render);
criterion_main!(benches);
