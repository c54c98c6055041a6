use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use swatchbook::{Color, GplPalette};

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("color-update");

    group.bench_function("from-rgb", |b| {
        b.iter(|| Color::from_rgb(black_box(12), black_box(200), black_box(99)))
    });

    group.bench_function("from-hsv", |b| {
        b.iter(|| Color::from_hsv(black_box(217.5), black_box(0.6), black_box(0.8)))
    });

    group.bench_function("from-hex-str", |b| {
        b.iter(|| Color::from_hex_str(black_box("#3fa9f5")))
    });

    group.bench_function("set-hue", |b| {
        let mut color = Color::from_hex(0x3fa9f5);
        b.iter(|| color.set_hue(black_box(42.0)))
    });

    group.finish();

    let colors: Vec<_> = (0..=0xff_u32)
        .map(|level| Color::from_hex(level * 0x010101))
        .collect();
    let mut group = c.benchmark_group("palette-export");

    group.bench_function("256-grays", |b| {
        b.iter(|| {
            GplPalette::new("Grays", black_box(colors.clone())).and_then(|p| p.to_gpl())
        })
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
