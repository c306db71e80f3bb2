//! Benchmarks for parsing and the water engine.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rainwater_core::{parse_heights, WaterProfile};

fn sawtooth(n: usize) -> Vec<u32> {
    (0..n).map(|i| ((i * 7) % 13) as u32).collect()
}

fn bench_compute_small(c: &mut Criterion) {
    let heights = sawtooth(10);
    c.bench_function("water_compute_10", |b| {
        b.iter(|| WaterProfile::compute(black_box(&heights)))
    });
}

fn bench_compute_large(c: &mut Criterion) {
    let heights = sawtooth(10_000);
    c.bench_function("water_compute_10k", |b| {
        b.iter(|| WaterProfile::compute(black_box(&heights)))
    });
}

fn bench_parse_comma_list(c: &mut Criterion) {
    let text = sawtooth(1_000)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    c.bench_function("parse_comma_list_1k", |b| {
        b.iter(|| parse_heights(black_box(&text)))
    });
}

criterion_group!(
    benches,
    bench_compute_small,
    bench_compute_large,
    bench_parse_comma_list,
);
criterion_main!(benches);
