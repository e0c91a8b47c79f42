//! Benchmarks for the descriptive statistics primitives

use bootstat_core::descriptive::{mean, median, sorted, sst, variance};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Generate test data with a deterministic pattern
fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| (i as f64 * 0.1).sin() * 100.0)
        .collect()
}

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");

    for &size in &[100, 1_000, 100_000] {
        let data = generate_test_data(size);

        group.bench_with_input(BenchmarkId::new("mean", size), &data, |b, data| {
            b.iter(|| mean(black_box(data)))
        });

        let m = mean(&data).unwrap();
        group.bench_with_input(BenchmarkId::new("sst", size), &data, |b, data| {
            b.iter(|| sst(black_box(data), m))
        });
        group.bench_with_input(BenchmarkId::new("variance", size), &data, |b, data| {
            b.iter(|| variance(black_box(data), m, true))
        });
    }

    group.finish();
}

fn bench_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("median");

    for &size in &[100, 1_000, 100_000] {
        let data = sorted(&generate_test_data(size));
        group.bench_with_input(BenchmarkId::new("sorted", size), &data, |b, data| {
            b.iter(|| median(black_box(data)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_moments, bench_median);
criterion_main!(benches);
