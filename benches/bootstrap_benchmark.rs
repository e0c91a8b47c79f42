//! End-to-end benchmarks of the bootstrap engine

use bootstat::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use std::sync::Arc;

fn generate_normal_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(100.0, 15.0).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn estimators() -> Vec<Arc<dyn Estimator>> {
    vec![Arc::new(Mean), Arc::new(Median), Arc::new(StandardDeviation)]
}

fn bench_sample_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap_sample_size");
    group.sample_size(10);
    let config = BootstrapConfig::new().with_resamples(10_000).with_seed(42);

    for size in [10, 100, 1000] {
        let data = generate_normal_data(size, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Bootstrap::with_config(black_box(data), estimators(), &config))
        });
    }

    group.finish();
}

fn bench_default_resamples(c: &mut Criterion) {
    let mut group = c.benchmark_group("bootstrap_default");
    group.sample_size(10);
    let data = generate_normal_data(100, 2);
    let config = BootstrapConfig::new().with_seed(42);

    group.bench_function("mean_100k", |b| {
        b.iter(|| {
            let estimators: Vec<Arc<dyn Estimator>> = vec![Arc::new(Mean)];
            Bootstrap::with_config(black_box(&data), estimators, &config)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_sample_sizes, bench_default_resamples);
criterion_main!(benches);
