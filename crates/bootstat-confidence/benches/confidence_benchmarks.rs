use bootstat_confidence::{
    jackknife, BCaBootstrap, Bootstrap, BootstrapConfig, BootstrapMethod, Estimator,
    IntervalMethod, Mean, Median, PercentileBootstrap,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::Normal;
use std::sync::Arc;

/// Generate normal data
fn generate_normal_data(size: usize, mean: f64, std: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, std).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

fn bench_interval_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("IntervalMethods");
    let sample = generate_normal_data(100, 100.0, 15.0, 42);
    let mut scores = generate_normal_data(10_000, 100.0, 1.5, 43);
    scores.sort_by(f64::total_cmp);

    group.bench_function("percentile", |b| {
        b.iter(|| {
            PercentileBootstrap.calculate_interval(&sample, &Mean, black_box(&scores), 100.0, 0.95)
        })
    });
    group.bench_function("bca", |b| {
        b.iter(|| {
            BCaBootstrap.calculate_interval(&sample, &Mean, black_box(&scores), 100.0, 0.95)
        })
    });

    group.finish();
}

fn bench_jackknife(c: &mut Criterion) {
    let mut group = c.benchmark_group("Jackknife");

    for size in [50, 200, 1000] {
        let data = generate_normal_data(size, 0.0, 1.0, 7);
        group.bench_with_input(BenchmarkId::new("median", size), &data, |b, data| {
            b.iter(|| jackknife(&Median, black_box(data)))
        });
    }

    group.finish();
}

fn bench_bootstrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bootstrap");
    group.sample_size(10);
    let data = generate_normal_data(100, 100.0, 15.0, 42);

    for n_resamples in [1_000, 10_000] {
        for method in [IntervalMethod::Percentile, IntervalMethod::Bca] {
            let config = BootstrapConfig::new()
                .with_resamples(n_resamples)
                .with_method(method)
                .with_seed(42);
            group.bench_with_input(
                BenchmarkId::new(format!("{method:?}"), n_resamples),
                &config,
                |b, config| {
                    b.iter(|| {
                        let estimators: Vec<Arc<dyn Estimator>> =
                            vec![Arc::new(Mean), Arc::new(Median)];
                        Bootstrap::with_config(black_box(&data), estimators, config)
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_interval_methods, bench_jackknife, bench_bootstrap);
criterion_main!(benches);
