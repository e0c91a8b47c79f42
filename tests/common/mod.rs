//! Shared utilities for integration tests
#![allow(dead_code)]

use bootstat::Estimator;
use bootstat::{Mean, Median, StandardDeviation};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub const SCENARIO: [f64; 10] = [47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0];

/// Install a fmt subscriber honouring `RUST_LOG`, once per test binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Seeded sample from a normal distribution
pub fn normal_sample(size: usize, mean: f64, sd: f64, seed: u64) -> Vec<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let normal = Normal::new(mean, sd).unwrap();
    (0..size).map(|_| normal.sample(&mut rng)).collect()
}

pub fn default_estimators() -> Vec<Arc<dyn Estimator>> {
    vec![Arc::new(Mean), Arc::new(Median), Arc::new(StandardDeviation)]
}

/// Population variance of `values`
pub fn spread(values: &[f64]) -> f64 {
    let m = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64
}
