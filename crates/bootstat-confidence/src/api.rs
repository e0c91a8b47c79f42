//! High-level API for bootstrap confidence intervals
//!
//! One-call helpers for the common single-estimator case.

use crate::bootstrap::Bootstrap;
use crate::config::BootstrapConfig;
use crate::estimators::{Mean, Median};
use crate::traits::Estimator;
use crate::types::Estimate;
use bootstat_core::Result;
use std::sync::Arc;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 100_000;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 10_000;

/// Default confidence level
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Bootstrap a single estimator and return its estimate
pub fn bootstrap_estimator(
    sample: &[f64],
    estimator: Arc<dyn Estimator>,
    config: &BootstrapConfig,
) -> Result<Estimate> {
    let name = estimator.name().to_string();
    let bootstrap = Bootstrap::with_config(sample, vec![estimator], config)?;
    bootstrap.estimate(&name).copied()
}

/// Confidence interval for the mean
///
/// # Example
/// ```rust
/// use bootstat_confidence::{api::bootstrap_mean, BootstrapConfig};
///
/// let sample = vec![1.0, 2.0, 3.0, 4.0, 5.0];
/// let config = BootstrapConfig::new().with_resamples(1000).with_seed(7);
/// let estimate = bootstrap_mean(&sample, &config).unwrap();
///
/// assert_eq!(estimate.point(), 3.0);
/// assert!(estimate.contains(3.0));
/// ```
pub fn bootstrap_mean(sample: &[f64], config: &BootstrapConfig) -> Result<Estimate> {
    bootstrap_estimator(sample, Arc::new(Mean), config)
}

/// Confidence interval for the median
pub fn bootstrap_median(sample: &[f64], config: &BootstrapConfig) -> Result<Estimate> {
    bootstrap_estimator(sample, Arc::new(Median), config)
}
