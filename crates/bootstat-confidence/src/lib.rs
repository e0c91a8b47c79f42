//! Bootstrap confidence intervals
//!
//! This crate estimates confidence intervals for arbitrary statistics by
//! resampling with replacement:
//!
//! - **Percentile intervals**: empirical percentiles of the resample scores
//! - **BCa intervals**: percentiles adjusted for bias and for skew measured
//!   by the jackknife (the default)
//! - **Coverage diagnostics**: how often intervals contain the population
//!   value of a known normal population
//!
//! # Examples
//!
//! ## Several estimators on one sample
//!
//! ```rust
//! use bootstat_confidence::{
//!     Bootstrap, BootstrapConfig, Estimator, IntervalMethod, Mean, Median, StandardDeviation,
//! };
//! use std::sync::Arc;
//!
//! let sample = vec![47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0];
//! let estimators: Vec<Arc<dyn Estimator>> =
//!     vec![Arc::new(Mean), Arc::new(Median), Arc::new(StandardDeviation)];
//! let config = BootstrapConfig::new()
//!     .with_resamples(5000)
//!     .with_method(IntervalMethod::Bca)
//!     .with_seed(42);
//!
//! let bootstrap = Bootstrap::with_config(&sample, estimators, &config).unwrap();
//! for (name, estimate) in bootstrap.estimates() {
//!     println!("{name}: {estimate}");
//! }
//! ```
//!
//! ## Custom statistic
//!
//! ```rust
//! use bootstat_confidence::{api::bootstrap_estimator, BootstrapConfig, FnEstimator};
//! use std::sync::Arc;
//!
//! let midrange = FnEstimator::new("midrange", |s: &[f64]| {
//!     let (min, max) = bootstat_core::descriptive::min_max(s)?;
//!     Ok((min + max) / 2.0)
//! });
//! let config = BootstrapConfig::new().with_resamples(1000).with_seed(3);
//! let estimate = bootstrap_estimator(&[1.0, 2.0, 6.0, 9.0], Arc::new(midrange), &config).unwrap();
//! assert_eq!(estimate.point(), 5.0);
//! ```

pub mod api;
mod bootstrap;
mod bootstrap_methods;
pub mod bootstrap_workspace;
mod config;
pub mod diagnostics;
mod estimators;
mod traits;
mod types;

// Re-exports
pub use api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES, FAST_RESAMPLES};
pub use bootstrap::Bootstrap;
pub use bootstrap_methods::{jackknife, BCaBootstrap, BcaParameters, PercentileBootstrap};
pub use config::{BootstrapConfig, IntervalMethod};
pub use diagnostics::{coverage_study, CoverageEntry, CoverageReport};
pub use estimators::{EstimatorKind, FnEstimator, Mean, Median, Population, StandardDeviation};
pub use traits::{BootstrapMethod, Estimator};
pub use types::{ConfidenceLevel, Estimate};
