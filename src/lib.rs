//! Bootstrap confidence intervals
//!
//! Facade over the bootstat workspace:
//!
//! - [`core`]: error type, descriptive statistics, normal distribution
//! - [`histogram`]: equal-width binning for diagnostics
//! - [`confidence`]: estimators, the bootstrap engine, percentile and BCa
//!   intervals, coverage studies
//!
//! # Example
//!
//! ```rust
//! use bootstat::prelude::*;
//! use std::sync::Arc;
//!
//! let sample = [47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0];
//! let estimators: Vec<Arc<dyn Estimator>> = vec![Arc::new(Mean), Arc::new(Median)];
//! let config = BootstrapConfig::new().with_resamples(2000).with_seed(1);
//!
//! let bootstrap = Bootstrap::with_config(&sample, estimators, &config)?;
//! let median = bootstrap.estimate("median")?;
//! assert_eq!(median.point(), 51.5);
//! # Ok::<(), bootstat::Error>(())
//! ```

pub use bootstat_confidence as confidence;
pub use bootstat_core as core;
pub use bootstat_histogram as histogram;

pub use bootstat_confidence::{
    Bootstrap, BootstrapConfig, Estimate, Estimator, IntervalMethod, Mean, Median,
    StandardDeviation,
};
pub use bootstat_core::{Error, Result};
pub use bootstat_histogram::Bins;

pub mod prelude {
    pub use bootstat_confidence::{
        Bootstrap, BootstrapConfig, Estimate, Estimator, FnEstimator, IntervalMethod, Mean,
        Median, StandardDeviation,
    };
    pub use bootstat_core::descriptive;
    pub use bootstat_core::{Error, Result};
    pub use bootstat_histogram::{Bins, HistogramOps};
}
