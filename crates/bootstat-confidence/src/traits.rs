//! Core traits for bootstrap estimation
//!
//! An [`Estimator`] is a named statistic evaluated on the original sample,
//! on every resample, and on every leave-one-out jackknife sample. A
//! [`BootstrapMethod`] turns the sorted resample scores of one estimator
//! into an [`Estimate`].

use crate::estimators::EstimatorKind;
use crate::types::Estimate;
use bootstat_core::Result;

/// A named statistic computed from a sample
///
/// Implementations must be pure and must accept samples shorter than the
/// original one, since the jackknife evaluates them on `n - 1` elements.
/// Names must be unique within one [`Bootstrap`](crate::Bootstrap).
pub trait Estimator: Send + Sync {
    /// Unique name of the estimator
    fn name(&self) -> &str;

    /// Evaluate the statistic on `sample`
    fn calculate(&self, sample: &[f64]) -> Result<f64>;

    /// Classification used by diagnostics to look up a theoretical value
    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Custom(self.name().to_string())
    }
}

/// Strategy that derives a confidence interval from resample scores
pub trait BootstrapMethod: Send + Sync {
    /// Calculate the interval for one estimator
    ///
    /// # Arguments
    /// * `sample` - The original sample
    /// * `estimator` - Estimator that produced the scores
    /// * `scores` - Resample scores, sorted ascending
    /// * `point` - Estimator applied to the original sample
    /// * `confidence_level` - Confidence level in (0, 1)
    fn calculate_interval(
        &self,
        sample: &[f64],
        estimator: &dyn Estimator,
        scores: &[f64],
        point: f64,
        confidence_level: f64,
    ) -> Result<Estimate>;

    /// Short name of the method
    fn name(&self) -> &'static str;
}
