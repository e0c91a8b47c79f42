//! Built-in estimators

use crate::traits::Estimator;
use bootstat_core::{descriptive, Error, Result};
use std::fmt;

/// Classification of an estimator
///
/// Diagnostics use the kind to find the population value an interval is
/// expected to cover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EstimatorKind {
    Mean,
    Median,
    StandardDeviation,
    /// Any user-defined statistic, identified by name
    Custom(String),
}

impl EstimatorKind {
    /// Population value of the statistic, if known for `population`
    pub fn theoretical_value(&self, population: &Population) -> Option<f64> {
        match self {
            // Normal populations are symmetric, so mean and median coincide
            EstimatorKind::Mean | EstimatorKind::Median => Some(population.mean),
            EstimatorKind::StandardDeviation => Some(population.sd),
            EstimatorKind::Custom(_) => None,
        }
    }
}

/// A normal population with known parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Population {
    pub mean: f64,
    pub sd: f64,
}

impl Population {
    /// Create a normal population
    ///
    /// # Errors
    /// Returns an error unless `mean` is finite and `sd` is finite and positive
    pub fn normal(mean: f64, sd: f64) -> Result<Self> {
        if !mean.is_finite() {
            return Err(Error::InvalidArgument(format!(
                "Population mean must be finite, got {mean}"
            )));
        }
        if !(sd.is_finite() && sd > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "Population standard deviation must be positive, got {sd}"
            )));
        }
        Ok(Self { mean, sd })
    }

    /// The standard normal population
    pub fn standard_normal() -> Self {
        Self { mean: 0.0, sd: 1.0 }
    }

    pub fn pdf(&self, x: f64) -> f64 {
        bootstat_core::normal::pdf_with(x, self.mean, self.sd)
    }

    pub fn cdf(&self, x: f64) -> f64 {
        bootstat_core::normal::cdf_with(x, self.mean, self.sd)
    }
}

/// Arithmetic mean
#[derive(Debug, Clone, Copy, Default)]
pub struct Mean;

impl Estimator for Mean {
    fn name(&self) -> &str {
        "mean"
    }

    fn calculate(&self, sample: &[f64]) -> Result<f64> {
        descriptive::mean(sample)
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Mean
    }
}

/// Sample median
#[derive(Debug, Clone, Copy, Default)]
pub struct Median;

impl Estimator for Median {
    fn name(&self) -> &str {
        "median"
    }

    fn calculate(&self, sample: &[f64]) -> Result<f64> {
        let sorted = descriptive::sorted(sample);
        descriptive::median(&sorted)
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Median
    }
}

/// Unbiased sample standard deviation
///
/// Samples with fewer than two elements have no spread and yield 0.0, so
/// the estimator stays defined on every resample and jackknife sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardDeviation;

impl Estimator for StandardDeviation {
    fn name(&self) -> &str {
        "sd"
    }

    fn calculate(&self, sample: &[f64]) -> Result<f64> {
        if sample.len() < 2 {
            return Ok(0.0);
        }
        let mean = descriptive::mean(sample)?;
        descriptive::sd(sample, mean, false)
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::StandardDeviation
    }
}

/// Estimator backed by a closure
///
/// # Example
/// ```rust
/// use bootstat_confidence::{Estimator, FnEstimator};
///
/// let range = FnEstimator::new("range", |s: &[f64]| {
///     let max = s.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
///     let min = s.iter().cloned().fold(f64::INFINITY, f64::min);
///     Ok(max - min)
/// });
/// assert_eq!(range.calculate(&[1.0, 4.0, 2.0]).unwrap(), 3.0);
/// ```
pub struct FnEstimator<F> {
    name: String,
    function: F,
}

impl<F> FnEstimator<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    pub fn new(name: impl Into<String>, function: F) -> Self {
        Self {
            name: name.into(),
            function,
        }
    }
}

impl<F> Estimator for FnEstimator<F>
where
    F: Fn(&[f64]) -> Result<f64> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn calculate(&self, sample: &[f64]) -> Result<f64> {
        (self.function)(sample)
    }
}

impl<F> fmt::Debug for FnEstimator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnEstimator").field("name", &self.name).finish()
    }
}
