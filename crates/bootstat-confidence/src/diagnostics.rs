//! Coverage diagnostics
//!
//! A coverage study draws many samples from a known normal population,
//! bootstraps each one, and counts how often an estimator's interval
//! contains the population value of its statistic. For a well-behaved
//! method the rate approaches the confidence level.

use crate::bootstrap::Bootstrap;
use crate::config::BootstrapConfig;
use crate::estimators::Population;
use crate::traits::Estimator;
use bootstat_core::{Error, Result};
use bootstat_histogram::Bins;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Coverage of one estimator across all trials
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageEntry {
    pub name: String,
    /// Population value the intervals are checked against
    pub theoretical: f64,
    /// Trials whose interval contained `theoretical`
    pub covered: usize,
    pub trials: usize,
    /// Point estimate of every trial
    pub points: Vec<f64>,
}

impl CoverageEntry {
    /// Fraction of trials whose interval covered the population value
    pub fn rate(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.covered as f64 / self.trials as f64
    }
}

/// Result of [`coverage_study`]
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    pub population: Population,
    pub sample_size: usize,
    pub confidence_level: f64,
    entries: Vec<CoverageEntry>,
}

impl CoverageReport {
    /// Per-estimator results in estimator order
    pub fn entries(&self) -> &[CoverageEntry] {
        &self.entries
    }

    /// Result for the estimator called `name`
    pub fn entry(&self, name: &str) -> Result<&CoverageEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| Error::UnknownEstimator(name.to_string()))
    }

    /// Histogram of the point estimates of `name` over `number` intervals
    pub fn point_histogram(&self, name: &str, number: usize) -> Result<Bins> {
        Bins::from_count(&self.entry(name)?.points, number)
    }
}

/// Measure how often bootstrap intervals cover the population value
///
/// Estimators whose [`kind`](Estimator::kind) has no theoretical value for
/// a normal population are skipped. Each trial draws `sample_size` values
/// and runs a [`Bootstrap`] with `config`, whose seed is replaced by one
/// derived from `seed`, so the whole study is reproducible.
///
/// # Errors
/// Returns an error if `trials` is zero, if no estimator has a theoretical
/// value, or if any bootstrap run fails
#[instrument(
    skip(config, estimators),
    fields(n_resamples = config.n_resamples, n_estimators = estimators.len())
)]
pub fn coverage_study(
    population: &Population,
    sample_size: usize,
    trials: usize,
    config: &BootstrapConfig,
    estimators: &[Arc<dyn Estimator>],
    seed: u64,
) -> Result<CoverageReport> {
    if trials == 0 {
        return Err(Error::InvalidArgument(
            "Coverage study needs at least one trial".to_string(),
        ));
    }
    config.validate()?;

    let checked: Vec<(Arc<dyn Estimator>, f64)> = estimators
        .iter()
        .filter_map(|estimator| {
            estimator
                .kind()
                .theoretical_value(population)
                .map(|value| (Arc::clone(estimator), value))
        })
        .collect();
    if checked.is_empty() {
        return Err(Error::InvalidArgument(
            "No estimator has a theoretical value for the population".to_string(),
        ));
    }

    let distribution = Normal::new(population.mean, population.sd)
        .map_err(|e| Error::Computation(format!("Failed to create normal distribution: {e}")))?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut entries: Vec<CoverageEntry> = checked
        .iter()
        .map(|(estimator, theoretical)| CoverageEntry {
            name: estimator.name().to_string(),
            theoretical: *theoretical,
            covered: 0,
            trials,
            points: Vec::with_capacity(trials),
        })
        .collect();
    let run_estimators: Vec<Arc<dyn Estimator>> =
        checked.iter().map(|(estimator, _)| Arc::clone(estimator)).collect();

    let mut sample = vec![0.0; sample_size];
    for trial in 0..trials {
        for value in sample.iter_mut() {
            *value = distribution.sample(&mut rng);
        }
        let trial_config = config.clone().with_seed(rng.gen());
        let bootstrap = Bootstrap::with_config(&sample, run_estimators.clone(), &trial_config)?;

        for (entry, (_, estimate)) in entries.iter_mut().zip(bootstrap.estimates()) {
            if estimate.contains(entry.theoretical) {
                entry.covered += 1;
            }
            entry.points.push(estimate.point());
        }
        debug!(trial, "coverage trial finished");
    }

    for entry in &entries {
        info!(
            estimator = %entry.name,
            covered = entry.covered,
            trials = entry.trials,
            rate = entry.rate(),
            "coverage"
        );
    }

    Ok(CoverageReport {
        population: *population,
        sample_size,
        confidence_level: config.confidence_level,
        entries,
    })
}
