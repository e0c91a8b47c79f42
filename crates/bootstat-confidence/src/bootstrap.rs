//! Bootstrap engine
//!
//! [`Bootstrap`] runs the whole pipeline inside its constructor: it draws
//! `n_resamples` resamples with replacement, evaluates every estimator on
//! each, sorts the scores, and derives one [`Estimate`] per estimator with
//! the configured interval method. The finished engine is read-only.
//!
//! Resamples are produced in blocks, each with its own random stream (see
//! [`crate::bootstrap_workspace`]). With the `parallel` feature the blocks
//! run on the rayon pool; the scores are identical either way.

use crate::bootstrap_workspace::{block_count, block_range, BootstrapWorkspace};
use crate::config::BootstrapConfig;
use crate::traits::Estimator;
use crate::types::Estimate;
use bootstat_core::{descriptive, Error, Result};
use rand::Rng;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Scores of one block, estimator-major
type BlockScores = Vec<Vec<f64>>;

/// Bootstrap confidence interval engine
///
/// # Example
/// ```rust
/// use bootstat_confidence::{Bootstrap, BootstrapConfig, Estimator, Mean, Median};
/// use std::sync::Arc;
///
/// let sample = [47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0];
/// let estimators: Vec<Arc<dyn Estimator>> = vec![Arc::new(Mean), Arc::new(Median)];
/// let config = BootstrapConfig::new().with_resamples(2000).with_seed(42);
///
/// let bootstrap = Bootstrap::with_config(&sample, estimators, &config).unwrap();
/// let mean = bootstrap.estimate("mean").unwrap();
///
/// assert_eq!(mean.point(), 51.0);
/// assert!(mean.lower() <= mean.upper());
/// ```
pub struct Bootstrap {
    sample: Arc<[f64]>,
    config: BootstrapConfig,
    seed: u64,
    estimators: Vec<Arc<dyn Estimator>>,
    scores: Vec<Vec<f64>>,
    estimates: Vec<Estimate>,
    index: HashMap<String, usize>,
}

impl Bootstrap {
    /// Run a bootstrap with the default configuration
    pub fn new(sample: &[f64], estimators: Vec<Arc<dyn Estimator>>) -> Result<Self> {
        Self::with_config(sample, estimators, &BootstrapConfig::default())
    }

    /// Run a bootstrap with an explicit configuration
    ///
    /// # Errors
    /// Returns an argument error for an empty or non-finite sample, an
    /// invalid configuration, an empty estimator set, or empty or duplicate
    /// estimator names. Returns [`Error::InvalidState`] if an estimator
    /// yields NaN on the sample or on a resample.
    #[instrument(
        skip(sample, estimators, config),
        fields(n = sample.len(), n_estimators = estimators.len(), n_resamples = config.n_resamples)
    )]
    pub fn with_config(
        sample: &[f64],
        estimators: Vec<Arc<dyn Estimator>>,
        config: &BootstrapConfig,
    ) -> Result<Self> {
        config.validate()?;
        if sample.is_empty() {
            return Err(Error::empty_input("bootstrap"));
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("Bootstrap sample"));
        }
        let index = index_estimators(&estimators)?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(seed, method = ?config.method, "starting bootstrap");

        let points = estimators
            .iter()
            .map(|estimator| {
                let point = estimator.calculate(sample)?;
                if point.is_nan() {
                    return Err(Error::InvalidState(format!(
                        "Estimator '{}' returned NaN on the sample",
                        estimator.name()
                    )));
                }
                Ok(point)
            })
            .collect::<Result<Vec<f64>>>()?;

        let scores = resample_scores(sample, &estimators, config.n_resamples, seed)?;

        let method = config.method.as_method();
        let estimates = estimators
            .iter()
            .zip(&scores)
            .zip(&points)
            .map(|((estimator, scores), &point)| {
                method.calculate_interval(
                    sample,
                    estimator.as_ref(),
                    scores,
                    point,
                    config.confidence_level,
                )
            })
            .collect::<Result<Vec<Estimate>>>()?;

        for (estimator, estimate) in estimators.iter().zip(&estimates) {
            debug!(estimator = estimator.name(), %estimate, "estimate");
        }

        Ok(Self {
            sample: Arc::from(sample),
            config: config.clone(),
            seed,
            estimators,
            scores,
            estimates,
            index,
        })
    }

    /// Estimate of the estimator called `name`
    pub fn estimate(&self, name: &str) -> Result<&Estimate> {
        self.position(name).map(|i| &self.estimates[i])
    }

    /// Estimate of `estimator`, looked up by its name
    pub fn estimate_for(&self, estimator: &dyn Estimator) -> Result<&Estimate> {
        self.estimate(estimator.name())
    }

    /// All estimates as `(name, estimate)` in construction order
    pub fn estimates(&self) -> impl Iterator<Item = (&str, &Estimate)> + '_ {
        self.estimators
            .iter()
            .map(|estimator| estimator.name())
            .zip(&self.estimates)
    }

    /// Sorted resample scores of the estimator called `name`
    pub fn scores(&self, name: &str) -> Result<&[f64]> {
        self.position(name).map(|i| self.scores[i].as_slice())
    }

    pub fn sample(&self) -> &[f64] {
        &self.sample
    }

    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// Effective seed, including one drawn from entropy
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn position(&self, name: &str) -> Result<usize> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownEstimator(name.to_string()))
    }
}

impl fmt::Debug for Bootstrap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bootstrap")
            .field("n", &self.sample.len())
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("estimates", &self.estimates().collect::<Vec<_>>())
            .finish()
    }
}

fn index_estimators(estimators: &[Arc<dyn Estimator>]) -> Result<HashMap<String, usize>> {
    if estimators.is_empty() {
        return Err(Error::InvalidArgument(
            "At least one estimator is required".to_string(),
        ));
    }
    let mut index = HashMap::with_capacity(estimators.len());
    for (i, estimator) in estimators.iter().enumerate() {
        let name = estimator.name();
        if name.is_empty() {
            return Err(Error::InvalidArgument(
                "Estimator names must not be empty".to_string(),
            ));
        }
        if index.insert(name.to_string(), i).is_some() {
            return Err(Error::InvalidArgument(format!(
                "Duplicate estimator name '{name}'"
            )));
        }
    }
    Ok(index)
}

/// Score every estimator on `n_resamples` resamples and sort the scores
fn resample_scores(
    sample: &[f64],
    estimators: &[Arc<dyn Estimator>],
    n_resamples: usize,
    seed: u64,
) -> Result<Vec<Vec<f64>>> {
    let blocks = block_count(n_resamples);
    let run = |block: usize| score_block(sample, estimators, block, n_resamples, seed);

    #[cfg(feature = "parallel")]
    let block_scores = (0..blocks)
        .into_par_iter()
        .map(run)
        .collect::<Result<Vec<BlockScores>>>()?;

    #[cfg(not(feature = "parallel"))]
    let block_scores = (0..blocks).map(run).collect::<Result<Vec<BlockScores>>>()?;

    let mut scores: Vec<Vec<f64>> = (0..estimators.len())
        .map(|_| Vec::with_capacity(n_resamples))
        .collect();
    for block in block_scores {
        for (all, part) in scores.iter_mut().zip(block) {
            all.extend(part);
        }
    }

    for (estimator, scores) in estimators.iter().zip(scores.iter_mut()) {
        if scores.iter().any(|s| s.is_nan()) {
            return Err(Error::InvalidState(format!(
                "Estimator '{}' returned NaN on a resample",
                estimator.name()
            )));
        }
        descriptive::sort_in_place(scores);
    }
    Ok(scores)
}

fn score_block(
    sample: &[f64],
    estimators: &[Arc<dyn Estimator>],
    block: usize,
    n_resamples: usize,
    seed: u64,
) -> Result<BlockScores> {
    let range = block_range(block, n_resamples);
    let mut workspace = BootstrapWorkspace::for_block(seed, block, sample.len());
    let mut scores: BlockScores = (0..estimators.len())
        .map(|_| Vec::with_capacity(range.len()))
        .collect();

    for _ in range.clone() {
        let resample = workspace.resample(sample);
        for (estimator, scores) in estimators.iter().zip(scores.iter_mut()) {
            scores.push(estimator.calculate(resample)?);
        }
    }

    trace!(block, start = range.start, end = range.end, "block scored");
    Ok(scores)
}
