//! Bootstrap method implementations
//!
//! Both methods read percentile positions from the sorted resample scores.
//! The percentile method uses the nominal tail probabilities directly; BCa
//! shifts them for median bias and for skew measured by the jackknife.

use crate::traits::{BootstrapMethod, Estimator};
use crate::types::Estimate;
use bootstat_core::{descriptive, normal, Error, Result};
use num_traits::ToPrimitive;
use tracing::{debug, instrument, warn};

/// Index of the score at `probability`, clamped to `[0, n - 1]`
fn score_index(probability: f64, n: usize) -> usize {
    let last = n - 1;
    let raw = (probability * n as f64).round();
    if raw.is_nan() || raw <= 0.0 {
        return 0;
    }
    match raw.to_usize() {
        Some(idx) if idx <= last => idx,
        _ => {
            debug!(probability, raw, last, "score index clamped");
            last
        }
    }
}

fn interval(point: f64, lower: f64, upper: f64, confidence_level: f64) -> Result<Estimate> {
    Estimate::new(point, lower, upper, confidence_level)
        .map_err(|e| Error::InvalidState(format!("Bootstrap produced an invalid estimate: {e}")))
}

fn check_scores(scores: &[f64]) -> Result<()> {
    if scores.is_empty() {
        return Err(Error::InvalidState("No resample scores".to_string()));
    }
    Ok(())
}

/// Percentile bootstrap method
///
/// Uses the empirical percentiles of the bootstrap distribution directly.
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentileBootstrap;

impl BootstrapMethod for PercentileBootstrap {
    fn calculate_interval(
        &self,
        _sample: &[f64],
        _estimator: &dyn Estimator,
        scores: &[f64],
        point: f64,
        confidence_level: f64,
    ) -> Result<Estimate> {
        check_scores(scores)?;

        let alpha = (1.0 - confidence_level) / 2.0;
        let lower_idx = score_index(alpha, scores.len());
        let upper_idx = score_index(1.0 - alpha, scores.len());

        interval(point, scores[lower_idx], scores[upper_idx], confidence_level)
    }

    fn name(&self) -> &'static str {
        "Percentile Bootstrap"
    }
}

/// Correction terms of a BCa interval
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BcaParameters {
    /// Bias correction `b`, possibly infinite
    pub bias: f64,
    /// Jackknife acceleration `a`
    pub acceleration: f64,
    /// Adjusted probability of the lower bound
    pub lower_probability: f64,
    /// Adjusted probability of the upper bound
    pub upper_probability: f64,
}

/// BCa (bias-corrected and accelerated) bootstrap method
///
/// Corrects the percentile interval for median bias of the resample
/// scores and for the rate at which the standard error changes with the
/// parameter, estimated from leave-one-out jackknife samples.
///
/// Intervals from heavy-tailed or strongly skewed samples can cover less
/// often than the nominal level. This is a property of the method.
#[derive(Debug, Clone, Copy, Default)]
pub struct BCaBootstrap;

impl BCaBootstrap {
    /// Compute bias, acceleration, and adjusted probabilities
    ///
    /// Returns `Ok(None)` when the BCa adjustment is undefined: a sample of
    /// one element, jackknife estimates without spread, or an acceleration
    /// large enough to push the adjusted percentiles past their pole.
    pub fn parameters(
        &self,
        sample: &[f64],
        estimator: &dyn Estimator,
        scores: &[f64],
        point: f64,
        confidence_level: f64,
    ) -> Result<Option<BcaParameters>> {
        check_scores(scores)?;
        if sample.len() < 2 {
            return Ok(None);
        }

        let alpha = 1.0 - confidence_level;
        let z1 = normal::quantile(alpha / 2.0);
        let z2 = -z1;

        let count_less = scores.partition_point(|&score| score < point);
        let bias = normal::quantile(count_less as f64 / scores.len() as f64);

        let Some(acceleration) = jackknife_acceleration(&jackknife(estimator, sample)?)? else {
            warn!(
                estimator = estimator.name(),
                "jackknife estimates have no spread, falling back to percentile interval"
            );
            return Ok(None);
        };

        let (Some(lower_probability), Some(upper_probability)) = (
            adjusted_probability(bias, z1, acceleration),
            adjusted_probability(bias, z2, acceleration),
        ) else {
            warn!(
                estimator = estimator.name(),
                bias,
                acceleration,
                "BCa adjustment undefined, falling back to percentile interval"
            );
            return Ok(None);
        };

        debug!(bias, acceleration, lower_probability, upper_probability, "BCa parameters");

        Ok(Some(BcaParameters {
            bias,
            acceleration,
            lower_probability,
            upper_probability,
        }))
    }
}

impl BootstrapMethod for BCaBootstrap {
    #[instrument(
        skip(self, sample, estimator, scores),
        fields(estimator = estimator.name(), n = sample.len(), n_resamples = scores.len())
    )]
    fn calculate_interval(
        &self,
        sample: &[f64],
        estimator: &dyn Estimator,
        scores: &[f64],
        point: f64,
        confidence_level: f64,
    ) -> Result<Estimate> {
        if sample.len() == 1 {
            return interval(point, point, point, confidence_level);
        }

        let Some(params) = self.parameters(sample, estimator, scores, point, confidence_level)?
        else {
            return PercentileBootstrap.calculate_interval(
                sample,
                estimator,
                scores,
                point,
                confidence_level,
            );
        };

        let lower_idx = score_index(params.lower_probability, scores.len());
        let upper_idx = score_index(params.upper_probability, scores.len());
        debug!(lower_idx, upper_idx, "BCa indices");

        interval(point, scores[lower_idx], scores[upper_idx], confidence_level)
    }

    fn name(&self) -> &'static str {
        "BCa Bootstrap"
    }
}

/// `Φ(b + (b + z) / (1 - a(b + z)))`
///
/// An infinite bias collapses the probability to 0 or 1. `None` means the
/// denominator is not positive, where the mapping stops being monotone.
fn adjusted_probability(bias: f64, z: f64, acceleration: f64) -> Option<f64> {
    if bias.is_infinite() {
        return Some(if bias < 0.0 { 0.0 } else { 1.0 });
    }
    let shifted = bias + z;
    let denominator = 1.0 - acceleration * shifted;
    if denominator > 0.0 {
        Some(normal::cdf(bias + shifted / denominator))
    } else {
        None
    }
}

/// `Σd³ / (6 (Σd²)^1.5)` with `d = mean - estimate`, `None` if `Σd² = 0`
fn jackknife_acceleration(jackknife_estimates: &[f64]) -> Result<Option<f64>> {
    let jk_mean = descriptive::mean(jackknife_estimates)?;
    let (sum2, sum3) = jackknife_estimates
        .iter()
        .fold((0.0, 0.0), |(sum2, sum3), &estimate| {
            let d = jk_mean - estimate;
            (sum2 + d * d, sum3 + d * d * d)
        });

    if sum2 == 0.0 {
        return Ok(None);
    }
    Ok(Some(sum3 / (6.0 * sum2.powf(1.5))))
}

/// Leave-one-out estimates of `estimator` over `sample`
///
/// Element `i` of the result is the estimator applied to `sample` without
/// its `i`-th element.
///
/// # Errors
/// Returns an error for samples with fewer than two elements, and when any
/// jackknife estimate is not finite
pub fn jackknife(estimator: &dyn Estimator, sample: &[f64]) -> Result<Vec<f64>> {
    let n = sample.len();
    if n < 2 {
        return Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        });
    }

    let mut buffer = Vec::with_capacity(n - 1);
    let mut estimates = Vec::with_capacity(n);
    for i in 0..n {
        buffer.clear();
        buffer.extend_from_slice(&sample[..i]);
        buffer.extend_from_slice(&sample[i + 1..]);

        let estimate = estimator.calculate(&buffer)?;
        if !estimate.is_finite() {
            return Err(Error::InvalidState(format!(
                "Jackknife estimate {i} of '{}' is not finite",
                estimator.name()
            )));
        }
        estimates.push(estimate);
    }
    Ok(estimates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimators::{Mean, Median};
    use approx::assert_relative_eq;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| i as f64).collect()
    }

    #[test]
    fn test_score_index_rounds_and_clamps() {
        assert_eq!(score_index(0.025, 1000), 25);
        assert_eq!(score_index(0.0256, 1000), 26);
        assert_eq!(score_index(0.975, 1000), 975);
        assert_eq!(score_index(1.0, 1000), 999);
        assert_eq!(score_index(0.0, 1000), 0);
        assert_eq!(score_index(-0.1, 1000), 0);
        assert_eq!(score_index(f64::NAN, 1000), 0);
        assert_eq!(score_index(0.5, 1), 0);
    }

    #[test]
    fn test_percentile_interval() {
        let scores = ramp(1000);
        let sample = [1.0, 2.0, 3.0];

        let estimate = PercentileBootstrap
            .calculate_interval(&sample, &Mean, &scores, 2.0, 0.9)
            .unwrap();
        assert_eq!(estimate.point(), 2.0);
        assert_eq!(estimate.lower(), 50.0);
        assert_eq!(estimate.upper(), 950.0);

        let estimate = PercentileBootstrap
            .calculate_interval(&sample, &Mean, &scores, 2.0, 0.95)
            .unwrap();
        assert_eq!(estimate.lower(), 25.0);
        assert_eq!(estimate.upper(), 975.0);
    }

    #[test]
    fn test_percentile_extreme_level_clamps() {
        let scores = ramp(10);
        let estimate = PercentileBootstrap
            .calculate_interval(&[1.0, 2.0], &Mean, &scores, 5.0, 0.999)
            .unwrap();
        assert_eq!(estimate.lower(), 0.0);
        assert_eq!(estimate.upper(), 9.0);
    }

    #[test]
    fn test_jackknife_leaves_one_out() {
        let estimates = jackknife(&Mean, &[1.0, 2.0, 3.0, 6.0]).unwrap();
        assert_eq!(estimates.len(), 4);
        assert_relative_eq!(estimates[0], 11.0 / 3.0, epsilon = 1e-12);
        assert_relative_eq!(estimates[3], 2.0, epsilon = 1e-12);

        assert!(matches!(
            jackknife(&Mean, &[1.0]),
            Err(Error::InsufficientData { expected: 2, actual: 1 })
        ));
    }

    #[test]
    fn test_acceleration_of_mean_matches_sample_skewness() {
        let sample = [1.0, 2.0, 10.0];
        let m = 13.0 / 3.0;
        let d: Vec<f64> = sample.iter().map(|x| x - m).collect();
        let expected = d.iter().map(|v| v.powi(3)).sum::<f64>()
            / (6.0 * d.iter().map(|v| v * v).sum::<f64>().powf(1.5));

        let a = jackknife_acceleration(&jackknife(&Mean, &sample).unwrap())
            .unwrap()
            .unwrap();
        assert_relative_eq!(a, expected, epsilon = 1e-12);
        assert!(a > 0.0);

        let symmetric = jackknife_acceleration(&jackknife(&Mean, &[1.0, 2.0, 3.0]).unwrap())
            .unwrap()
            .unwrap();
        assert_relative_eq!(symmetric, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_acceleration_without_spread() {
        assert_eq!(jackknife_acceleration(&[2.0, 2.0, 2.0]).unwrap(), None);
    }

    #[test]
    fn test_bca_reduces_to_percentile_without_bias_and_skew() {
        // symmetric sample, point at the exact middle of the scores
        let sample = [1.0, 2.0, 3.0, 4.0, 5.0];
        let scores = ramp(1001);
        let point = 500.0;

        let params = BCaBootstrap
            .parameters(&sample, &Mean, &scores, point, 0.95)
            .unwrap()
            .unwrap();
        assert_relative_eq!(params.acceleration, 0.0, epsilon = 1e-15);
        assert_relative_eq!(params.bias, normal::quantile(500.0 / 1001.0), epsilon = 1e-15);

        let bca = BCaBootstrap
            .calculate_interval(&sample, &Mean, &scores, point, 0.95)
            .unwrap();
        let percentile = PercentileBootstrap
            .calculate_interval(&sample, &Mean, &scores, point, 0.95)
            .unwrap();
        assert!((bca.lower() - percentile.lower()).abs() <= 1.0);
        assert!((bca.upper() - percentile.upper()).abs() <= 1.0);
    }

    #[test]
    fn test_bca_single_element_is_degenerate() {
        let estimate = BCaBootstrap
            .calculate_interval(&[5.0], &Mean, &[5.0; 16], 5.0, 0.95)
            .unwrap();
        assert_eq!(
            (estimate.point(), estimate.lower(), estimate.upper()),
            (5.0, 5.0, 5.0)
        );
    }

    #[test]
    fn test_bca_infinite_bias_stays_finite() {
        let sample = [1.0, 2.0, 4.0, 8.0];
        let scores: Vec<f64> = (0..100).map(|i| 10.0 + i as f64).collect();

        // every score above the point: b = -inf
        let below = BCaBootstrap
            .parameters(&sample, &Median, &scores, 0.0, 0.95)
            .unwrap()
            .unwrap();
        assert_eq!(below.bias, f64::NEG_INFINITY);
        assert_eq!(below.lower_probability, 0.0);
        assert_eq!(below.upper_probability, 0.0);

        let estimate = BCaBootstrap
            .calculate_interval(&sample, &Median, &scores, 0.0, 0.95)
            .unwrap();
        assert_eq!((estimate.lower(), estimate.upper()), (10.0, 10.0));

        // every score below the point: b = +inf
        let estimate = BCaBootstrap
            .calculate_interval(&sample, &Median, &scores, 1000.0, 0.95)
            .unwrap();
        assert_eq!((estimate.lower(), estimate.upper()), (109.0, 109.0));
        assert!(estimate.lower().is_finite() && estimate.upper().is_finite());
    }

    #[test]
    fn test_bca_falls_back_without_jackknife_spread() {
        let sample = [3.0, 3.0, 3.0];
        let scores = ramp(100);

        assert_eq!(
            BCaBootstrap
                .parameters(&sample, &Mean, &scores, 50.0, 0.9)
                .unwrap(),
            None
        );

        let bca = BCaBootstrap
            .calculate_interval(&sample, &Mean, &scores, 50.0, 0.9)
            .unwrap();
        let percentile = PercentileBootstrap
            .calculate_interval(&sample, &Mean, &scores, 50.0, 0.9)
            .unwrap();
        assert_eq!(bca, percentile);
    }

    #[test]
    fn test_bca_falls_back_past_acceleration_pole() {
        // a single outlier drives the acceleration towards its bound of 1/6
        let mut sample = vec![0.0; 199];
        sample.push(1000.0);
        let a = jackknife_acceleration(&jackknife(&Mean, &sample).unwrap())
            .unwrap()
            .unwrap();
        assert!(a > 0.16, "acceleration {a}");

        // one score at or above the point: b = quantile(1 - 1e-5) and
        // 1 - a(b + z2) < 0 at the 99.9% level
        let scores = ramp(100_000);
        let point = 99_998.5;

        assert_eq!(
            BCaBootstrap
                .parameters(&sample, &Mean, &scores, point, 0.999)
                .unwrap(),
            None
        );

        let bca = BCaBootstrap
            .calculate_interval(&sample, &Mean, &scores, point, 0.999)
            .unwrap();
        let percentile = PercentileBootstrap
            .calculate_interval(&sample, &Mean, &scores, point, 0.999)
            .unwrap();
        assert_eq!(bca, percentile);
        assert!(bca.lower() <= bca.upper());
    }

    #[test]
    fn test_adjusted_probability() {
        assert_eq!(adjusted_probability(f64::NEG_INFINITY, -1.96, 0.3), Some(0.0));
        assert_eq!(adjusted_probability(f64::INFINITY, 1.96, 0.3), Some(1.0));
        assert_relative_eq!(
            adjusted_probability(0.0, -1.96, 0.0).unwrap(),
            normal::cdf(-1.96),
            epsilon = 1e-15
        );
        // 1 - a(b + z) <= 0
        assert_eq!(adjusted_probability(0.0, 1.96, 1.0), None);
    }
}
