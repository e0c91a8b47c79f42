//! Comparing binned samples against theoretical distributions

use crate::types::Bins;
use bootstat_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Empirical and theoretical density at one interval midpoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DensityPoint {
    /// Interval midpoint
    pub x: f64,
    /// Normalized empirical density of the interval
    pub empirical: f64,
    /// Theoretical density at the midpoint
    pub theoretical: f64,
}

/// Pearson chi-squared goodness-of-fit result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoodnessOfFit {
    /// Chi-squared statistic
    pub statistic: f64,
    /// Degrees of freedom
    pub degrees_of_freedom: usize,
    /// Upper-tail probability of the statistic
    pub p_value: f64,
}

impl GoodnessOfFit {
    /// Whether the fit is rejected at significance level `alpha`
    pub fn rejects(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Operations that compare binned samples with a theoretical distribution
pub trait HistogramOps {
    /// Pair each interval's empirical density with `pdf` at its midpoint
    fn overlay<F>(&self, pdf: F) -> Vec<DensityPoint>
    where
        F: Fn(f64) -> f64;

    /// Pearson chi-squared test of the counts against `cdf`
    ///
    /// The first and last intervals absorb the tails beyond the range.
    /// `estimated_parameters` is the number of distribution parameters
    /// fitted from the same sample, each costing one degree of freedom.
    fn goodness_of_fit<F>(&self, cdf: F, estimated_parameters: usize) -> Result<GoodnessOfFit>
    where
        F: Fn(f64) -> f64;
}

impl HistogramOps for Bins {
    fn overlay<F>(&self, pdf: F) -> Vec<DensityPoint>
    where
        F: Fn(f64) -> f64,
    {
        self.intervals()
            .iter()
            .map(|interval| {
                let x = interval.midpoint();
                DensityPoint {
                    x,
                    empirical: interval.density,
                    theoretical: pdf(x),
                }
            })
            .collect()
    }

    fn goodness_of_fit<F>(&self, cdf: F, estimated_parameters: usize) -> Result<GoodnessOfFit>
    where
        F: Fn(f64) -> f64,
    {
        let number = self.number();
        let needed = estimated_parameters + 2;
        if number < needed {
            return Err(Error::InsufficientData {
                expected: needed,
                actual: number,
            });
        }
        let degrees_of_freedom = number - 1 - estimated_parameters;

        let total = self.total() as f64;
        let last = number - 1;
        let mut statistic = 0.0;
        for (i, interval) in self.intervals().iter().enumerate() {
            let upper = if i == last { 1.0 } else { cdf(interval.right) };
            let lower = if i == 0 { 0.0 } else { cdf(interval.left) };
            let expected = total * (upper - lower);
            let observed = interval.count as f64;

            if expected > 0.0 {
                statistic += (observed - expected).powi(2) / expected;
            } else if observed > 0.0 {
                statistic = f64::INFINITY;
            }
        }

        let p_value = upper_tail(statistic, degrees_of_freedom)?;

        tracing::debug!(statistic, degrees_of_freedom, p_value, "goodness of fit");

        Ok(GoodnessOfFit {
            statistic,
            degrees_of_freedom,
            p_value,
        })
    }
}

/// Upper-tail probability of a chi-squared `statistic`
fn upper_tail(statistic: f64, degrees_of_freedom: usize) -> Result<f64> {
    if !statistic.is_finite() {
        return Ok(0.0);
    }
    let distribution = ChiSquared::new(degrees_of_freedom as f64).map_err(|e| {
        Error::Computation(format!("Failed to create chi-squared distribution: {e}"))
    })?;
    Ok(distribution.sf(statistic))
}
