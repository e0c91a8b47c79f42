//! Descriptive statistics over slices of `f64`
//!
//! These are the numeric primitives the bootstrap engine and its built-in
//! estimators are built on. Every function validates its input eagerly and
//! reports malformed arguments through [`Error`]; nothing here silently
//! returns a sentinel for bad input.

use crate::{Error, Result};
use std::cmp::Ordering;

fn check_finite(sample: &[f64], context: &str) -> Result<()> {
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite(context));
    }
    Ok(())
}

/// Whether `sample` is sorted in ascending order
pub fn is_sorted(sample: &[f64]) -> bool {
    sample.windows(2).all(|w| w[0] <= w[1])
}

/// Sort data and return a new vector
///
/// NaN values, if any, are placed at the end.
///
/// ```rust
/// use bootstat_core::descriptive::sorted;
///
/// assert_eq!(sorted(&[3.0, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
/// ```
pub fn sorted(sample: &[f64]) -> Vec<f64> {
    let mut sorted = sample.to_vec();
    sort_in_place(&mut sorted);
    sorted
}

/// Sort ascending in place, NaN last
pub fn sort_in_place(data: &mut [f64]) {
    data.sort_unstable_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}

/// Smallest and largest element of a non-empty finite sample
pub fn min_max(sample: &[f64]) -> Result<(f64, f64)> {
    if sample.is_empty() {
        return Err(Error::empty_input("min_max"));
    }
    check_finite(sample, "sample")?;
    Ok(sample
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
            (lo.min(x), hi.max(x))
        }))
}

/// Arithmetic mean
///
/// Accumulates deviations from the first element, so a constant sequence
/// yields that constant exactly. If those deviations overflow, the values
/// are scaled by `1/n` before summing instead.
///
/// ```rust
/// use bootstat_core::descriptive::mean;
///
/// let m = mean(&[47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0]).unwrap();
/// assert_eq!(m, 51.0);
/// ```
pub fn mean(sample: &[f64]) -> Result<f64> {
    let first = match sample.first() {
        Some(&x) => x,
        None => return Err(Error::empty_input("mean")),
    };
    check_finite(sample, "sample")?;

    let n = sample.len() as f64;
    let shift: f64 = sample.iter().map(|&x| x - first).sum();
    let shifted = first + shift / n;
    if shifted.is_finite() {
        return Ok(shifted);
    }
    Ok(sample.iter().map(|&x| x / n).sum())
}

/// Sum of squares total around `mean`
///
/// Uses the compensated form `Σd² - (Σd)²/n` with `d = x - mean`, which
/// cancels the error carried in an inexact `mean`.
pub fn sst(sample: &[f64], mean: f64) -> Result<f64> {
    if sample.is_empty() {
        return Err(Error::empty_input("sst"));
    }
    if !mean.is_finite() {
        return Err(Error::non_finite("mean"));
    }
    check_finite(sample, "sample")?;

    let (squares, deviations) = sample.iter().fold((0.0, 0.0), |(sq, dev), &x| {
        let d = x - mean;
        (sq + d * d, dev + d)
    });
    let result = squares - deviations * deviations / sample.len() as f64;

    if result >= 0.0 {
        Ok(result)
    } else if -result <= squares * 4.0 * f64::EPSILON {
        // rounding noise around an exact zero
        Ok(0.0)
    } else {
        Err(Error::InvalidState(format!(
            "sum of squares is negative ({result})"
        )))
    }
}

/// Variance around `mean`
///
/// `biased` divides by `n` (lower mean-squared error, the preferred
/// default); the unbiased form divides by `n - 1` and needs two or more
/// observations.
pub fn variance(sample: &[f64], mean: f64, biased: bool) -> Result<f64> {
    let sst = sst(sample, mean)?;
    let n = sample.len();
    if biased {
        Ok(sst / n as f64)
    } else if n < 2 {
        Err(Error::InsufficientData {
            expected: 2,
            actual: n,
        })
    } else {
        Ok(sst / (n - 1) as f64)
    }
}

/// Standard deviation around `mean`, see [`variance`]
pub fn sd(sample: &[f64], mean: f64, biased: bool) -> Result<f64> {
    variance(sample, mean, biased).map(f64::sqrt)
}

/// The `k`/`q`-quantile of an ascending-sorted sample
///
/// Linearly interpolates between the order statistics around position
/// `(n - 1) * k / q`. The input is not sorted here; passing unsorted data
/// is an error.
///
/// ```rust
/// use bootstat_core::descriptive::quantile;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&data, 1, 2).unwrap(), 2.5);
/// assert_eq!(quantile(&data, 1, 4).unwrap(), 1.75);
/// ```
pub fn quantile(sorted_sample: &[f64], k: usize, q: usize) -> Result<f64> {
    if k < 1 {
        return Err(Error::InvalidArgument(format!("k = {k} must be at least 1")));
    }
    if q < 2 {
        return Err(Error::InvalidArgument(format!("q = {q} must be at least 2")));
    }
    if k >= q {
        return Err(Error::InvalidArgument(format!(
            "k = {k} must be smaller than q = {q}"
        )));
    }
    let n = sorted_sample.len();
    if n == 0 {
        return Err(Error::empty_input("quantile"));
    }
    check_finite(sorted_sample, "sample")?;
    if n == 1 {
        return Ok(sorted_sample[0]);
    }
    if !is_sorted(sorted_sample) {
        return Err(Error::unsorted("quantile input"));
    }

    let position = (n - 1) as f64 * k as f64 / q as f64;
    let lower = position.floor() as usize;
    let fraction = position - lower as f64;
    let lo = sorted_sample[lower];
    if lower + 1 >= n || fraction == 0.0 {
        return Ok(lo);
    }
    let hi = sorted_sample[lower + 1];
    Ok(lo + fraction * (hi - lo))
}

/// Median of an ascending-sorted sample, identical to `quantile(sorted, 1, 2)`
pub fn median(sorted_sample: &[f64]) -> Result<f64> {
    quantile(sorted_sample, 1, 2)
}

/// Lag-`lag` sample autocorrelation
///
/// `Σ (x[i] - m)(x[i + lag] - m) / sst` over `i < n - lag`. A constant
/// series has no variation to correlate and yields `0.0`.
pub fn autocorrelation(sample: &[f64], lag: usize) -> Result<f64> {
    let n = sample.len();
    if lag >= n {
        return Err(Error::InsufficientData {
            expected: lag + 1,
            actual: n,
        });
    }
    let m = mean(sample)?;
    let total = sst(sample, m)?;
    if total == 0.0 {
        return Ok(0.0);
    }
    let cross: f64 = sample
        .iter()
        .zip(&sample[lag..])
        .map(|(&a, &b)| (a - m) * (b - m))
        .sum();
    Ok(cross / total)
}
