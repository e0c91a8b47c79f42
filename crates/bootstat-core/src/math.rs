//! Mathematical utilities shared across bootstat
//!
//! Thin wrappers over `statrs` special functions with the edge-case
//! behaviour the bootstrap interval code relies on.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Standard normal distribution utilities
    pub mod normal {
        use statrs::function::erf::{erfc, erfc_inv};
        use std::f64::consts::{PI, SQRT_2};

        /// Cumulative distribution function of the standard normal distribution
        ///
        /// `cdf(-inf) == 0`, `cdf(inf) == 1`; NaN propagates.
        pub fn cdf(x: f64) -> f64 {
            if x.is_nan() {
                return f64::NAN;
            }
            if x == f64::NEG_INFINITY {
                return 0.0;
            }
            if x == f64::INFINITY {
                return 1.0;
            }
            0.5 * erfc(-x / SQRT_2)
        }

        /// Inverse cumulative distribution function (quantile function)
        ///
        /// Saturates to `-inf` for `p <= 0` and `inf` for `p >= 1`.
        pub fn quantile(p: f64) -> f64 {
            if p.is_nan() {
                return f64::NAN;
            }
            if p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            if p >= 1.0 {
                return f64::INFINITY;
            }
            -SQRT_2 * erfc_inv(2.0 * p)
        }

        /// Alias for `quantile` (percent point function)
        #[inline]
        pub fn ppf(p: f64) -> f64 {
            quantile(p)
        }

        /// Probability density function of the standard normal distribution
        pub fn pdf(x: f64) -> f64 {
            (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
        }

        /// Density of a normal distribution with the given mean and standard deviation
        pub fn pdf_with(x: f64, mean: f64, sd: f64) -> f64 {
            pdf((x - mean) / sd) / sd
        }

        /// CDF of a normal distribution with the given mean and standard deviation
        pub fn cdf_with(x: f64, mean: f64, sd: f64) -> f64 {
            cdf((x - mean) / sd)
        }

    }
}
