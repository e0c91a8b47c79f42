//! Common types for bootstrap estimates

use bootstat_core::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Point estimate with a confidence interval
///
/// Either both bounds are NaN (no interval) or `lower <= upper`. The
/// confidence level is always strictly between 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    point: f64,
    lower: f64,
    upper: f64,
    confidence_level: f64,
}

impl Estimate {
    /// Create a validated estimate
    ///
    /// # Errors
    /// Returns an error if exactly one bound is NaN, if `lower > upper`, or
    /// if `confidence_level` is outside (0, 1)
    pub fn new(point: f64, lower: f64, upper: f64, confidence_level: f64) -> Result<Self> {
        ConfidenceLevel::new(confidence_level)?;
        match (lower.is_nan(), upper.is_nan()) {
            (true, true) => {}
            (false, false) => {
                if lower > upper {
                    return Err(Error::InvalidArgument(format!(
                        "Lower bound {lower} exceeds upper bound {upper}"
                    )));
                }
            }
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "Bounds must both be defined or both undefined, got [{lower}, {upper}]"
                )));
            }
        }
        Ok(Self {
            point,
            lower,
            upper,
            confidence_level,
        })
    }

    /// Zero-width estimate `{point, point, point}`
    pub fn degenerate(point: f64, confidence_level: f64) -> Result<Self> {
        Self::new(point, point, point, confidence_level)
    }

    /// Point estimate without an interval
    pub fn without_interval(point: f64, confidence_level: f64) -> Result<Self> {
        Self::new(point, f64::NAN, f64::NAN, confidence_level)
    }

    pub fn point(&self) -> f64 {
        self.point
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Whether both bounds are defined
    pub fn has_interval(&self) -> bool {
        !self.lower.is_nan()
    }

    /// Width of the interval (NaN without an interval)
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value lies inside the closed interval
    pub fn contains(&self, value: f64) -> bool {
        self.has_interval() && value >= self.lower && value <= self.upper
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.has_interval() {
            write!(
                f,
                "{} [{}, {}] ({:.1}% CI)",
                self.point,
                self.lower,
                self.upper,
                self.confidence_level * 100.0
            )
        } else {
            write!(f, "{} (no interval)", self.point)
        }
    }
}

/// Confidence level type with validation
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Create a new confidence level
    ///
    /// # Errors
    /// Returns an error if `level` is not in (0, 1)
    pub fn new(level: f64) -> Result<Self> {
        if level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(Error::invalid_confidence_level(level))
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }

    pub const NINETY: Self = Self(0.90);
    pub const NINETY_FIVE: Self = Self(0.95);
    pub const NINETY_NINE: Self = Self(0.99);
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = Error;

    fn try_from(level: f64) -> Result<Self> {
        Self::new(level)
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}
