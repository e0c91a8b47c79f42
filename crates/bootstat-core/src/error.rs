//! Error types for bootstrap statistics
//!
//! Provides a unified error type for all bootstat crates.

use thiserror::Error;

/// Core error type for bootstat operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Malformed argument supplied by the caller
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Too few observations for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Query for an estimator that was not part of the bootstrap run
    #[error("Unknown estimator: {0}")]
    UnknownEstimator(String),

    /// Internal invariant violation
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Failure reported by an underlying numeric library
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        tracing::trace!(operation, "empty input rejected");
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidArgument(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for input that must be sorted ascending
    pub fn unsorted(context: &str) -> Self {
        Self::InvalidArgument(format!("{context} must be sorted in ascending order"))
    }

    /// Create an error for a confidence level outside (0, 1)
    pub fn invalid_confidence_level(level: f64) -> Self {
        Self::InvalidArgument(format!("Confidence level {level} must be in (0, 1)"))
    }

    /// Whether the error was caused by a bad argument rather than a bug
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument(_) | Self::InsufficientData { .. } | Self::UnknownEstimator(_)
        )
    }
}
