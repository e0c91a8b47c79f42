//! Bootstrap configuration

use crate::api::{DEFAULT_CONFIDENCE_LEVEL, DEFAULT_RESAMPLES};
use crate::bootstrap_methods::{BCaBootstrap, PercentileBootstrap};
use crate::traits::BootstrapMethod;
use crate::types::ConfidenceLevel;
use bootstat_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Method used to turn resample scores into an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntervalMethod {
    /// Plain percentiles of the resample scores
    Percentile,
    /// Bias-corrected and accelerated percentiles
    #[default]
    Bca,
}

impl IntervalMethod {
    pub(crate) fn as_method(&self) -> &'static dyn BootstrapMethod {
        match self {
            IntervalMethod::Percentile => &PercentileBootstrap,
            IntervalMethod::Bca => &BCaBootstrap,
        }
    }
}

/// Parameters of a bootstrap run
///
/// Missing fields take their defaults when deserialized, so
/// `{"n_resamples": 2000}` is a complete configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Number of resamples
    pub n_resamples: usize,
    /// Confidence level in (0, 1)
    pub confidence_level: f64,
    /// Interval method
    pub method: IntervalMethod,
    /// Seed for reproducible results; drawn from entropy when `None`
    pub seed: Option<u64>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            n_resamples: DEFAULT_RESAMPLES,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            method: IntervalMethod::default(),
            seed: None,
        }
    }
}

impl BootstrapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set number of resamples
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Set confidence level
    pub fn with_confidence_level(mut self, confidence_level: f64) -> Self {
        self.confidence_level = confidence_level;
        self
    }

    /// Set interval method
    pub fn with_method(mut self, method: IntervalMethod) -> Self {
        self.method = method;
        self
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the resample count and confidence level
    pub fn validate(&self) -> Result<()> {
        if self.n_resamples == 0 {
            return Err(Error::InvalidArgument(
                "Number of resamples must be positive".to_string(),
            ));
        }
        ConfidenceLevel::new(self.confidence_level)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootstrapConfig::default();
        assert_eq!(config.n_resamples, 100_000);
        assert_eq!(config.confidence_level, 0.95);
        assert_eq!(config.method, IntervalMethod::Bca);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = BootstrapConfig::new()
            .with_resamples(500)
            .with_confidence_level(0.9)
            .with_method(IntervalMethod::Percentile)
            .with_seed(42);

        assert_eq!(config.n_resamples, 500);
        assert_eq!(config.confidence_level, 0.9);
        assert_eq!(config.method, IntervalMethod::Percentile);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_validation() {
        assert!(BootstrapConfig::new().with_resamples(0).validate().is_err());
        assert!(BootstrapConfig::new()
            .with_confidence_level(1.0)
            .validate()
            .is_err());
        assert!(BootstrapConfig::new()
            .with_confidence_level(-0.5)
            .validate()
            .is_err());
    }

    #[test]
    fn test_deserialize_partial_json() {
        let config: BootstrapConfig =
            serde_json::from_str(r#"{"n_resamples": 2000, "method": "percentile"}"#).unwrap();

        assert_eq!(config.n_resamples, 2000);
        assert_eq!(config.method, IntervalMethod::Percentile);
        assert_eq!(config.confidence_level, DEFAULT_CONFIDENCE_LEVEL);
        assert_eq!(config.seed, None);

        let json = serde_json::to_string(&config.clone().with_seed(3)).unwrap();
        assert!(json.contains(r#""seed":3"#));
        assert!(json.contains(r#""method":"percentile""#));
    }
}
