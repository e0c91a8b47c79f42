//! Core types and numeric primitives for bootstrap statistics
//!
//! This crate provides the foundation the other bootstat crates build on:
//!
//! - [`Error`] and [`Result`]: the unified error taxonomy
//! - [`descriptive`]: mean, compensated sum of squares, variance, quantiles
//! - [`math::distributions::normal`]: the standard normal CDF and quantile
//!
//! # Example
//!
//! ```rust
//! use bootstat_core::descriptive::{mean, median, sorted, variance};
//!
//! let data = vec![47.0, 64.0, 23.0, 71.0, 38.0, 64.0, 55.0, 41.0, 59.0, 48.0];
//! let m = mean(&data).unwrap();
//! let var = variance(&data, m, true).unwrap();
//! let med = median(&sorted(&data)).unwrap();
//!
//! println!("mean: {m}, variance: {var}, median: {med}");
//! ```

pub mod descriptive;
pub mod error;
pub mod math;

pub use error::{Error, Result};
pub use math::distributions::normal;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::descriptive::{mean, median, quantile, sd, sorted, sst, variance};
    pub use crate::error::{Error, Result};
    pub use crate::math::distributions::normal;
}
