//! Equal-width binning for diagnostic output
//!
//! This crate partitions a sample into equal-width intervals, counts
//! occupancy, and derives a normalized density that can be laid over a
//! theoretical probability density function. It is used to inspect the
//! distribution of bootstrap point estimates, not by the resampling itself.
//!
//! # Examples
//!
//! ## Fixed width aligned to an offset
//!
//! ```rust
//! use bootstat_histogram::Bins;
//!
//! let data: Vec<f64> = (0..=10).map(|i| i as f64 * 10.0).collect();
//! let bins = Bins::from_width(&data, 10.0, 0.0).unwrap();
//!
//! assert_eq!(bins.number(), 10);
//! // the closed last interval holds both 90 and 100
//! assert_eq!(bins.counts()[9], 2);
//! ```
//!
//! ## Overlaying a theoretical density
//!
//! ```rust
//! use bootstat_histogram::{Bins, HistogramOps};
//! use bootstat_core::normal;
//!
//! let data = vec![-1.5, -0.5, -0.2, 0.0, 0.3, 0.4, 1.1, 1.9];
//! let bins = Bins::from_count(&data, 4).unwrap();
//!
//! for point in bins.overlay(normal::pdf) {
//!     println!("{:.2}: empirical={:.3} theoretical={:.3}",
//!              point.x, point.empirical, point.theoretical);
//! }
//! ```

pub mod builders;
pub mod ops;
pub mod traits;
pub mod types;

// Re-export main types and traits
pub use builders::{FixedCount, FixedRange, FixedWidth};
pub use ops::{DensityPoint, GoodnessOfFit, HistogramOps};
pub use traits::BinsBuilder;
pub use types::{Bins, Interval, MAX_INTERVALS};

pub use bootstat_core::Result;
