//! Core traits for building partitions

use crate::types::Bins;
use bootstat_core::Result;

/// Trait for partitioning sample data into equal-width intervals
pub trait BinsBuilder {
    /// Build the partition for the given sample
    fn build(&self, sample: &[f64]) -> Result<Bins>;

    /// Get the target number of intervals (if known before seeing data)
    fn target_intervals(&self) -> Option<usize> {
        None
    }
}
