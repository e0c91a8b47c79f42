//! Shared utilities for integration tests

pub use approx::assert_relative_eq;
use proptest::prelude::*;

/// Strategy for finite samples with lengths in `[min_len, max_len)`
pub fn finite_sample(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1e6f64..1e6, min_len..max_len)
}
