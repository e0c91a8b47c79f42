//! Strategies for choosing an equal-width partition

use crate::traits::BinsBuilder;
use crate::types::{Bins, MAX_INTERVALS};
use bootstat_core::{descriptive, Error, Result};
use num_traits::ToPrimitive;

/// Fixed interval width aligned to an offset
///
/// The partition starts at the largest `offset + k * width` not above the
/// sample minimum and has as many intervals as needed to reach the maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedWidth {
    width: f64,
    offset: f64,
}

impl FixedWidth {
    /// Create a new fixed-width builder
    pub fn new(width: f64, offset: f64) -> Self {
        Self { width, offset }
    }
}

impl BinsBuilder for FixedWidth {
    fn build(&self, sample: &[f64]) -> Result<Bins> {
        let width = self.width;
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "interval width {width} must be positive and finite"
            )));
        }
        if !self.offset.is_finite() {
            return Err(Error::non_finite("offset"));
        }
        let (min, max) = descriptive::min_max(sample)?;

        let begin = self.offset + ((min - self.offset) / width).floor() * width;
        let mut number = ((max - begin) / width)
            .ceil()
            .to_usize()
            .filter(|&number| number <= MAX_INTERVALS)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "interval width {width} needs more than {MAX_INTERVALS} intervals"
                ))
            })?
            .max(1);
        // rounding in begin + number * width may leave max just outside
        while begin + width * (number as f64) < max {
            number += 1;
        }

        Bins::partition(sample, begin, width, number)
    }

    fn target_intervals(&self) -> Option<usize> {
        None
    }
}

/// A fixed number of intervals spanning the sample minimum to maximum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedCount {
    number: usize,
}

impl FixedCount {
    /// Create a new fixed-count builder
    pub fn new(number: usize) -> Self {
        Self { number }
    }
}

impl BinsBuilder for FixedCount {
    fn build(&self, sample: &[f64]) -> Result<Bins> {
        let (min, max) = descriptive::min_max(sample)?;
        FixedRange::new(min, max, self.number).build(sample)
    }

    fn target_intervals(&self) -> Option<usize> {
        Some(self.number)
    }
}

/// An explicit `[begin, end]` range split into `number` intervals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRange {
    begin: f64,
    end: f64,
    number: usize,
}

impl FixedRange {
    /// Create a new explicit-range builder
    pub fn new(begin: f64, end: f64, number: usize) -> Self {
        Self { begin, end, number }
    }
}

impl BinsBuilder for FixedRange {
    fn build(&self, sample: &[f64]) -> Result<Bins> {
        if self.number == 0 {
            return Err(Error::InvalidArgument(
                "number of intervals must be positive".to_string(),
            ));
        }
        let width = (self.end - self.begin) / self.number as f64;
        Bins::partition_range(sample, self.begin, self.end, width, self.number)
    }

    fn target_intervals(&self) -> Option<usize> {
        Some(self.number)
    }
}

impl Bins {
    /// Intervals of `width` aligned to `offset`, see [`FixedWidth`]
    pub fn from_width(sample: &[f64], width: f64, offset: f64) -> Result<Self> {
        FixedWidth::new(width, offset).build(sample)
    }

    /// `number` intervals spanning the sample range, see [`FixedCount`]
    pub fn from_count(sample: &[f64], number: usize) -> Result<Self> {
        FixedCount::new(number).build(sample)
    }

    /// `number` intervals over `[begin, end]`, see [`FixedRange`]
    pub fn from_range(sample: &[f64], begin: f64, end: f64, number: usize) -> Result<Self> {
        FixedRange::new(begin, end, number).build(sample)
    }
}
