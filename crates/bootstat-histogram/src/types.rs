//! Core types for binned samples

use bootstat_core::{descriptive, Error, Result};
use num_traits::ToPrimitive;
use std::fmt;

/// A single interval of a [`Bins`] partition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Left edge of the interval (inclusive)
    pub left: f64,
    /// Right edge of the interval (exclusive, except for the last interval)
    pub right: f64,
    /// Number of sample values in this interval
    pub count: usize,
    /// Density (count / (total_count * width))
    pub density: f64,
}

impl Interval {
    fn new(left: f64, right: f64, count: usize, total_count: usize, width: f64) -> Self {
        let density = if total_count > 0 {
            count as f64 / total_count as f64 / width
        } else {
            0.0
        };
        Self {
            left,
            right,
            count,
            density,
        }
    }

    /// Get the center point of the interval
    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Get the width of the interval
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}, density={:.3}",
            self.left, self.right, self.count, self.density
        )
    }
}

/// Largest number of intervals a partition may have
pub const MAX_INTERVALS: usize = 1 << 20;

/// A sample partitioned into `number` equal-width intervals over `[begin, end]`
///
/// Every interval is half-open `[x, x + width)` except the last, which is
/// closed so the maximum of the range is counted. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    begin: f64,
    end: f64,
    width: f64,
    intervals: Vec<Interval>,
    total: usize,
}

impl Bins {
    /// Partition `sample` into `number` intervals of `width` starting at `begin`
    ///
    /// The range ends at `begin + number * width`.
    pub(crate) fn partition(sample: &[f64], begin: f64, width: f64, number: usize) -> Result<Self> {
        let end = begin + width * number as f64;
        Self::partition_range(sample, begin, end, width, number)
    }

    /// Partition `sample` over the explicit range `[begin, end]`
    pub(crate) fn partition_range(
        sample: &[f64],
        begin: f64,
        end: f64,
        width: f64,
        number: usize,
    ) -> Result<Self> {
        if number == 0 {
            return Err(Error::InvalidArgument(
                "number of intervals must be positive".to_string(),
            ));
        }
        if number > MAX_INTERVALS {
            return Err(Error::InvalidArgument(format!(
                "{number} intervals exceed the limit of {MAX_INTERVALS}"
            )));
        }
        if !(width.is_finite() && width > 0.0) {
            return Err(Error::InvalidArgument(format!(
                "interval width {width} must be positive and finite"
            )));
        }
        if !(begin.is_finite() && end.is_finite()) {
            return Err(Error::non_finite("interval range"));
        }
        let (min, max) = descriptive::min_max(sample)?;
        if min < begin || max > end {
            return Err(Error::InvalidArgument(format!(
                "sample range [{min}, {max}] lies outside [{begin}, {end}]"
            )));
        }

        let mut counts = vec![0usize; number];
        let last = number - 1;
        for &value in sample {
            // clamp absorbs the closed last interval and boundary rounding
            let index = ((value - begin) / width)
                .floor()
                .to_usize()
                .unwrap_or(last)
                .min(last);
            counts[index] += 1;
        }

        let total = sample.len();
        let intervals = counts
            .iter()
            .enumerate()
            .map(|(i, &count)| {
                let left = begin + i as f64 * width;
                let right = if i == last {
                    end
                } else {
                    begin + (i + 1) as f64 * width
                };
                Interval::new(left, right, count, total, width)
            })
            .collect();

        tracing::trace!(begin, end, width, number, total, "partitioned sample");

        Ok(Self {
            begin,
            end,
            width,
            intervals,
            total,
        })
    }

    /// Get the intervals
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Number of intervals
    pub fn number(&self) -> usize {
        self.intervals.len()
    }

    /// Common width of every interval
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Start of the partitioned range
    pub fn begin(&self) -> f64 {
        self.begin
    }

    /// End of the partitioned range (inclusive)
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Total number of sample values
    pub fn total(&self) -> usize {
        self.total
    }

    /// Left boundary of every interval
    pub fn boundaries(&self) -> Vec<f64> {
        self.intervals.iter().map(|i| i.left).collect()
    }

    /// Midpoint of every interval
    pub fn midpoints(&self) -> Vec<f64> {
        self.intervals.iter().map(Interval::midpoint).collect()
    }

    /// Occupancy count of every interval
    pub fn counts(&self) -> Vec<usize> {
        self.intervals.iter().map(|i| i.count).collect()
    }

    /// Normalized density `count / total / width` of every interval
    pub fn density(&self) -> Vec<f64> {
        self.intervals.iter().map(|i| i.density).collect()
    }

    /// Relative frequencies of every interval
    pub fn frequencies(&self) -> Vec<f64> {
        self.intervals
            .iter()
            .map(|i| i.frequency(self.total))
            .collect()
    }

    /// Index of the interval holding `value`, if it lies within `[begin, end]`
    pub fn index_of(&self, value: f64) -> Option<usize> {
        if !(value >= self.begin && value <= self.end) {
            return None;
        }
        let last = self.number() - 1;
        ((value - self.begin) / self.width)
            .floor()
            .to_usize()
            .map(|i| i.min(last))
    }

    /// Largest interval count
    pub fn max_count(&self) -> usize {
        self.intervals.iter().map(|i| i.count).max().unwrap_or(0)
    }
}

impl fmt::Display for Bins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bins({} intervals, n={}, range=[{:.3}, {:.3}])",
            self.number(),
            self.total,
            self.begin,
            self.end
        )
    }
}
