//! Per-block resampling workspaces
//!
//! Resamples are drawn in fixed-size blocks. Each block owns an independent
//! random stream and a scratch buffer, so blocks can run on any thread in
//! any order and still reproduce the same scores for a given seed.

use rand::distributions::{Distribution, Uniform};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Number of resamples drawn per block
pub const BLOCK_SIZE: usize = 1024;

/// Number of blocks needed for `n_resamples`
pub fn block_count(n_resamples: usize) -> usize {
    n_resamples.div_ceil(BLOCK_SIZE)
}

/// Resample indices `[start, end)` covered by `block`
pub fn block_range(block: usize, n_resamples: usize) -> std::ops::Range<usize> {
    let start = block * BLOCK_SIZE;
    start..(start + BLOCK_SIZE).min(n_resamples)
}

/// Scratch state for one block of resamples
pub struct BootstrapWorkspace {
    rng: ChaCha8Rng,
    indices: Uniform<usize>,
    buffer: Vec<f64>,
}

impl BootstrapWorkspace {
    /// Create the workspace for `block`, drawing from a stream of `seed`
    ///
    /// `sample_len` must be positive.
    pub fn for_block(seed: u64, block: usize, sample_len: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(block as u64);
        Self {
            rng,
            indices: Uniform::new(0, sample_len),
            buffer: Vec::with_capacity(sample_len),
        }
    }

    /// Refill the scratch buffer with a resample of `sample` and return it
    ///
    /// Every position is drawn independently and uniformly, with replacement.
    pub fn resample<'a>(&'a mut self, sample: &[f64]) -> &'a [f64] {
        self.buffer.clear();
        for _ in 0..sample.len() {
            let idx = self.indices.sample(&mut self.rng);
            self.buffer.push(sample[idx]);
        }
        &self.buffer
    }
}
