//! Randomness for the pair sampler.
//!
//! The sampler only ever needs one thing from a random source: a bounded
//! integer per outer index. Keeping that behind a trait lets tests script
//! the exact offsets a run will see.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of bounded random integers.
pub trait OffsetRng {
    /// Draw a value uniformly from `low..=high`.
    fn draw(&mut self, low: usize, high: usize) -> usize;
}

impl<R: OffsetRng + ?Sized> OffsetRng for &mut R {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        (**self).draw(low, high)
    }
}

/// `OffsetRng` backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomOffsets(StdRng);

impl RandomOffsets {
    /// Seed from OS entropy.
    pub fn from_entropy() -> Self {
        RandomOffsets(StdRng::from_entropy())
    }

    /// Seed deterministically, for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        RandomOffsets(StdRng::seed_from_u64(seed))
    }
}

impl OffsetRng for RandomOffsets {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        self.0.gen_range(low..=high)
    }
}

/// Replays a fixed sequence of values, cycling when exhausted.
///
/// Values are clamped into the requested range.
#[derive(Debug, Clone)]
pub struct ScriptedOffsets {
    values: Vec<usize>,
    next: usize,
}

impl ScriptedOffsets {
    /// Replay `values` in order. An empty script always yields `low`.
    pub fn new(values: impl Into<Vec<usize>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Always yield the same value.
    pub fn constant(value: usize) -> Self {
        Self::new(vec![value])
    }
}

impl OffsetRng for ScriptedOffsets {
    fn draw(&mut self, low: usize, high: usize) -> usize {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(low, high)
    }
}
