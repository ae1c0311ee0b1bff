//! Pair sampling over the coordinate list.
//!
//! For each outer index `i` a random offset in `1..=max_offset` is drawn
//! and inner indices start at `i + offset` instead of `i + 1`. Location
//! lists are often sorted or clustered by proximity, so always starting
//! at the nearest neighbour would flood the output with near-identical
//! short routes. The skip is a heuristic, not a uniform sampling scheme.
//!
//! Candidates then go through the distance filter in [`SamplerConfig`].
//! The sampler is a lazy iterator; callers stop pulling once they have
//! enough routes.

use tracing::trace;

use crate::domain::{Coordinate, SampledPair};

use super::config::{PairVerdict, SamplerConfig};
use super::rng::OffsetRng;

/// Counters describing what the sampler has examined so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SamplerStats {
    /// Candidate pairs examined.
    pub candidates: usize,
    /// Candidates rejected as too close.
    pub rejected_close: usize,
    /// Candidates rejected as too far apart.
    pub rejected_far: usize,
}

impl SamplerStats {
    /// Candidates that passed the distance filter.
    pub fn accepted(&self) -> usize {
        self.candidates - self.rejected_close - self.rejected_far
    }
}

/// Lazy iterator over accepted coordinate pairs.
pub struct PairSampler<'a, R> {
    coords: &'a [Coordinate],
    rng: R,
    config: SamplerConfig,
    outer: usize,
    inner: usize,
    offset_drawn: bool,
    stats: SamplerStats,
}

impl<'a, R: OffsetRng> PairSampler<'a, R> {
    /// Create a sampler over `coords`.
    pub fn new(coords: &'a [Coordinate], rng: R, config: SamplerConfig) -> Self {
        Self {
            coords,
            rng,
            config,
            outer: 0,
            inner: 0,
            offset_drawn: false,
            stats: SamplerStats::default(),
        }
    }

    /// Counters so far.
    pub fn stats(&self) -> SamplerStats {
        self.stats
    }
}

impl<'a, R: OffsetRng> Iterator for PairSampler<'a, R> {
    type Item = SampledPair<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let coords = self.coords;

        while self.outer < coords.len() {
            if !self.offset_drawn {
                let offset = self.rng.draw(1, self.config.max_offset.max(1));
                self.inner = self.outer.saturating_add(offset);
                self.offset_drawn = true;
            }

            let from = &coords[self.outer];
            while self.inner < coords.len() {
                let j = self.inner;
                self.inner += 1;

                let to = &coords[j];
                let d = from.squared_distance(to);
                self.stats.candidates += 1;

                match self.config.classify(d) {
                    PairVerdict::Accept => {
                        return Some(SampledPair {
                            from_index: self.outer,
                            to_index: j,
                            from,
                            to,
                        });
                    }
                    PairVerdict::TooClose => {
                        self.stats.rejected_close += 1;
                        trace!(i = self.outer, j, d, "skipping pair: too close");
                    }
                    PairVerdict::TooFar => {
                        self.stats.rejected_far += 1;
                        trace!(i = self.outer, j, d, "skipping pair: too far");
                    }
                }
            }

            self.outer += 1;
            self.offset_drawn = false;
        }

        None
    }
}
