//! End-to-end route generation run.
//!
//! Loads the coordinate list, pulls accepted pairs from the sampler,
//! fetches a route for each and streams the successful payloads to the
//! output file until the run limit is reached or the pairs run out.

use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{Coordinate, RoutePayload};
use crate::graphhopper::RouteError;
use crate::locations::{LocationError, LocationSource};

use super::config::{GeneratorConfig, SamplerConfig};
use super::rng::OffsetRng;
use super::sampler::PairSampler;
use super::writer::{BatchWriter, create_output};

/// Error that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The coordinate list could not be loaded
    #[error(transparent)]
    Locations(#[from] LocationError),

    /// The coordinate list is empty
    #[error("generator: no locations available")]
    NoLocations,

    /// The output file or its directory could not be created
    #[error("failed to create output file {path:?}: {source}")]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Trait for fetching a route between two points.
///
/// This abstraction allows the generator to be tested without a routing
/// server.
#[allow(async_fn_in_trait)]
pub trait RouteProvider {
    /// Fetch the raw route payload from `from` to `to`.
    async fn fetch(&self, from: &Coordinate, to: &Coordinate) -> Result<RoutePayload, RouteError>;
}

/// What a generation run did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateSummary {
    /// Coordinates loaded.
    pub locations: usize,
    /// Candidate pairs examined by the sampler.
    pub candidates: usize,
    /// Candidates rejected as too close.
    pub rejected_close: usize,
    /// Candidates rejected as too far apart.
    pub rejected_far: usize,
    /// Routes fetched successfully.
    pub fetched: usize,
    /// Route requests that failed.
    pub fetch_failures: usize,
    /// Fetched routes that could not be written.
    pub write_failures: usize,
    /// Routes written to the output.
    pub accepted: usize,
}

/// Drives sampling, fetching and writing for one output file.
pub struct Generator<P, L, R> {
    routes: P,
    locations: L,
    rng: R,
    config: GeneratorConfig,
    sampler_config: SamplerConfig,
}

impl<P, L, R> Generator<P, L, R>
where
    P: RouteProvider,
    L: LocationSource,
    R: OffsetRng,
{
    /// Create a generator.
    pub fn new(routes: P, locations: L, rng: R, config: GeneratorConfig) -> Self {
        Self {
            routes,
            locations,
            rng,
            config,
            sampler_config: SamplerConfig::default(),
        }
    }

    /// Override the sampler parameters.
    pub fn with_sampler_config(mut self, sampler_config: SamplerConfig) -> Self {
        self.sampler_config = sampler_config;
        self
    }

    /// The output configuration.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate up to `limit` routes.
    ///
    /// A non-positive limit does nothing: no locations are loaded and no
    /// output file is created. Individual fetch or write failures are
    /// logged and skipped; only loading and output creation can fail the
    /// run.
    pub async fn generate(&mut self, limit: i64) -> Result<GenerateSummary, GenerateError> {
        let limit = match usize::try_from(limit) {
            Ok(n) if n > 0 => n,
            _ => return Ok(GenerateSummary::default()),
        };

        let coords = self.locations.load()?;
        info!("Got {} locations", coords.len());
        if coords.is_empty() {
            return Err(GenerateError::NoLocations);
        }

        let path = self.config.output_path();
        let sink = create_output(&path).map_err(|source| GenerateError::Output {
            path: path.clone(),
            source,
        })?;
        let mut writer = BatchWriter::new(sink, self.config.flush_threshold, limit);

        let mut summary = GenerateSummary {
            locations: coords.len(),
            ..GenerateSummary::default()
        };

        let mut sampler = PairSampler::new(&coords, &mut self.rng, self.sampler_config.clone());

        while summary.accepted < limit {
            let Some(pair) = sampler.next() else {
                break;
            };

            debug!(from = %pair.from, to = %pair.to, "generating path");

            match self.routes.fetch(pair.from, pair.to).await {
                Ok(payload) => {
                    summary.fetched += 1;
                    writer.offer(payload);
                }
                Err(e) => {
                    summary.fetch_failures += 1;
                    warn!(
                        from = %pair.from,
                        to = %pair.to,
                        transport = e.is_transport(),
                        error = %e,
                        "route request failed"
                    );
                    continue;
                }
            }

            let written = writer.maybe_flush(summary.accepted + writer.pending());
            if written > 0 {
                summary.accepted += written;
                info!("Generated {} paths", summary.accepted);
            }
        }

        let written = writer.finish();
        summary.accepted += written;

        let stats = sampler.stats();
        summary.candidates = stats.candidates;
        summary.rejected_close = stats.rejected_close;
        summary.rejected_far = stats.rejected_far;
        summary.write_failures = writer.write_failures();

        info!(
            candidates = summary.candidates,
            rejected_close = summary.rejected_close,
            rejected_far = summary.rejected_far,
            fetch_failures = summary.fetch_failures,
            write_failures = summary.write_failures,
            output = %path.display(),
            "Generated {} paths in total",
            summary.accepted
        );

        Ok(summary)
    }
}
