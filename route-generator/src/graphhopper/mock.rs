//! Mock route client for running without a GraphHopper server.
//!
//! Produces straight-line routes shaped like a GraphHopper response with
//! unencoded points, which is enough to exercise the output pipeline and
//! whatever ingests it.

use serde_json::json;

use crate::domain::{Coordinate, RoutePayload};
use crate::generator::RouteProvider;

use super::error::RouteError;

/// Default number of intermediate samples between the two endpoints.
const DEFAULT_SAMPLES: usize = 8;

/// Mock route client that interpolates a straight line between points.
///
/// This is useful for development and testing without a routing server.
#[derive(Debug, Clone)]
pub struct MockRouteClient {
    samples: usize,
}

impl MockRouteClient {
    /// Create a mock client with the default sample count.
    pub fn new() -> Self {
        Self {
            samples: DEFAULT_SAMPLES,
        }
    }

    /// Set the number of intermediate points per route.
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Build the synthetic payload for a route.
    ///
    /// Coordinates are `[lon, lat]`, endpoints included.
    pub fn route(&self, from: &Coordinate, to: &Coordinate) -> RoutePayload {
        let steps = self.samples + 1;
        let coordinates: Vec<[f64; 2]> = (0..=steps)
            .map(|k| {
                let t = k as f64 / steps as f64;
                [
                    from.lon + (to.lon - from.lon) * t,
                    from.lat + (to.lat - from.lat) * t,
                ]
            })
            .collect();

        let distance = from.squared_distance(to).sqrt();
        let body = json!({
            "paths": [{
                "distance": distance,
                "points_encoded": false,
                "points": {
                    "type": "LineString",
                    "coordinates": coordinates,
                },
            }],
        });

        // serde_json's compact output never contains a newline.
        RoutePayload::from(body.to_string())
    }
}

impl Default for MockRouteClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteProvider for MockRouteClient {
    async fn fetch(&self, from: &Coordinate, to: &Coordinate) -> Result<RoutePayload, RouteError> {
        Ok(self.route(from, to))
    }
}
