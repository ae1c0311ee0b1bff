//! GraphHopper routing client.
//!
//! Requests a single route between two points from a GraphHopper
//! `/route` endpoint. The response body is handed back untouched: callers
//! that need the route geometry parse it themselves.
//!
//! Each call is attempted exactly once. Failures are classified as either
//! transport-level (the exchange never completed) or status-level (the
//! service answered with a non-2xx code).

mod client;
mod error;
mod mock;

pub use client::{DEFAULT_ENDPOINT, DEFAULT_LOCALE, GraphHopperClient, GraphHopperConfig};
pub use error::RouteError;
pub use mock::MockRouteClient;
