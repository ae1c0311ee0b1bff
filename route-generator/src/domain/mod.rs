//! Domain types for route generation.
//!
//! Coordinates are read-only once loaded; pairs borrow them and payloads
//! are carried through the pipeline without being interpreted.

mod coordinate;
mod payload;

pub use coordinate::{Coordinate, SampledPair};
pub use payload::RoutePayload;
