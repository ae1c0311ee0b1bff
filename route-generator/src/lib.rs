//! Route sample generator.
//!
//! Samples coordinate pairs from a location list, asks a GraphHopper
//! server for a route between each pair, and writes the raw responses as
//! newline-delimited records for a downstream ingestion step.

pub mod domain;
pub mod generator;
pub mod graphhopper;
pub mod locations;
