//! Route generation pipeline.
//!
//! Sampler, route provider and batch writer, composed by [`Generator`]:
//!
//! ```text
//! locations -> PairSampler -> RouteProvider -> BatchWriter -> output file
//! ```
//!
//! Everything runs sequentially, one pair at a time. The run stops when
//! the requested number of routes has been written or when the sampler
//! has no pairs left.

mod config;
mod generate;
mod rng;
mod sampler;
mod writer;


pub use config::{
    DEFAULT_FILE_NAME, DEFAULT_FLUSH_THRESHOLD, DEFAULT_OUTPUT_DIR, GeneratorConfig, PairVerdict,
    SamplerConfig,
};
pub use generate::{GenerateError, GenerateSummary, Generator, RouteProvider};
pub use rng::{OffsetRng, RandomOffsets, ScriptedOffsets};
pub use sampler::{PairSampler, SamplerStats};
pub use writer::{BatchWriter, create_output};
