//! Generator and sampler configuration.

use std::path::PathBuf;

/// Default directory route results are written to.
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

/// Default output file name.
pub const DEFAULT_FILE_NAME: &str = "paths.json";

/// Default number of buffered payloads that triggers a write.
pub const DEFAULT_FLUSH_THRESHOLD: usize = 1000;

/// Configuration for where and how a run writes its output.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Directory holding the output file, created if absent.
    pub output_dir: PathBuf,

    /// Output file name inside `output_dir`.
    pub file_name: String,

    /// Buffered payload count that triggers a batch write.
    pub flush_threshold: usize,
}

impl GeneratorConfig {
    /// Create a config writing to `output_dir/file_name`.
    pub fn new(output_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            output_dir: output_dir.into(),
            file_name: file_name.into(),
            flush_threshold: DEFAULT_FLUSH_THRESHOLD,
        }
    }

    /// Set the flush threshold. Zero is treated as one.
    pub fn with_flush_threshold(mut self, n: usize) -> Self {
        self.flush_threshold = n.max(1);
        self
    }

    /// Full path of the output file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.file_name)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_OUTPUT_DIR, DEFAULT_FILE_NAME)
    }
}

/// Outcome of the distance filter for one candidate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairVerdict {
    Accept,
    TooClose,
    TooFar,
}

/// Parameters of the pair sampler.
///
/// Distances are squared raw-degree distances, see
/// [`Coordinate::squared_distance`](crate::domain::Coordinate::squared_distance).
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    /// Pairs closer than this are rejected.
    pub min_sq_distance: f64,

    /// Pairs further apart than this are rejected.
    pub max_sq_distance: f64,

    /// Upper bound of the random skip before the first inner index.
    pub max_offset: usize,
}

impl SamplerConfig {
    /// Classify a squared distance. Both bounds are inclusive.
    pub fn classify(&self, sq_distance: f64) -> PairVerdict {
        if sq_distance < self.min_sq_distance {
            PairVerdict::TooClose
        } else if sq_distance > self.max_sq_distance {
            PairVerdict::TooFar
        } else {
            PairVerdict::Accept
        }
    }
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            min_sq_distance: 0.005,
            max_sq_distance: 10.0,
            max_offset: 16,
        }
    }
}
