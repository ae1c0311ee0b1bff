//! Location source error types.

use std::path::PathBuf;

/// Errors that can occur when loading the coordinate list.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// The location file could not be read
    #[error("failed to read locations from {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The location file is not a JSON array of coordinates
    #[error("invalid locations JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
