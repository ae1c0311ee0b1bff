//! Coordinate sources.
//!
//! A run loads its coordinate list exactly once, before sampling starts.
//! The list order matters: pairs are always drawn with the origin earlier
//! in the list than the destination.

mod error;

use std::path::{Path, PathBuf};

use crate::domain::Coordinate;

pub use error::LocationError;

/// Default location file used by the command-line tool.
pub const DEFAULT_LOCATIONS_FILE: &str = "./locations/locations.json";

/// Trait for supplying the ordered coordinate list.
///
/// This abstraction allows the generator to be tested without touching
/// the filesystem.
pub trait LocationSource {
    /// Load every coordinate, preserving source order.
    fn load(&self) -> Result<Vec<Coordinate>, LocationError>;
}

impl LocationSource for Vec<Coordinate> {
    fn load(&self) -> Result<Vec<Coordinate>, LocationError> {
        Ok(self.clone())
    }
}

/// Loads coordinates from a JSON file holding an array of
/// `{"lat": .., "lon": ..}` objects.
#[derive(Debug, Clone)]
pub struct JsonFileLocations {
    path: PathBuf,
}

impl JsonFileLocations {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonFileLocations {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATIONS_FILE)
    }
}

impl LocationSource for JsonFileLocations {
    fn load(&self) -> Result<Vec<Coordinate>, LocationError> {
        let contents = std::fs::read(&self.path).map_err(|source| LocationError::Io {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_slice(&contents).map_err(|source| LocationError::Json {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_coordinates_in_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(
            &path,
            r#"[{"lat": 52.52, "lon": 13.40}, {"lat": 48.14, "lon": 11.58}]"#,
        )
        .unwrap();

        let coords = JsonFileLocations::new(&path).load().unwrap();

        assert_eq!(coords.len(), 2);
        assert_eq!(coords[0], Coordinate::new(52.52, 13.40));
        assert_eq!(coords[1], Coordinate::new(48.14, 11.58));
    }

    #[test]
    fn empty_array_loads_as_empty_list() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(&path, "[]").unwrap();

        let coords = JsonFileLocations::new(&path).load().unwrap();
        assert!(coords.is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = JsonFileLocations::new("/nonexistent/path/locations.json");
        let err = source.load().unwrap_err();
        assert!(matches!(err, LocationError::Io { .. }));
        assert!(err.to_string().contains("failed to read locations"));
    }

    #[test]
    fn malformed_json_is_json_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locations.json");
        std::fs::write(&path, r#"[{"lat": "north"}]"#).unwrap();

        let err = JsonFileLocations::new(&path).load().unwrap_err();
        assert!(matches!(err, LocationError::Json { .. }));
    }

    #[test]
    fn default_path() {
        let source = JsonFileLocations::default();
        assert_eq!(source.path(), Path::new(DEFAULT_LOCATIONS_FILE));
    }
}
