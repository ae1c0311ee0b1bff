//! Geographic coordinate types.

use std::fmt;

use serde::Deserialize;

/// A latitude/longitude point, in degrees.
///
/// Coordinates are loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    /// Create a coordinate from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Squared Euclidean distance in raw degree units.
    ///
    /// This is not a geodesic distance: a degree of longitude covers less
    /// ground the further you are from the equator.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_generator::domain::Coordinate;
    ///
    /// let a = Coordinate::new(0.0, 0.0);
    /// let b = Coordinate::new(3.0, 4.0);
    /// assert_eq!(a.squared_distance(&b), 25.0);
    /// ```
    pub fn squared_distance(&self, other: &Coordinate) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }

    /// Format as the `"<lat>,<lon>"` point string routing services expect.
    pub fn to_point_param(&self) -> String {
        format!("{:.6},{:.6}", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.6},{:.6}]", self.lat, self.lon)
    }
}

/// An ordered pair of coordinates drawn from the location list.
///
/// `from_index < to_index` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampledPair<'a> {
    pub from_index: usize,
    pub to_index: usize,
    pub from: &'a Coordinate,
    pub to: &'a Coordinate,
}

impl SampledPair<'_> {
    /// Squared raw-degree distance between the two endpoints.
    pub fn squared_distance(&self) -> f64 {
        self.from.squared_distance(self.to)
    }
}
