use geo_types::Point;

/// A single geotagged sample. Coordinates are in degrees, the timestamp in seconds.
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: f64,
}

impl TrackPoint {
    pub fn new(latitude: f64, longitude: f64, timestamp: f64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }

    /// Position as an x/y point, x being the longitude.
    pub fn position(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite() && self.timestamp.is_finite()
    }
}

impl From<(f64, f64, f64)> for TrackPoint {
    fn from((latitude, longitude, timestamp): (f64, f64, f64)) -> Self {
        Self::new(latitude, longitude, timestamp)
    }
}
