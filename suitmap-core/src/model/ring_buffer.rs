use geo::{Area, MultiPolygon};
use serde::{Deserialize, Serialize};

/// the area lying between the previous buffer threshold and `distance` from a
/// set of source features, dissolved into one multipolygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingBuffer {
    /// threshold as supplied by the user, written into the raster
    pub label: i64,
    /// threshold in map units
    pub distance: f64,
    pub geometry: MultiPolygon<f64>,
}

impl RingBuffer {
    pub fn new(label: i64, distance: f64, geometry: MultiPolygon<f64>) -> RingBuffer {
        RingBuffer {
            label,
            distance,
            geometry,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty() || self.geometry.unsigned_area() == 0.0
    }
}
