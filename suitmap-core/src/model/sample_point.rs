use geo::Point;
use serde::{Deserialize, Serialize};

/// a raster cell center carrying that cell's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub point: Point<f64>,
    pub grid_code: i64,
}

impl SamplePoint {
    pub fn new(point: Point<f64>, grid_code: i64) -> SamplePoint {
        SamplePoint { point, grid_code }
    }
}
