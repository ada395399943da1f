use super::EngineError;
use crate::model::{GridSpec, OverlayTable, Raster, Remap, RingBuffer, SamplePoint};
use geo::{Geometry, MultiPolygon};

/// the geoprocessing operations a suitability run depends on. the scoring and
/// orchestration logic only talks to this trait, so any vector/raster engine
/// providing these operations can run it.
pub trait GeoprocessingEngine {
    /// builds dissolved concentric rings around `features`, one per threshold.
    ///
    /// # Arguments
    ///
    /// * `features` - source points or polygons
    /// * `thresholds` - (label, distance in map units) pairs in user order
    ///
    /// # Returns
    ///
    /// * rings ordered by ascending distance. each ring covers the area beyond
    ///   the next smaller threshold and within its own.
    fn buffer_rings(
        &self,
        features: &[Geometry<f64>],
        thresholds: &[(i64, f64)],
    ) -> Result<Vec<RingBuffer>, EngineError>;

    /// intersects each ring with `boundary`, dropping rings left empty.
    fn clip(
        &self,
        rings: &[RingBuffer],
        boundary: &MultiPolygon<f64>,
    ) -> Result<Vec<RingBuffer>, EngineError>;

    /// burns ring labels into a raster. each cell takes the label of the first
    /// ring containing its center, or no-data.
    fn rasterize(&self, rings: &[RingBuffer], grid: &GridSpec) -> Result<Raster, EngineError>;

    /// maps each cell through `remap`. values without an entry are kept.
    fn reclassify(&self, raster: &Raster, remap: &Remap) -> Result<Raster, EngineError>;

    /// combines the table's rasters into a weighted average on the table's scale.
    fn weighted_combine(&self, table: &OverlayTable) -> Result<Raster, EngineError>;

    /// one point per data cell at the cell center.
    fn raster_to_points(&self, raster: &Raster) -> Vec<SamplePoint>;

    /// for each target, the largest `grid_code` among samples within
    /// `search_radius` of it, or `None` if no sample is in range.
    fn spatial_join_max(
        &self,
        targets: &[Geometry<f64>],
        samples: &[SamplePoint],
        search_radius: f64,
    ) -> Result<Vec<Option<i64>>, EngineError>;
}
