use super::{buffer, join_ops, overlay_ops, rasterize_ops};
use crate::config::SuitabilityConfiguration;
use geo::{BooleanOps, Geometry, MultiPolygon};
use itertools::Itertools;
use suitmap_core::{
    engine::{EngineError, GeoprocessingEngine},
    model::{GridSpec, OverlayTable, Raster, Remap, RingBuffer, SamplePoint},
};

/// in-process vector and raster engine built on `geo`, `geo-buffer` and `rstar`.
#[derive(Debug, Clone, Copy)]
pub struct NativeEngine {
    /// segments used to approximate a circle around point features
    pub buffer_segments: usize,
    pub parallelize: bool,
}

impl Default for NativeEngine {
    fn default() -> Self {
        Self {
            buffer_segments: 32,
            parallelize: false,
        }
    }
}

impl From<&SuitabilityConfiguration> for NativeEngine {
    fn from(conf: &SuitabilityConfiguration) -> Self {
        Self {
            buffer_segments: conf.buffer_segments,
            parallelize: conf.parallelize,
        }
    }
}

impl GeoprocessingEngine for NativeEngine {
    fn buffer_rings(
        &self,
        features: &[Geometry<f64>],
        thresholds: &[(i64, f64)],
    ) -> Result<Vec<RingBuffer>, EngineError> {
        // rings are built from the innermost outward, so order by distance and
        // drop repeated labels
        let ordered = thresholds
            .iter()
            .copied()
            .sorted_by(|a, b| a.1.total_cmp(&b.1))
            .dedup_by(|a, b| a.0 == b.0)
            .collect_vec();

        let mut rings = Vec::with_capacity(ordered.len());
        let mut previous: Option<MultiPolygon<f64>> = None;
        for (label, distance) in ordered.into_iter() {
            let disc = buffer::dissolved_buffer(
                features,
                distance,
                self.buffer_segments,
                self.parallelize,
            )
            .map_err(|e| EngineError::BufferError {
                distance,
                message: e.to_string(),
            })?;
            let ring = match &previous {
                Some(inner) => disc.difference(inner),
                None => disc.clone(),
            };
            log::debug!("ring {label} ({distance} map units) has {} parts", ring.0.len());
            rings.push(RingBuffer::new(label, distance, ring));
            previous = Some(disc);
        }
        Ok(rings)
    }

    fn clip(
        &self,
        rings: &[RingBuffer],
        boundary: &MultiPolygon<f64>,
    ) -> Result<Vec<RingBuffer>, EngineError> {
        let clipped = rings
            .iter()
            .map(|r| RingBuffer::new(r.label, r.distance, r.geometry.intersection(boundary)))
            .filter(|r| {
                let keep = !r.is_empty();
                if !keep {
                    log::debug!("ring {} lies outside the boundary, dropped", r.label);
                }
                keep
            })
            .collect_vec();
        Ok(clipped)
    }

    fn rasterize(&self, rings: &[RingBuffer], grid: &GridSpec) -> Result<Raster, EngineError> {
        rasterize_ops::rasterize_rings(rings, grid, self.parallelize)
    }

    fn reclassify(&self, raster: &Raster, remap: &Remap) -> Result<Raster, EngineError> {
        Ok(raster.map_cells(|c| remap.apply_or_keep(c)))
    }

    fn weighted_combine(&self, table: &OverlayTable) -> Result<Raster, EngineError> {
        overlay_ops::weighted_overlay(table)
    }

    fn raster_to_points(&self, raster: &Raster) -> Vec<SamplePoint> {
        rasterize_ops::raster_to_points(raster)
    }

    fn spatial_join_max(
        &self,
        targets: &[Geometry<f64>],
        samples: &[SamplePoint],
        search_radius: f64,
    ) -> Result<Vec<Option<i64>>, EngineError> {
        join_ops::spatial_join_max(targets, samples, search_radius, self.parallelize)
    }
}
