use super::CriterionInput;
use crate::{
    config::SuitabilityConfiguration,
    io::{ascii_grid, geojson_ops, RunWorkspace},
    SuitabilityError,
};
use geo::{Geometry, MultiPolygon};
use itertools::Itertools;
use suitmap_core::{
    engine::{EngineError, GeoprocessingEngine},
    model::{GridSpec, OverlayContribution, Raster, Remap, RingBuffer, ScoreBand},
};

/// turns one criterion's features into a graded raster contribution: ring
/// buffers at each distance, clipped to the analysis boundary, rasterized on
/// the analysis grid and reclassified from distance to band score.
pub struct CriterionScorer<'a, E: GeoprocessingEngine> {
    engine: &'a E,
    conf: &'a SuitabilityConfiguration,
    boundary: &'a MultiPolygon<f64>,
    grid: GridSpec,
    workspace: Option<&'a RunWorkspace>,
}

impl<'a, E: GeoprocessingEngine> CriterionScorer<'a, E> {
    /// # Arguments
    ///
    /// * `workspace` - when provided, intermediate artifacts are written to its
    ///   residuals directory
    pub fn new(
        engine: &'a E,
        conf: &'a SuitabilityConfiguration,
        boundary: &'a MultiPolygon<f64>,
        grid: GridSpec,
        workspace: Option<&'a RunWorkspace>,
    ) -> Self {
        Self {
            engine,
            conf,
            boundary,
            grid,
            workspace,
        }
    }

    pub fn score(
        &self,
        input: &CriterionInput,
        features: &[Geometry<f64>],
    ) -> Result<OverlayContribution, SuitabilityError> {
        let bands = input.bands();
        if bands.len() > ScoreBand::TOP_SCORE as usize {
            log::warn!(
                "{} has {} distance bands, bands past the fifth score below 1 and fall outside the evaluation scale",
                input.name,
                bands.len()
            );
        }
        let thresholds = input
            .distances
            .iter()
            .map(|d| (*d, self.conf.distance_to_map_units(*d)))
            .collect_vec();
        let failed = |source: EngineError| SuitabilityError::CriterionFailed {
            name: input.name.clone(),
            source,
        };

        let rings = self
            .engine
            .buffer_rings(features, &thresholds)
            .map_err(failed)?;
        self.write_rings(&format!("{}_buffer", input.name), &rings)?;

        let clipped = self.engine.clip(&rings, self.boundary).map_err(failed)?;
        self.write_rings(&format!("{}_buffer_clip", input.name), &clipped)?;

        let raster = self.engine.rasterize(&clipped, &self.grid).map_err(failed)?;
        self.write_raster(&format!("{}_buffer_raster", input.name), &raster)?;

        let remap = ScoreBand::remap(&bands);
        log::debug!("{} reclassification: {remap}", input.name);
        let reclassified = self.engine.reclassify(&raster, &remap).map_err(failed)?;
        self.write_raster(&format!("{}_reclass", input.name), &reclassified)?;

        Ok(OverlayContribution::new(
            &input.name,
            reclassified,
            input.weight,
            Remap::identity(&self.conf.scale),
        ))
    }

    fn write_rings(&self, stem: &str, rings: &[RingBuffer]) -> Result<(), SuitabilityError> {
        match self.workspace {
            Some(ws) => geojson_ops::write_feature_collection(
                &ws.residual_path(stem, "geojson"),
                geojson_ops::ring_features(rings),
            ),
            None => Ok(()),
        }
    }

    fn write_raster(&self, stem: &str, raster: &Raster) -> Result<(), SuitabilityError> {
        match self.workspace {
            Some(ws) => ascii_grid::write_ascii_grid(&ws.residual_path(stem, "asc"), raster),
            None => Ok(()),
        }
    }
}
