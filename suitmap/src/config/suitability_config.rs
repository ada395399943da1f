use super::{CriterionConfig, DistanceInput, LinearDistance, LinearUnit, WeightInput};
use crate::SuitabilityError;
use serde::{Deserialize, Serialize};
use suitmap_core::model::EvaluationScale;

/// defines the layers, criterion table and geoprocessing parameters of a
/// suitability run. directories are relative to the run workspace.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct SuitabilityConfiguration {
    pub input_directory: String,
    pub residuals_directory: String,
    pub output_directory: String,
    pub boundary_layer: String,
    pub buildings_layer: String,
    pub output_layer: String,
    pub overlay_output: String,
    /// processed in this order
    pub criteria: Vec<CriterionConfig>,
    pub cell_size: f64,
    pub distance_unit: LinearUnit,
    pub map_unit: LinearUnit,
    search_radius: Option<LinearDistance>,
    pub scale: EvaluationScale,
    pub buffer_segments: usize,
    pub parallelize: bool,
}

impl Default for SuitabilityConfiguration {
    fn default() -> Self {
        let criteria = vec![
            CriterionConfig::new("economic", "extracted_point_economic_zones_reproj"),
            CriterionConfig::new("park", "extracted_point_osm_park_poly_reproj"),
            CriterionConfig::new("bus", "extracted_point_osm_bus_stops_reproj"),
            CriterionConfig::new("restaurant", "extracted_point_osm_restaurants_reproj"),
            CriterionConfig::new("bicycle", "extracted_point_osm_bicycle_parking_reproj"),
            CriterionConfig::new("school", "extracted_point_osm_schools_reproj"),
        ];
        Self {
            input_directory: String::from("geodatabase/input"),
            residuals_directory: String::from("geodatabase/residuals"),
            output_directory: String::from("geodatabase/output"),
            boundary_layer: String::from("salzburg_aoi"),
            buildings_layer: String::from("salzburg_buildings"),
            output_layer: String::from("salzburg_buildings_suitability"),
            overlay_output: String::from("weighted_overlay_output"),
            criteria,
            cell_size: 20.0,
            distance_unit: LinearUnit::Meters,
            map_unit: LinearUnit::Meters,
            search_radius: Some(Self::DEFAULT_SEARCH_RADIUS),
            scale: EvaluationScale::default(),
            buffer_segments: 32,
            parallelize: true,
        }
    }
}

impl SuitabilityConfiguration {
    pub const DEFAULT_SEARCH_RADIUS: LinearDistance = LinearDistance {
        value: 32.0,
        unit: LinearUnit::Feet,
    };

    pub fn get_search_radius(&self) -> LinearDistance {
        self.search_radius.unwrap_or(Self::DEFAULT_SEARCH_RADIUS)
    }

    /// search radius for joining overlay samples onto buildings, in map units
    pub fn search_radius_map_units(&self) -> f64 {
        self.get_search_radius().in_unit(self.map_unit)
    }

    /// converts a user distance threshold into map units
    pub fn distance_to_map_units(&self, distance: i64) -> f64 {
        self.distance_unit.convert(distance as f64, self.map_unit)
    }

    pub fn get_criterion_mut(&mut self, name: &str) -> Result<&mut CriterionConfig, SuitabilityError> {
        let known = self.criteria.iter().map(|c| c.name.clone()).collect::<Vec<_>>();
        self.criteria
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| {
                SuitabilityError::ConfigurationError(format!(
                    "unknown criterion '{name}', expected one of [{}]",
                    known.join(", ")
                ))
            })
    }

    /// replaces the distances and weights of named criteria with values from the
    /// command line.
    pub fn apply_overrides(
        &mut self,
        distances: &[(String, String)],
        weights: &[(String, String)],
    ) -> Result<(), SuitabilityError> {
        for (name, value) in distances.iter() {
            let criterion = self.get_criterion_mut(name)?;
            criterion.distances = Some(DistanceInput::Text(value.clone()));
        }
        for (name, value) in weights.iter() {
            let criterion = self.get_criterion_mut(name)?;
            criterion.weight = Some(WeightInput::Text(value.clone()));
        }
        Ok(())
    }
}

impl TryFrom<&String> for SuitabilityConfiguration {
    type Error = SuitabilityError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                SuitabilityError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                SuitabilityError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                SuitabilityError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                SuitabilityError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })
        } else {
            Err(SuitabilityError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )))
        }
    }
}
