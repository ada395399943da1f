use crate::{
    config::SuitabilityConfiguration,
    io::{ascii_grid, geojson_ops, layer_reader, RunWorkspace},
    scoring::CriterionScorer,
    symbology::UniqueValueRenderer,
    SuitabilityError,
};
use geo::BoundingRect;
use serde_json::json;
use std::path::{Path, PathBuf};
use suitmap_core::{
    engine::GeoprocessingEngine,
    model::{GridSpec, OverlayTable},
    util::geo_utils,
};

/// residual layer holding one point per data cell of the combined raster
pub const OVERLAY_POINTS_LAYER: &str = "weighted_overlay_points";

/// what a suitability run produced
#[derive(Debug, Clone)]
pub struct SuitabilityRunSummary {
    /// criteria entered into the overlay, in processing order
    pub contributions: Vec<String>,
    pub skipped: Vec<String>,
    pub scored_buildings: usize,
    pub unscored_buildings: usize,
    pub overlay_path: PathBuf,
    pub buildings_path: PathBuf,
    pub style_path: PathBuf,
}

/// runs the suitability model over a workspace.
///
/// criteria are visited in configuration order. each one with both distances
/// and a weight is buffered, clipped to the boundary, rasterized and
/// reclassified into a contribution; the others are skipped. contributions are
/// combined by weighted overlay, the result is sampled to points and joined
/// onto the buildings, which are then colored by score.
///
/// # Arguments
///
/// * `root`   - workspace directory, the configured directories are relative to it
/// * `conf`   - run configuration
/// * `engine` - geoprocessing backend
///
/// # Returns
///
/// * a summary of the run, or the first error met. no criterion being active is
///   an error.
pub fn run_suitability<E: GeoprocessingEngine>(
    root: &Path,
    conf: &SuitabilityConfiguration,
    engine: &E,
) -> Result<SuitabilityRunSummary, SuitabilityError> {
    let workspace = RunWorkspace::new(root, conf);
    workspace.create_directories()?;

    log::info!("reading analysis boundary '{}'", conf.boundary_layer);
    let boundary_layer = layer_reader::read_layer(&workspace.input, &conf.boundary_layer)?;
    let boundary = geo_utils::dissolve_polygonal(&boundary_layer.geometries())?;
    let extent = boundary
        .bounding_rect()
        .ok_or_else(|| SuitabilityError::LayerReadError {
            layer: conf.boundary_layer.clone(),
            message: String::from("boundary has no polygonal extent"),
        })?;
    let grid = GridSpec::covering(&extent, conf.cell_size)?;
    log::info!(
        "analysis grid has {} x {} cells of size {}",
        grid.n_cols,
        grid.n_rows,
        grid.cell_size
    );

    let scorer = CriterionScorer::new(engine, conf, &boundary, grid, Some(&workspace));
    let mut skipped: Vec<String> = vec![];
    let table = conf.criteria.iter().try_fold(
        OverlayTable::new(conf.scale),
        |mut table, criterion| -> Result<OverlayTable, SuitabilityError> {
            match criterion.resolve()? {
                None => {
                    log::info!(
                        "{} skipped: distances and weight must both be provided",
                        criterion.name
                    );
                    skipped.push(criterion.name.clone());
                }
                Some(input) => {
                    log::info!("processing {} layer..", input.name);
                    let layer = layer_reader::read_layer(&workspace.input, &input.layer)?;
                    let contribution = scorer.score(&input, &layer.geometries())?;
                    table.push(contribution);
                }
            }
            Ok(table)
        },
    )?;
    if table.is_empty() {
        return Err(SuitabilityError::NoActiveCriteria);
    }

    log::info!("weighted overlay of [{}]", table.names().join(", "));
    let overlay = engine.weighted_combine(&table)?;
    let overlay_path = workspace.output_path(&conf.overlay_output, "asc");
    ascii_grid::write_ascii_grid(&overlay_path, &overlay)?;

    log::info!("converting weighted overlay to points");
    let samples = engine.raster_to_points(&overlay);
    geojson_ops::write_feature_collection(
        &workspace.residual_path(OVERLAY_POINTS_LAYER, "geojson"),
        geojson_ops::sample_features(&samples),
    )?;

    log::info!("joining suitability onto buildings '{}'", conf.buildings_layer);
    let buildings = layer_reader::read_layer(&workspace.input, &conf.buildings_layer)?;
    let scores = engine.spatial_join_max(
        &buildings.geometries(),
        &samples,
        conf.search_radius_map_units(),
    )?;

    let renderer = UniqueValueRenderer::default();
    let mut scored_buildings = 0;
    let features = buildings
        .features
        .iter()
        .zip(scores.iter())
        .map(|(building, score)| {
            let mut properties = building.properties.clone();
            properties.insert(renderer.field.clone(), json!(score));
            if score.is_some() {
                scored_buildings += 1;
            }
            renderer.apply(&mut properties);
            geojson_ops::to_feature(&building.geometry, properties)
        })
        .collect::<Vec<_>>();

    let buildings_path = workspace.output_path(&conf.output_layer, "geojson");
    geojson_ops::write_feature_collection(&buildings_path, features)?;
    let style_path = workspace.output_path(&format!("{}.style", conf.output_layer), "json");
    renderer.write(&style_path)?;

    let summary = SuitabilityRunSummary {
        contributions: table.names().iter().map(|n| n.to_string()).collect(),
        skipped,
        scored_buildings,
        unscored_buildings: buildings.len() - scored_buildings,
        overlay_path,
        buildings_path,
        style_path,
    };
    log::info!(
        "scored {} of {} buildings, results written to {}",
        summary.scored_buildings,
        buildings.len(),
        workspace.output.display()
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DistanceInput, WeightInput},
        engine::NativeEngine,
        io::layer_reader::read_geojson_features,
    };
    use serde_json::Value;

    const ECONOMIC_LAYER: &str = "extracted_point_economic_zones_reproj";
    const CRITERION_LAYERS: [&str; 6] = [
        ECONOMIC_LAYER,
        "extracted_point_osm_park_poly_reproj",
        "extracted_point_osm_bus_stops_reproj",
        "extracted_point_osm_restaurants_reproj",
        "extracted_point_osm_bicycle_parking_reproj",
        "extracted_point_osm_schools_reproj",
    ];

    fn write_layer(root: &Path, name: &str, features: Vec<Value>) {
        let collection = json!({ "type": "FeatureCollection", "features": features });
        let path = root.join("geodatabase/input").join(format!("{name}.geojson"));
        std::fs::write(path, collection.to_string()).unwrap();
    }

    fn point(x: f64, y: f64) -> Value {
        json!({
            "type": "Feature",
            "properties": {},
            "geometry": { "type": "Point", "coordinates": [x, y] }
        })
    }

    fn square(id: &str, x_min: f64, y_min: f64, size: f64) -> Value {
        let (x_max, y_max) = (x_min + size, y_min + size);
        json!({
            "type": "Feature",
            "properties": { "id": id },
            "geometry": {
                "type": "Polygon",
                "coordinates": [[[x_min, y_min], [x_max, y_min], [x_max, y_max], [x_min, y_max], [x_min, y_min]]]
            }
        })
    }

    /// a 2 km square city with amenities at its center, one building next to
    /// them and one in the far corner
    fn salzburg_workspace() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("geodatabase/input")).unwrap();
        write_layer(dir.path(), "salzburg_aoi", vec![square("aoi", 0.0, 0.0, 2000.0)]);
        write_layer(
            dir.path(),
            "salzburg_buildings",
            vec![
                square("center", 1040.0, 1040.0, 20.0),
                square("corner", 10.0, 10.0, 20.0),
            ],
        );
        for layer in CRITERION_LAYERS {
            write_layer(dir.path(), layer, vec![point(1000.0, 1000.0)]);
        }
        dir
    }

    fn test_conf() -> SuitabilityConfiguration {
        let mut conf = SuitabilityConfiguration::default();
        conf.cell_size = 100.0;
        conf.parallelize = false;
        conf
    }

    type Overrides = Vec<(String, String)>;

    fn overrides(names: &[&str], distances: &str, weight: &str) -> (Overrides, Overrides) {
        let d = names.iter().map(|n| (n.to_string(), distances.to_string())).collect();
        let w = names.iter().map(|n| (n.to_string(), weight.to_string())).collect();
        (d, w)
    }

    fn building_properties(path: &Path) -> Vec<serde_json::Map<String, Value>> {
        read_geojson_features(path)
            .unwrap()
            .into_iter()
            .map(|f| f.properties)
            .collect()
    }

    #[test]
    fn single_criterion_run() {
        let ws = salzburg_workspace();
        let mut conf = test_conf();
        let (d, w) = overrides(&["economic"], "200;500;1000", "3");
        conf.apply_overrides(&d, &w).unwrap();

        let summary = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf)).unwrap();
        assert_eq!(summary.contributions, vec![String::from("economic")]);
        assert_eq!(
            summary.skipped,
            vec!["park", "bus", "restaurant", "bicycle", "school"]
        );
        assert_eq!(summary.scored_buildings, 1);
        assert_eq!(summary.unscored_buildings, 1);

        let residuals = ws.path().join("geodatabase/residuals");
        for stem in ["economic_buffer.geojson", "economic_buffer_clip.geojson"] {
            assert!(residuals.join(stem).is_file(), "missing {stem}");
        }
        for stem in ["economic_buffer_raster.asc", "economic_reclass.asc"] {
            assert!(residuals.join(stem).is_file(), "missing {stem}");
        }
        assert!(residuals.join("weighted_overlay_points.geojson").is_file());
        assert!(!residuals.join("park_buffer.geojson").exists());

        // a single contribution passes through the overlay unchanged
        let reclass = ascii_grid::read_ascii_grid(&residuals.join("economic_reclass.asc")).unwrap();
        let overlay = ascii_grid::read_ascii_grid(&summary.overlay_path).unwrap();
        assert_eq!(reclass, overlay);
        assert_eq!(overlay.distinct_values(), vec![3, 4, 5]);

        let buildings = building_properties(&summary.buildings_path);
        assert_eq!(buildings[0].get("id"), Some(&json!("center")));
        assert_eq!(buildings[0].get("grid_code"), Some(&json!(5)));
        assert_eq!(buildings[0].get("fill"), Some(&json!("#2cba00")));
        assert_eq!(buildings[0].get("fill-opacity"), Some(&json!(1.0)));
        assert_eq!(buildings[1].get("grid_code"), Some(&Value::Null));
        assert_eq!(buildings[1].get("fill"), None);
    }

    #[test]
    fn all_criteria_keep_their_order() {
        let ws = salzburg_workspace();
        let mut conf = test_conf();
        let names = ["school", "economic", "bus", "park", "bicycle", "restaurant"];
        let (d, w) = overrides(&names, "100;200;300;400;500", "1");
        conf.apply_overrides(&d, &w).unwrap();

        let summary = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf)).unwrap();
        assert_eq!(
            summary.contributions,
            vec!["economic", "park", "bus", "restaurant", "bicycle", "school"]
        );
        assert!(summary.skipped.is_empty());

        let overlay = ascii_grid::read_ascii_grid(&summary.overlay_path).unwrap();
        assert_eq!(overlay.distinct_values(), vec![1, 2, 3, 4, 5]);

        let style: UniqueValueRenderer =
            serde_json::from_str(&std::fs::read_to_string(&summary.style_path).unwrap()).unwrap();
        assert_eq!(style.field, "grid_code");
        assert_eq!(style.classes.len(), 5);
        assert!(summary
            .style_path
            .ends_with("geodatabase/output/salzburg_buildings_suitability.style.json"));
    }

    #[test]
    fn configured_subset_is_processed_in_order() {
        let ws = salzburg_workspace();
        let mut conf = test_conf();
        for criterion in conf.criteria.iter_mut() {
            if ["bicycle", "park"].contains(&criterion.name.as_str()) {
                criterion.distances = Some(DistanceInput::List(vec![300, 600]));
                criterion.weight = Some(WeightInput::Integer(2));
            }
        }
        let summary = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf)).unwrap();
        assert_eq!(summary.contributions, vec!["park", "bicycle"]);
    }

    #[test]
    fn no_active_criteria_fails() {
        let ws = salzburg_workspace();
        let mut conf = test_conf();
        // distances without a weight leave the criterion inactive
        conf.apply_overrides(
            &[(String::from("economic"), String::from("200;500"))],
            &[],
        )
        .unwrap();
        let result = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf));
        assert!(matches!(result, Err(SuitabilityError::NoActiveCriteria)));
    }

    #[test]
    fn invalid_weight_aborts_run() {
        let ws = salzburg_workspace();
        let mut conf = test_conf();
        let (d, w) = overrides(&["economic"], "200;500", "heavy");
        conf.apply_overrides(&d, &w).unwrap();
        let result = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf));
        assert!(matches!(
            result,
            Err(SuitabilityError::CriterionInputError { .. })
        ));
    }

    #[test]
    fn missing_layer_of_active_criterion_fails() {
        let ws = salzburg_workspace();
        std::fs::remove_file(
            ws.path()
                .join("geodatabase/input")
                .join(format!("{ECONOMIC_LAYER}.geojson")),
        )
        .unwrap();
        let mut conf = test_conf();
        let (d, w) = overrides(&["economic"], "200;500", "1");
        conf.apply_overrides(&d, &w).unwrap();
        let result = run_suitability(ws.path(), &conf, &NativeEngine::from(&conf));
        match result {
            Err(SuitabilityError::LayerReadError { layer, .. }) => {
                assert_eq!(layer, ECONOMIC_LAYER)
            }
            other => panic!("expected layer read error, found {other:?}"),
        }
    }
}
