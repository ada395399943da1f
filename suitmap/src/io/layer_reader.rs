use super::{Layer, LayerFeature};
use crate::SuitabilityError;
use geo::Geometry;
use geojson::GeoJson;
use itertools::Itertools;
use serde_json::{json, Map, Value};
use std::{collections::HashMap, path::Path, str::FromStr};
use wkt::TryFromWkt;

/// file extensions tried, in order, when resolving a layer name
pub const LAYER_EXTENSIONS: [&str; 4] = ["geojson", "json", "csv", "shp"];

/// column of a CSV layer holding WKT geometries
pub const GEOMETRY_COLUMN: &str = "geometry";

/// finds and reads the layer `name` inside `directory`.
///
/// # Arguments
///
/// * `directory` - input directory of the run
/// * `name`      - layer name, the file stem of the layer file
///
/// # Returns
///
/// * the layer's features, or an error if no file matches or it cannot be read
pub fn read_layer(directory: &Path, name: &str) -> Result<Layer, SuitabilityError> {
    let found = LAYER_EXTENSIONS
        .iter()
        .map(|ext| directory.join(format!("{name}.{ext}")))
        .find(|p| p.is_file());
    let path = found.ok_or_else(|| SuitabilityError::LayerReadError {
        layer: name.to_string(),
        message: format!(
            "no file named {name}.[{}] in {}",
            LAYER_EXTENSIONS.iter().join("|"),
            directory.display()
        ),
    })?;
    log::debug!("reading layer '{name}' from {}", path.display());
    let features = match path.extension().and_then(|e| e.to_str()) {
        Some("csv") => read_csv_features(&path),
        Some("shp") => read_shapefile_features(&path),
        _ => read_geojson_features(&path),
    }
    .map_err(|message| SuitabilityError::LayerReadError {
        layer: name.to_string(),
        message,
    })?;
    log::info!("read {} features from layer '{name}'", features.len());
    Ok(Layer::new(name, features))
}

/// reads a GeoJSON FeatureCollection, Feature or Geometry
pub fn read_geojson_features(path: &Path) -> Result<Vec<LayerFeature>, String> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("unable to load file {}: {e}", path.display()))?;
    let dataset = GeoJson::from_str(&contents)
        .map_err(|e| format!("failed to read file {} as GeoJSON: {e}", path.display()))?;
    let features = match dataset {
        GeoJson::FeatureCollection(fc) => fc.features,
        GeoJson::Feature(f) => vec![f],
        GeoJson::Geometry(g) => vec![geojson::Feature {
            bbox: None,
            geometry: Some(g),
            id: None,
            properties: None,
            foreign_members: None,
        }],
    };
    features
        .into_iter()
        .enumerate()
        .map(|(idx, feature)| {
            let geom = feature
                .geometry
                .ok_or_else(|| format!("feature {idx} has no geometry which is invalid"))?;
            let geometry: Geometry<f64> = geom
                .try_into()
                .map_err(|e| format!("failed to decode geometry for feature {idx}: {e}"))?;
            Ok(LayerFeature::new(
                geometry,
                feature.properties.unwrap_or_default(),
            ))
        })
        .collect()
}

/// reads a CSV with a WKT `geometry` column. other columns become string properties.
pub fn read_csv_features(path: &Path) -> Result<Vec<LayerFeature>, String> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| e.to_string())?;
    let header_record = reader.headers().map_err(|e| e.to_string())?.clone();
    let headers = header_record
        .iter()
        .enumerate()
        .map(|(i, s)| (s, i))
        .collect::<HashMap<_, _>>();
    let geometry_idx = *headers
        .get(GEOMETRY_COLUMN)
        .ok_or_else(|| format!("file missing {GEOMETRY_COLUMN} column"))?;

    reader
        .records()
        .enumerate()
        .map(|(idx, r)| {
            let row = r.map_err(|e| e.to_string())?;
            let geometry_str = row
                .get(geometry_idx)
                .ok_or_else(|| format!("row {idx} missing geometry index"))?;
            let geometry: Geometry<f64> = Geometry::try_from_wkt_str(geometry_str)
                .map_err(|e| format!("row {idx} has invalid WKT: {e}"))?;
            let properties = header_record
                .iter()
                .zip(row.iter())
                .enumerate()
                .filter(|(i, _)| *i != geometry_idx)
                .map(|(_, (k, v))| (k.to_string(), Value::String(v.to_string())))
                .collect::<Map<_, _>>();
            Ok(LayerFeature::new(geometry, properties))
        })
        .collect()
}

/// reads point, multipoint and polygon shapes from an ESRI shapefile along with
/// their dBase attributes.
pub fn read_shapefile_features(path: &Path) -> Result<Vec<LayerFeature>, String> {
    let rows =
        shapefile::read(path).map_err(|e| format!("failed reading '{}': {e}", path.display()))?;

    let mut processed = vec![];
    for (idx, (shape, record)) in rows.into_iter().enumerate() {
        let geometry = match shape {
            shapefile::Shape::Point(p) => Geometry::Point(geo::Point::new(p.x, p.y)),
            shapefile::Shape::PointM(p) => Geometry::Point(geo::Point::new(p.x, p.y)),
            shapefile::Shape::PointZ(p) => Geometry::Point(geo::Point::new(p.x, p.y)),
            shapefile::Shape::Multipoint(mp) => Geometry::MultiPoint(
                mp.points()
                    .iter()
                    .map(|p| geo::Point::new(p.x, p.y))
                    .collect(),
            ),
            shapefile::Shape::Polygon(generic_polygon) => {
                let mp: geo::MultiPolygon<f64> = generic_polygon.try_into().map_err(|e| {
                    format!("failed to convert shapefile polygon at row {idx}: {e}")
                })?;
                Geometry::MultiPolygon(mp)
            }
            shapefile::Shape::PolygonM(generic_polygon) => {
                let mp: geo::MultiPolygon<f64> = generic_polygon.try_into().map_err(|e| {
                    format!("failed to convert shapefile polygon at row {idx}: {e}")
                })?;
                Geometry::MultiPolygon(mp)
            }
            _ => {
                return Err(format!(
                    "unexpected shape type {} found at row {}, must be a point or polygon",
                    shape.shapetype(),
                    idx
                ))
            }
        };
        processed.push(LayerFeature::new(geometry, record_properties(record)));
    }
    Ok(processed)
}

/// converts a dBase record into feature properties. empty fields become null.
fn record_properties(record: shapefile::dbase::Record) -> Map<String, Value> {
    use shapefile::dbase::FieldValue;
    record
        .into_iter()
        .map(|(name, field)| {
            let value = match field {
                FieldValue::Character(s) => s.map(Value::String).unwrap_or(Value::Null),
                FieldValue::Memo(s) => Value::String(s),
                FieldValue::Numeric(n) => n.map(|n| json!(n)).unwrap_or(Value::Null),
                FieldValue::Float(n) => n.map(|n| json!(f64::from(n))).unwrap_or(Value::Null),
                FieldValue::Double(n) | FieldValue::Currency(n) => json!(n),
                FieldValue::Integer(n) => json!(n),
                FieldValue::Logical(b) => b.map(Value::Bool).unwrap_or(Value::Null),
                other => Value::String(format!("{other:?}")),
            };
            (name, value)
        })
        .collect()
}
