use crate::SuitabilityError;
use geo::Geometry;
use geojson::{Feature, FeatureCollection, GeoJson};
use serde_json::{json, Map, Value};
use std::path::Path;
use suitmap_core::model::{RingBuffer, SamplePoint};

/// builds a GeoJSON feature from a geometry and its properties
pub fn to_feature(geometry: &Geometry<f64>, properties: Map<String, Value>) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::from(geometry))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

/// writes `features` to `path` as a FeatureCollection.
pub fn write_feature_collection(path: &Path, features: Vec<Feature>) -> Result<(), SuitabilityError> {
    let collection = GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    });
    std::fs::write(path, collection.to_string()).map_err(|e| {
        SuitabilityError::ArtifactWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

/// ring buffers as features with a `distance` attribute holding the ring label
pub fn ring_features(rings: &[RingBuffer]) -> Vec<Feature> {
    rings
        .iter()
        .map(|ring| {
            let mut properties = Map::new();
            properties.insert(String::from("distance"), json!(ring.label));
            to_feature(&Geometry::MultiPolygon(ring.geometry.clone()), properties)
        })
        .collect()
}

/// sample points as features with a `grid_code` attribute
pub fn sample_features(samples: &[SamplePoint]) -> Vec<Feature> {
    samples
        .iter()
        .map(|s| {
            let mut properties = Map::new();
            properties.insert(String::from("grid_code"), json!(s.grid_code));
            to_feature(&Geometry::Point(s.point), properties)
        })
        .collect()
}
