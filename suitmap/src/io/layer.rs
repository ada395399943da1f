use geo::Geometry;
use serde_json::{Map, Value};

/// a feature read from an input layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerFeature {
    pub geometry: Geometry<f64>,
    pub properties: Map<String, Value>,
}

impl LayerFeature {
    pub fn new(geometry: Geometry<f64>, properties: Map<String, Value>) -> LayerFeature {
        LayerFeature {
            geometry,
            properties,
        }
    }
}

/// a named collection of features
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub name: String,
    pub features: Vec<LayerFeature>,
}

impl Layer {
    pub fn new(name: &str, features: Vec<LayerFeature>) -> Layer {
        Layer {
            name: name.to_string(),
            features,
        }
    }

    pub fn geometries(&self) -> Vec<Geometry<f64>> {
        self.features.iter().map(|f| f.geometry.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}
