use super::Rgba;
use crate::SuitabilityError;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::path::Path;

/// a literal field value and the color drawn for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueValueClass {
    pub value: String,
    pub label: String,
    pub color: Rgba,
}

/// colors features by the literal value of one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniqueValueRenderer {
    pub field: String,
    pub classes: Vec<UniqueValueClass>,
}

impl Default for UniqueValueRenderer {
    /// the five-step suitability ramp on `grid_code`, red (1) to green (5)
    fn default() -> Self {
        let ramp = [
            ("1", "red", Rgba::new(255, 0, 0, 100)),
            ("2", "orange", Rgba::new(255, 167, 0, 100)),
            ("3", "yellow", Rgba::new(255, 244, 0, 100)),
            ("4", "light green", Rgba::new(163, 255, 0, 100)),
            ("5", "green", Rgba::new(44, 186, 0, 100)),
        ];
        let classes = ramp
            .into_iter()
            .map(|(value, label, color)| UniqueValueClass {
                value: value.to_string(),
                label: label.to_string(),
                color,
            })
            .collect();
        UniqueValueRenderer {
            field: String::from(Self::SCORE_FIELD),
            classes,
        }
    }
}

impl UniqueValueRenderer {
    pub const SCORE_FIELD: &'static str = "grid_code";
    pub const FILL_PROPERTY: &'static str = "fill";
    pub const FILL_OPACITY_PROPERTY: &'static str = "fill-opacity";

    pub fn color_for(&self, value: &str) -> Option<&Rgba> {
        self.classes
            .iter()
            .find(|c| c.value == value)
            .map(|c| &c.color)
    }

    /// sets fill properties on a feature from the value of the renderer field.
    /// features whose value matches no class are left uncolored.
    ///
    /// # Returns
    ///
    /// * true if a class matched
    pub fn apply(&self, properties: &mut Map<String, Value>) -> bool {
        let literal = match properties.get(&self.field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => return false,
        };
        match self.color_for(&literal) {
            Some(color) => {
                properties.insert(String::from(Self::FILL_PROPERTY), json!(color.hex()));
                properties.insert(
                    String::from(Self::FILL_OPACITY_PROPERTY),
                    json!(color.opacity()),
                );
                true
            }
            None => false,
        }
    }

    /// writes the renderer as a JSON style document
    pub fn write(&self, path: &Path) -> Result<(), SuitabilityError> {
        let file = std::fs::File::create(path).map_err(|e| SuitabilityError::ArtifactWriteError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
