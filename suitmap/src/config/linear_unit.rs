use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uom::si::f64::Length;
use uom::si::length::{foot, kilometer, meter, mile};

/// units accepted for buffer distances, search radii and the map projection.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LinearUnit {
    Meters,
    Kilometers,
    Feet,
    Miles,
}

impl LinearUnit {
    pub fn to_length(&self, value: f64) -> Length {
        match self {
            LinearUnit::Meters => Length::new::<meter>(value),
            LinearUnit::Kilometers => Length::new::<kilometer>(value),
            LinearUnit::Feet => Length::new::<foot>(value),
            LinearUnit::Miles => Length::new::<mile>(value),
        }
    }

    pub fn from_length(&self, length: Length) -> f64 {
        match self {
            LinearUnit::Meters => length.get::<meter>(),
            LinearUnit::Kilometers => length.get::<kilometer>(),
            LinearUnit::Feet => length.get::<foot>(),
            LinearUnit::Miles => length.get::<mile>(),
        }
    }

    /// converts `value` in this unit into `target` units
    pub fn convert(&self, value: f64, target: LinearUnit) -> f64 {
        target.from_length(self.to_length(value))
    }
}

impl Display for LinearUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LinearUnit::Meters => "meters",
            LinearUnit::Kilometers => "kilometers",
            LinearUnit::Feet => "feet",
            LinearUnit::Miles => "miles",
        };
        write!(f, "{s}")
    }
}

/// a length tagged with its unit
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct LinearDistance {
    pub value: f64,
    pub unit: LinearUnit,
}

impl LinearDistance {
    pub fn new(value: f64, unit: LinearUnit) -> LinearDistance {
        LinearDistance { value, unit }
    }

    pub fn in_unit(&self, unit: LinearUnit) -> f64 {
        self.unit.convert(self.value, unit)
    }
}

impl Display for LinearDistance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feet_to_meters() {
        let radius = LinearDistance::new(32.0, LinearUnit::Feet);
        let meters = radius.in_unit(LinearUnit::Meters);
        assert!((meters - 9.7536).abs() < 1e-6, "found {meters}");
    }

    #[test]
    fn kilometers_to_meters() {
        let meters = LinearUnit::Kilometers.convert(1.5, LinearUnit::Meters);
        assert!((meters - 1500.0).abs() < 1e-9);
    }

    #[test]
    fn same_unit_is_unchanged() {
        assert_eq!(LinearUnit::Meters.convert(200.0, LinearUnit::Meters), 200.0);
    }

    #[test]
    fn deserialize_snake_case() {
        let d: LinearDistance = serde_json::from_str(r#"{"value": 32, "unit": "feet"}"#).unwrap();
        assert_eq!(d, LinearDistance::new(32.0, LinearUnit::Feet));
    }
}
