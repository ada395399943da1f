use crate::{scoring::CriterionInput, SuitabilityError};
use serde::{Deserialize, Serialize};

/// one row of the criterion table: a named proximity criterion, the input layer
/// holding its features and the user parameters for it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CriterionConfig {
    pub name: String,
    pub layer: String,
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    #[serde(default)]
    pub distances: Option<DistanceInput>,
    #[serde(default)]
    pub weight: Option<WeightInput>,
}

fn enabled_default() -> bool {
    true
}

/// buffer distances as either a semicolon-delimited string ("200;500;1000")
/// or a list of integers.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum DistanceInput {
    List(Vec<i64>),
    Text(String),
}

/// a criterion weight as either an integer or a string holding one.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(untagged)]
pub enum WeightInput {
    Integer(i64),
    Text(String),
}

impl CriterionConfig {
    pub fn new(name: &str, layer: &str) -> CriterionConfig {
        CriterionConfig {
            name: name.to_string(),
            layer: layer.to_string(),
            enabled: true,
            distances: None,
            weight: None,
        }
    }

    /// turns the user parameters into a processable criterion.
    ///
    /// # Returns
    ///
    /// * `Ok(None)` if the criterion is disabled or either the distances or the
    ///   weight were not provided, in which case it is skipped
    /// * an error if a provided value is not an integer
    pub fn resolve(&self) -> Result<Option<CriterionInput>, SuitabilityError> {
        if !self.enabled {
            return Ok(None);
        }
        let (distances, weight) = match (&self.distances, &self.weight) {
            (Some(d), Some(w)) if !d.is_blank() && !w.is_blank() => (d, w),
            _ => return Ok(None),
        };
        Ok(Some(CriterionInput {
            name: self.name.clone(),
            layer: self.layer.clone(),
            distances: distances.parse(&self.name)?,
            weight: weight.parse(&self.name)?,
        }))
    }
}

impl DistanceInput {
    pub fn is_blank(&self) -> bool {
        match self {
            DistanceInput::List(values) => values.is_empty(),
            DistanceInput::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn parse(&self, criterion: &str) -> Result<Vec<i64>, SuitabilityError> {
        match self {
            DistanceInput::List(values) => Ok(values.clone()),
            DistanceInput::Text(s) => s
                .split(';')
                .map(|v| {
                    v.trim()
                        .parse::<i64>()
                        .map_err(|_| SuitabilityError::CriterionInputError {
                            name: criterion.to_string(),
                            message: format!("distance '{v}' in '{s}' is not an integer"),
                        })
                })
                .collect(),
        }
    }
}

impl WeightInput {
    pub fn is_blank(&self) -> bool {
        match self {
            WeightInput::Integer(_) => false,
            WeightInput::Text(s) => s.trim().is_empty(),
        }
    }

    pub fn parse(&self, criterion: &str) -> Result<u32, SuitabilityError> {
        match self {
            WeightInput::Integer(i) => u32::try_from(*i).map_err(|_| invalid_weight(criterion, i)),
            WeightInput::Text(s) => s
                .trim()
                .parse::<u32>()
                .map_err(|_| invalid_weight(criterion, s)),
        }
    }
}

fn invalid_weight(criterion: &str, value: impl std::fmt::Display) -> SuitabilityError {
    SuitabilityError::CriterionInputError {
        name: criterion.to_string(),
        message: format!("weight '{value}' is not a non-negative integer"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn criterion(distances: Option<DistanceInput>, weight: Option<WeightInput>) -> CriterionConfig {
        CriterionConfig {
            distances,
            weight,
            ..CriterionConfig::new("economic", "economic_points")
        }
    }

    #[test]
    fn resolves_text_parameters() {
        let c = criterion(
            Some(DistanceInput::Text(String::from("200;500;1000"))),
            Some(WeightInput::Text(String::from("3"))),
        );
        let input = c.resolve().unwrap().expect("criterion should be active");
        assert_eq!(input.name, "economic");
        assert_eq!(input.layer, "economic_points");
        assert_eq!(input.distances, vec![200, 500, 1000]);
        assert_eq!(input.weight, 3);
    }

    #[test]
    fn missing_weight_skips() {
        let c = criterion(Some(DistanceInput::Text(String::from("200;500"))), None);
        assert!(c.resolve().unwrap().is_none());
    }

    #[test]
    fn invalid_values_are_not_parsed_for_skipped_criteria() {
        let c = criterion(Some(DistanceInput::Text(String::from("200;abc"))), None);
        assert!(c.resolve().unwrap().is_none());
        let c = criterion(None, Some(WeightInput::Text(String::from("heavy"))));
        assert!(c.resolve().unwrap().is_none());
        let c = criterion(
            Some(DistanceInput::Text(String::from("200;abc"))),
            Some(WeightInput::Text(String::from(" "))),
        );
        assert!(c.resolve().unwrap().is_none());
    }

    #[test]
    fn missing_distances_skips() {
        let c = criterion(None, Some(WeightInput::Integer(2)));
        assert!(c.resolve().unwrap().is_none());
    }

    #[test]
    fn blank_values_skip() {
        let c = criterion(
            Some(DistanceInput::Text(String::from("  "))),
            Some(WeightInput::Text(String::from("3"))),
        );
        assert!(c.resolve().unwrap().is_none());
        let c = criterion(
            Some(DistanceInput::List(vec![])),
            Some(WeightInput::Integer(3)),
        );
        assert!(c.resolve().unwrap().is_none());
        let c = criterion(
            Some(DistanceInput::List(vec![100])),
            Some(WeightInput::Text(String::new())),
        );
        assert!(c.resolve().unwrap().is_none());
    }

    #[test]
    fn disabled_skips() {
        let c = CriterionConfig {
            enabled: false,
            ..criterion(
                Some(DistanceInput::List(vec![100])),
                Some(WeightInput::Integer(1)),
            )
        };
        assert!(c.resolve().unwrap().is_none());
    }

    #[test]
    fn non_numeric_distance_fails() {
        let c = criterion(
            Some(DistanceInput::Text(String::from("200;abc"))),
            Some(WeightInput::Integer(1)),
        );
        match c.resolve() {
            Err(SuitabilityError::CriterionInputError { name, .. }) => assert_eq!(name, "economic"),
            other => panic!("expected criterion input error, found {other:?}"),
        }
    }

    #[test]
    fn negative_weight_fails() {
        let c = criterion(
            Some(DistanceInput::List(vec![100])),
            Some(WeightInput::Integer(-2)),
        );
        assert!(c.resolve().is_err());
    }

    #[test]
    fn unsorted_and_duplicate_distances_pass_through() {
        let c = criterion(
            Some(DistanceInput::Text(String::from("500;200;200"))),
            Some(WeightInput::Integer(1)),
        );
        let input = c.resolve().unwrap().unwrap();
        assert_eq!(input.distances, vec![500, 200, 200]);
    }
}
