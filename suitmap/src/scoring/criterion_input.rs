use suitmap_core::model::ScoreBand;

/// an active criterion with parsed user parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CriterionInput {
    pub name: String,
    pub layer: String,
    /// thresholds in the order supplied, in the configured distance unit
    pub distances: Vec<i64>,
    pub weight: u32,
}

impl CriterionInput {
    pub fn bands(&self) -> Vec<ScoreBand> {
        ScoreBand::from_distances(&self.distances)
    }
}
