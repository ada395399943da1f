use super::{EvaluationScale, OverlayContribution};

/// contributions in the order their criteria were visited, plus the scale
/// the combined result is evaluated on.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayTable {
    pub scale: EvaluationScale,
    contributions: Vec<OverlayContribution>,
}

impl OverlayTable {
    pub fn new(scale: EvaluationScale) -> OverlayTable {
        OverlayTable {
            scale,
            contributions: vec![],
        }
    }

    /// appends a contribution, keeping visitation order.
    pub fn with(mut self, contribution: OverlayContribution) -> OverlayTable {
        self.contributions.push(contribution);
        self
    }

    pub fn push(&mut self, contribution: OverlayContribution) {
        self.contributions.push(contribution);
    }

    pub fn contributions(&self) -> &[OverlayContribution] {
        &self.contributions
    }

    pub fn names(&self) -> Vec<&str> {
        self.contributions.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn total_weight(&self) -> u64 {
        self.contributions.iter().map(|c| c.weight as u64).sum()
    }

    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }
}
