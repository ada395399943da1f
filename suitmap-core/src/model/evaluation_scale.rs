use serde::{Deserialize, Serialize};

/// the discrete scale shared by every criterion and the combined result,
/// written as `[from, to, step]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationScale {
    pub from: i64,
    pub to: i64,
    pub step: i64,
}

impl Default for EvaluationScale {
    fn default() -> Self {
        Self {
            from: 1,
            to: 5,
            step: 1,
        }
    }
}

impl EvaluationScale {
    /// all values on the scale, ascending.
    pub fn values(&self) -> impl Iterator<Item = i64> {
        let step = self.step.max(1) as usize;
        (self.from..=self.to).step_by(step)
    }

    /// bounds a value to [from, to].
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.from, self.to)
    }
}
