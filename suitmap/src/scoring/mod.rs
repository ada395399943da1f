mod criterion_input;
mod criterion_scorer;

pub use criterion_input::CriterionInput;
pub use criterion_scorer::CriterionScorer;
