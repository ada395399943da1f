mod criterion_config;
mod linear_unit;
mod suitability_config;

pub use criterion_config::{CriterionConfig, DistanceInput, WeightInput};
pub use linear_unit::{LinearDistance, LinearUnit};
pub use suitability_config::SuitabilityConfiguration;
