mod cli_key_value;
mod suitability_app;
mod suitability_run;

pub use cli_key_value::parse_key_value;
pub use suitability_app::{SuitabilityApp, SuitabilityOperation};
pub use suitability_run::{run_suitability, SuitabilityRunSummary, OVERLAY_POINTS_LAYER};
