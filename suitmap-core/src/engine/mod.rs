mod engine_error;
mod geoprocessing_engine;

pub use engine_error::EngineError;
pub use geoprocessing_engine::GeoprocessingEngine;
