use suitmap_core::engine::EngineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuitabilityError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("invalid input for criterion '{name}': {message}")]
    CriterionInputError { name: String, message: String },
    #[error("failure processing criterion '{name}': {source}")]
    CriterionFailed { name: String, source: EngineError },
    #[error("failure reading layer '{layer}': {message}")]
    LayerReadError { layer: String, message: String },
    #[error("failure writing {path}: {message}")]
    ArtifactWriteError { path: String, message: String },
    #[error("no criteria were processed, each criterion needs both distances and a weight")]
    NoActiveCriteria,
    #[error("geoprocessing failure: {source}")]
    EngineError {
        #[from]
        source: EngineError,
    },
    #[error("failure reading or writing files: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
}
