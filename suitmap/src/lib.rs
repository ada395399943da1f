pub mod app;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod scoring;
pub mod symbology;

pub use error::SuitabilityError;
