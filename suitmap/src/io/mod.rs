pub mod ascii_grid;
pub mod geojson_ops;
mod layer;
pub mod layer_reader;
mod run_workspace;

pub use layer::{Layer, LayerFeature};
pub use run_workspace::RunWorkspace;
