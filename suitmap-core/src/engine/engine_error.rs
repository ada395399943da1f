use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("unsupported geometry for {operation}: {geometry}")]
    UnsupportedGeometry { operation: String, geometry: String },
    #[error("invalid raster grid: {0}")]
    InvalidGrid(String),
    #[error("raster '{0}' does not share the grid of the first overlay input")]
    GridMismatch(String),
    #[error("weighted overlay requires at least one input raster")]
    EmptyOverlayTable,
    #[error("weighted overlay inputs have a total weight of zero")]
    ZeroTotalWeight,
    #[error("buffer failed at distance {distance}: {message}")]
    BufferError { distance: f64, message: String },
    #[error("{0}")]
    InternalError(String),
}
