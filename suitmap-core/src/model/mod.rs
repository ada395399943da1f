mod evaluation_scale;
mod grid_spec;
mod overlay_contribution;
mod overlay_table;
mod raster;
mod remap;
mod ring_buffer;
mod sample_point;
mod score_band;

pub use evaluation_scale::EvaluationScale;
pub use grid_spec::GridSpec;
pub use overlay_contribution::OverlayContribution;
pub use overlay_table::OverlayTable;
pub use raster::{CellValue, Raster};
pub use remap::Remap;
pub use ring_buffer::RingBuffer;
pub use sample_point::SamplePoint;
pub use score_band::ScoreBand;
