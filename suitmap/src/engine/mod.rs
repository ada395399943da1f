pub mod buffer;
pub mod join_ops;
mod native_engine;
pub mod overlay_ops;
pub mod rasterize_ops;

pub use buffer::Buffer;
pub use native_engine::NativeEngine;
