mod rgba;
mod unique_value_renderer;

pub use rgba::Rgba;
pub use unique_value_renderer::{UniqueValueClass, UniqueValueRenderer};
