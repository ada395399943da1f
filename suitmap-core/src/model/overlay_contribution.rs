use super::{Raster, Remap};

/// one criterion's graded raster and its influence on the combined result.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayContribution {
    /// criterion name, also the stem of the raster artifact
    pub name: String,
    pub raster: Raster,
    pub weight: u32,
    /// field of the raster carrying scores
    pub field: String,
    /// applied to each cell before weighting
    pub remap: Remap,
}

impl OverlayContribution {
    pub const VALUE_FIELD: &'static str = "Value";

    pub fn new(name: &str, raster: Raster, weight: u32, remap: Remap) -> OverlayContribution {
        OverlayContribution {
            name: name.to_string(),
            raster,
            weight,
            field: String::from(Self::VALUE_FIELD),
            remap,
        }
    }
}
