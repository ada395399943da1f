use super::Remap;
use serde::{Deserialize, Serialize};

/// a distance threshold paired with the score assigned to cells that fall
/// inside the ring ending at that threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub distance: i64,
    pub score: i64,
}

impl ScoreBand {
    /// score of the first (closest) band
    pub const TOP_SCORE: i64 = 5;

    /// assigns a score to each distance by its position in the list. the first
    /// distance scores [`ScoreBand::TOP_SCORE`] and each following distance scores
    /// one less. scores are not clamped, so lists longer than five bands produce
    /// zero and negative scores.
    ///
    /// # Arguments
    ///
    /// * `distances` - thresholds in the order supplied by the user
    ///
    /// # Returns
    ///
    /// * one band per distance, in input order
    pub fn from_distances(distances: &[i64]) -> Vec<ScoreBand> {
        distances
            .iter()
            .zip(0_i64..)
            .map(|(distance, index)| ScoreBand {
                distance: *distance,
                score: Self::TOP_SCORE - index,
            })
            .collect()
    }

    /// builds the table that reclassifies raw distance cells into band scores.
    pub fn remap(bands: &[ScoreBand]) -> Remap {
        Remap::new(
            bands
                .iter()
                .map(|b| (Some(b.distance), Some(b.score)))
                .collect(),
        )
    }
}
