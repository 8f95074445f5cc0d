use serde::{Deserialize, Serialize};

/// Weighting applied when the per-dimension ratings are folded into one
/// final score.
///
/// Cost discipline dominates schedule discipline in the default split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingWeights {
    pub cost: f64,
    pub duration: f64,
}

impl RatingWeights {
    pub fn new(cost: f64, duration: f64) -> Self {
        Self { cost, duration }
    }

    /// Weighted average of the two dimension ratings.
    pub fn combine(&self, cost_rating: u8, duration_rating: u8) -> f64 {
        self.cost * f64::from(cost_rating) + self.duration * f64::from(duration_rating)
    }
}

impl Default for RatingWeights {
    fn default() -> Self {
        Self {
            cost: 0.7,
            duration: 0.3,
        }
    }
}
