use serde::{Deserialize, Serialize};

pub const CONFIDENCE_WEIGHT: f64 = 0.35;
pub const INTENTIONALITY_WEIGHT: f64 = 0.30;
pub const VISUAL_BALANCE_WEIGHT: f64 = 0.20;
pub const CONSISTENCY_WEIGHT: f64 = 0.15;

pub const SCORE_FLOOR: i32 = -50;
pub const SCORE_CEILING: i32 = 50;

const POSITIVE_EXPONENT: f64 = 1.25;
const NEGATIVE_EXPONENT: f64 = 1.1;

/// The four independently computed sub-scores, before weighting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComponentScores {
    pub confidence: f64,
    pub intentionality: f64,
    pub visual_balance: f64,
    pub consistency: f64,
}

impl ComponentScores {
    pub fn weighted(&self) -> WeightedScores {
        WeightedScores {
            confidence: self.confidence * CONFIDENCE_WEIGHT,
            intentionality: self.intentionality * INTENTIONALITY_WEIGHT,
            visual_balance: self.visual_balance * VISUAL_BALANCE_WEIGHT,
            consistency: self.consistency * CONSISTENCY_WEIGHT,
        }
    }
}

/// Component scores multiplied by their weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedScores {
    pub confidence: f64,
    pub intentionality: f64,
    pub visual_balance: f64,
    pub consistency: f64,
}

impl WeightedScores {
    /// Raw score. Not rounded and not clamped.
    pub fn total(&self) -> f64 {
        self.confidence + self.intentionality + self.visual_balance + self.consistency
    }
}

/// Maps a raw score onto the final integer scale.
///
/// Positive raw scores are raised to 1.25 and negative magnitudes to 1.1, the result is
/// clamped to [`SCORE_FLOOR`, `SCORE_CEILING`] and rounded half away from zero.
pub fn apply_asymmetric_curve(raw_score: f64) -> i32 {
    let curved = if raw_score >= 0.0 {
        raw_score.powf(POSITIVE_EXPONENT)
    } else {
        -raw_score.abs().powf(NEGATIVE_EXPONENT)
    };

    curved
        .clamp(f64::from(SCORE_FLOOR), f64::from(SCORE_CEILING))
        .round() as i32
}
