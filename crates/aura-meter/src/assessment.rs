use serde::Serialize;

use crate::roast::{tips, RoastSeed};
use crate::scoring::{calculate_aura_score, ScoringBreakdown, VisualAnalysis};

/// Everything derived from one vision analysis: the audit trail, the generator seed and the
/// free tip shown to every user.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuraAssessment {
    pub breakdown: ScoringBreakdown,
    pub roast_seed: RoastSeed,
    pub free_tip: &'static str,
}

impl AuraAssessment {
    pub fn from_analysis(analysis: &VisualAnalysis) -> Self {
        let breakdown = calculate_aura_score(analysis);
        let roast_seed = RoastSeed::from_breakdown(&breakdown);
        let free_tip = tips::free_tip(breakdown.final_score);

        Self {
            breakdown,
            roast_seed,
            free_tip,
        }
    }
}
