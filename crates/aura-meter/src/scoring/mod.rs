//! Deterministic aura scoring.
//!
//! A [`VisualAnalysis`] is reduced to four bounded component scores, combined with fixed
//! weights, bent through an asymmetric power curve and classified on a label ladder. Every
//! step is a pure function of the input, so equal inputs always yield equal breakdowns.

mod curve;
pub mod domain;
mod ladder;
mod rules;

#[cfg(test)]
mod tests;

pub use curve::{
    apply_asymmetric_curve, ComponentScores, WeightedScores, CONFIDENCE_WEIGHT,
    CONSISTENCY_WEIGHT, INTENTIONALITY_WEIGHT, SCORE_CEILING, SCORE_FLOOR, VISUAL_BALANCE_WEIGHT,
};
pub use domain::{ConfidenceIndicator, VisualAnalysis, VisualTone};
pub use ladder::{AuraLabel, RoastIntensity};

use serde::{Deserialize, Serialize};

/// Full audit trail of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringBreakdown {
    pub component_scores: ComponentScores,
    pub weighted_scores: WeightedScores,
    pub raw_score: f64,
    pub final_score: i32,
    pub aura_label: AuraLabel,
    pub explanation: Vec<String>,
}

impl ScoringBreakdown {
    pub fn roast_intensity(&self) -> RoastIntensity {
        RoastIntensity::for_score(self.final_score)
    }
}

/// Scores a vision analysis.
pub fn calculate_aura_score(analysis: &VisualAnalysis) -> ScoringBreakdown {
    let component_scores = ComponentScores {
        confidence: rules::confidence_score(analysis),
        intentionality: rules::intentionality_score(analysis),
        visual_balance: rules::visual_balance_score(analysis),
        consistency: rules::consistency_score(analysis),
    };

    let mut explanation = vec![
        format!(
            "Confidence: {} ({}, {} tone)",
            signed(component_scores.confidence),
            analysis.confidence_indicator,
            analysis.visual_tone
        ),
        format!(
            "Intentionality: {} (vibes: {})",
            signed(component_scores.intentionality),
            analysis
                .aesthetic_vibe
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        format!(
            "Visual Balance: {} ({} elements)",
            signed(component_scores.visual_balance),
            analysis.element_count()
        ),
        format!(
            "Consistency: {} (signal alignment)",
            signed(component_scores.consistency)
        ),
    ];

    let weighted_scores = component_scores.weighted();
    let raw_score = weighted_scores.total();
    explanation.push(format!("Raw weighted score: {}", signed_fixed(raw_score)));

    let final_score = apply_asymmetric_curve(raw_score);
    explanation.push(format!(
        "Final score after asymmetric curve: {}/50",
        signed(f64::from(final_score))
    ));

    let aura_label = AuraLabel::for_score(final_score);
    explanation.push(format!("Aura classification: {aura_label}"));
    explanation.push(format!(
        "Roast intensity: {}",
        RoastIntensity::for_score(final_score)
    ));

    ScoringBreakdown {
        component_scores,
        weighted_scores,
        raw_score,
        final_score,
        aura_label,
        explanation,
    }
}

/// Scores the same input twice and compares the complete breakdowns.
pub fn validate_determinism(analysis: &VisualAnalysis) -> bool {
    calculate_aura_score(analysis) == calculate_aura_score(analysis)
}

fn signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value}")
    } else {
        format!("{value}")
    }
}

fn signed_fixed(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}")
    } else {
        format!("{value:.2}")
    }
}
