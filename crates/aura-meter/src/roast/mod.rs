//! Boundary with the text-generation collaborator.
//!
//! The generator never sees the scoring internals. It receives a [`RoastSeed`] carrying the
//! final score, the label and tone guidance, and answers with an [`AuraResult`] that must
//! echo the seeded score and label verbatim.

pub mod tips;

use serde::{Deserialize, Serialize};

use crate::scoring::{AuraLabel, RoastIntensity, ScoringBreakdown};

/// Values the text generator is instructed to reuse without recalculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoastSeed {
    pub aura_score: i32,
    pub aura_label: AuraLabel,
    pub score_display: String,
    pub intensity: RoastIntensity,
    pub guidance: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<&'static str>,
}

impl RoastSeed {
    pub fn from_breakdown(breakdown: &ScoringBreakdown) -> Self {
        let score = breakdown.final_score;
        let intensity = RoastIntensity::for_score(score);

        Self {
            aura_score: score,
            aura_label: breakdown.aura_label,
            score_display: score_display(score),
            intensity,
            guidance: intensity.guidance(),
            directive: directive_for(score),
        }
    }

    /// Whether the generator kept the seeded score and label.
    pub fn is_honored_by(&self, result: &AuraResult) -> bool {
        result.aura_score == self.aura_score && result.aura_label == self.aura_label.label()
    }
}

/// Narrative document returned by the text generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuraResult {
    pub aura_score: i32,
    pub aura_label: String,
    #[serde(default)]
    pub roast: String,
    #[serde(default)]
    pub personality_insight: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub improvement_tips: Vec<String>,
    #[serde(default)]
    pub shareable_one_liner: String,
}

pub fn score_display(score: i32) -> String {
    if score > 0 {
        format!("+{score}")
    } else {
        score.to_string()
    }
}

/// Band-specific instruction for the generator prompt.
///
/// -15 and -30 sit between bands and receive no directive.
pub fn directive_for(score: i32) -> Option<&'static str> {
    match score {
        40..=i32::MAX => Some(
            "This score is RARE. Roast their ego and warn about their inevitable downfall. \
             They're peaking and don't know it yet.",
        ),
        30..=39 => Some(
            "They think they're special. Roast their competence without mercy. \
             Bring them down a peg.",
        ),
        1..=29 => Some(
            "They're mid. Be disappointed and unimpressed. They're trying but it's not working.",
        ),
        0 => Some("They're forgettable. Be deadpan and cold. They don't even register."),
        -14..=-1 => Some(
            "They're failing. Sharp reality check. Call out what's not working with no filter.",
        ),
        -29..=-16 => Some(
            "They're embarrassing themselves. Brutal destruction. No mercy. This is bad.",
        ),
        i32::MIN..=-31 => Some(
            "Surgical annihilation. They need to hear the truth. No survivors. \
             Go for the throat.",
        ),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{calculate_aura_score, VisualAnalysis};

    fn polished_breakdown() -> ScoringBreakdown {
        let analysis = VisualAnalysis::new("minimal", "medium")
            .with_vibes(["clean", "intentional"])
            .with_elements(["a", "b", "c"]);
        calculate_aura_score(&analysis)
    }

    fn result_for(seed: &RoastSeed) -> AuraResult {
        AuraResult {
            aura_score: seed.aura_score,
            aura_label: seed.aura_label.label().to_string(),
            roast: "Beige walls, beige energy.".to_string(),
            personality_insight: "Plays it safe on purpose.".to_string(),
            strengths: vec!["Clean framing".to_string()],
            weaknesses: vec!["Zero risk taken".to_string()],
            improvement_tips: Vec::new(),
            shareable_one_liner: "+16/50 and somehow still forgettable.".to_string(),
        }
    }

    #[test]
    fn seed_carries_score_label_and_guidance() {
        let seed = RoastSeed::from_breakdown(&polished_breakdown());

        assert_eq!(seed.aura_score, 16);
        assert_eq!(seed.aura_label, AuraLabel::PositiveAura);
        assert_eq!(seed.score_display, "+16");
        assert_eq!(seed.intensity, RoastIntensity::Teasing);
        assert_eq!(seed.guidance, "Teasing, slightly disappointed");
        assert!(seed.directive.expect("directive").starts_with("They're mid."));
    }

    #[test]
    fn score_display_only_signs_positive_scores() {
        assert_eq!(score_display(7), "+7");
        assert_eq!(score_display(0), "0");
        assert_eq!(score_display(-12), "-12");
    }

    #[test]
    fn directive_bands_leave_gaps_at_minus_fifteen_and_thirty() {
        assert!(directive_for(40).expect("rare").contains("RARE"));
        assert!(directive_for(30).expect("special").contains("special"));
        assert!(directive_for(0).expect("zero").contains("forgettable"));
        assert!(directive_for(-14).expect("failing").contains("failing"));
        assert!(directive_for(-16).expect("embarrassing").contains("embarrassing"));
        assert!(directive_for(-31).expect("annihilation").contains("annihilation"));
        assert_eq!(directive_for(-15), None);
        assert_eq!(directive_for(-30), None);
    }

    #[test]
    fn seed_is_honored_only_by_exact_echo() {
        let seed = RoastSeed::from_breakdown(&polished_breakdown());
        let mut result = result_for(&seed);
        assert!(seed.is_honored_by(&result));

        result.aura_score = 30;
        assert!(!seed.is_honored_by(&result));

        let mut relabeled = result_for(&seed);
        relabeled.aura_label = "Rare Energy".to_string();
        assert!(!seed.is_honored_by(&relabeled));
    }

    #[test]
    fn generator_document_tolerates_missing_lists() {
        let result: AuraResult =
            serde_json::from_str(r#"{"aura_score": -3, "aura_label": "Low Signal"}"#)
                .expect("document parses");

        assert!(result.strengths.is_empty());
        assert!(result.roast.is_empty());
    }
}
