use super::domain::{ConfidenceIndicator, VisualAnalysis, VisualTone};

const CONFIDENCE_RANGE: (i32, i32) = (-20, 10);
const INTENTIONALITY_RANGE: (i32, i32) = (-20, 20);
const VISUAL_BALANCE_RANGE: (i32, i32) = (-15, 10);
const CONSISTENCY_RANGE: (i32, i32) = (-10, 8);

const POSITIVE_VIBES: [&str; 4] = ["clean", "intentional", "professional", "minimal"];
const NEGATIVE_VIBES: [&str; 5] = ["messy", "unintentional", "chaotic", "low-effort", "dramatic"];

/// Predicate paired with the score it contributes when it holds.
struct Rule {
    applies: fn(&VisualAnalysis) -> bool,
    score: i32,
}

const fn rule(applies: fn(&VisualAnalysis) -> bool, score: i32) -> Rule {
    Rule { applies, score }
}

/// Score of the first rule that holds, in declaration order.
fn first_match(rules: &[Rule], analysis: &VisualAnalysis) -> Option<i32> {
    rules
        .iter()
        .find(|rule| (rule.applies)(analysis))
        .map(|rule| rule.score)
}

/// Sum of every rule that holds.
fn sum_matches(rules: &[Rule], analysis: &VisualAnalysis) -> i32 {
    rules
        .iter()
        .filter(|rule| (rule.applies)(analysis))
        .map(|rule| rule.score)
        .sum()
}

fn bounded(score: i32, (low, high): (i32, i32)) -> f64 {
    f64::from(score.clamp(low, high))
}

// Confidence projection. The indicator is compared case-insensitively here only.

const CONFIDENCE_OVERRIDES: [Rule; 3] = [
    rule(is_overconfident, -10),
    rule(is_forced_confidence, -20),
    rule(is_withdrawn, -15),
];

fn loose_indicator(analysis: &VisualAnalysis) -> ConfidenceIndicator {
    ConfidenceIndicator::classify_loose(&analysis.confidence_indicator)
}

fn is_overconfident(analysis: &VisualAnalysis) -> bool {
    analysis.tone() == VisualTone::Flashy
        || analysis.has_vibe("dramatic")
        || (loose_indicator(analysis) == ConfidenceIndicator::High && analysis.has_vibe("trying"))
}

fn is_forced_confidence(analysis: &VisualAnalysis) -> bool {
    analysis.tone() == VisualTone::Chaotic && loose_indicator(analysis) == ConfidenceIndicator::High
}

fn is_withdrawn(analysis: &VisualAnalysis) -> bool {
    analysis.tone() == VisualTone::Minimal && loose_indicator(analysis) == ConfidenceIndicator::Low
}

pub(crate) fn confidence_score(analysis: &VisualAnalysis) -> f64 {
    let score = first_match(&CONFIDENCE_OVERRIDES, analysis).unwrap_or_else(|| {
        match loose_indicator(analysis) {
            ConfidenceIndicator::Low => -15,
            ConfidenceIndicator::Medium => 0,
            ConfidenceIndicator::High => 10,
            ConfidenceIndicator::Unclear | ConfidenceIndicator::Unrecognized => -5,
        }
    });
    bounded(score, CONFIDENCE_RANGE)
}

// Intentionality: every matching signal contributes.

const INTENTIONALITY_SIGNALS: [Rule; 9] = [
    rule(|a| a.has_vibe("intentional"), 10),
    rule(|a| a.has_vibe("clean"), 5),
    rule(
        |a| matches!(a.tone(), VisualTone::Minimal | VisualTone::Professional),
        8,
    ),
    rule(|a| a.has_vibe("dramatic"), -10),
    rule(|a| a.has_vibe("flashy"), -8),
    rule(|a| a.has_vibe("unintentional"), -15),
    rule(|a| a.has_vibe("messy"), -12),
    rule(|a| a.has_vibe("low-effort"), -18),
    rule(|a| a.has_vibe("chaotic"), -10),
];

pub(crate) fn intentionality_score(analysis: &VisualAnalysis) -> f64 {
    bounded(
        sum_matches(&INTENTIONALITY_SIGNALS, analysis),
        INTENTIONALITY_RANGE,
    )
}

// Visual balance: first match wins. Rule two's "messy" exclusion blocks only itself.

const VISUAL_BALANCE_RULES: [Rule; 6] = [
    rule(
        |a| a.has_vibe("clean") && a.tone() == VisualTone::Minimal,
        10,
    ),
    rule(
        |a| (3..=5).contains(&a.element_count()) && !a.has_vibe("messy"),
        5,
    ),
    rule(|a| a.tone() == VisualTone::Flashy, -5),
    rule(|a| a.has_vibe("messy"), -10),
    rule(
        |a| a.tone() == VisualTone::Chaotic || a.has_vibe("chaotic"),
        -15,
    ),
    rule(|a| a.element_count() > 6, -8),
];

pub(crate) fn visual_balance_score(analysis: &VisualAnalysis) -> f64 {
    bounded(
        first_match(&VISUAL_BALANCE_RULES, analysis).unwrap_or(0),
        VISUAL_BALANCE_RANGE,
    )
}

// Consistency: first match wins. Indicator comparisons are exact.

const CONSISTENCY_RULES: [Rule; 4] = [
    rule(is_aligned, 8),
    rule(|a| has_positive_vibe(a) && has_negative_vibe(a), 0),
    rule(is_conflicting, -10),
    rule(|a| has_negative_vibe(a) && !has_positive_vibe(a), -8),
];

fn has_positive_vibe(analysis: &VisualAnalysis) -> bool {
    analysis.has_any_vibe(&POSITIVE_VIBES)
}

fn has_negative_vibe(analysis: &VisualAnalysis) -> bool {
    analysis.has_any_vibe(&NEGATIVE_VIBES)
}

fn is_aligned(analysis: &VisualAnalysis) -> bool {
    has_positive_vibe(analysis)
        && !has_negative_vibe(analysis)
        && matches!(
            analysis.indicator(),
            ConfidenceIndicator::High | ConfidenceIndicator::Medium
        )
        && matches!(
            analysis.tone(),
            VisualTone::Confident | VisualTone::Professional | VisualTone::Minimal
        )
}

fn is_conflicting(analysis: &VisualAnalysis) -> bool {
    let indicator = analysis.indicator();
    let tone = analysis.tone();
    (indicator == ConfidenceIndicator::High && tone == VisualTone::Chaotic)
        || (indicator == ConfidenceIndicator::Low && tone == VisualTone::Flashy)
        || (analysis.has_vibe("clean") && analysis.has_vibe("messy"))
}

pub(crate) fn consistency_score(analysis: &VisualAnalysis) -> f64 {
    bounded(
        first_match(&CONSISTENCY_RULES, analysis).unwrap_or(0),
        CONSISTENCY_RANGE,
    )
}
