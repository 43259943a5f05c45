use crate::scoring::domain::VisualAnalysis;

pub(super) const TONES: [&str; 9] = [
    "confident",
    "neutral",
    "chaotic",
    "minimal",
    "flashy",
    "professional",
    "casual",
    "unclear",
    "glitter",
];

pub(super) const INDICATORS: [&str; 6] = ["low", "medium", "high", "unclear", "HIGH", ""];

pub(super) const VIBE_VOCABULARY: [&str; 11] = [
    "clean",
    "messy",
    "dramatic",
    "low-effort",
    "intentional",
    "professional",
    "chaotic",
    "unintentional",
    "flashy",
    "minimal",
    "trying",
];

pub(super) fn analysis(
    tone: &str,
    indicator: &str,
    vibes: &[&str],
    elements: usize,
) -> VisualAnalysis {
    VisualAnalysis::new(tone, indicator)
        .with_vibes(vibes.iter().copied())
        .with_elements((0..elements).map(|index| format!("element {index}")))
}

/// Minimal tone, clean and intentional vibes, medium confidence, three elements.
pub(super) fn polished_profile() -> VisualAnalysis {
    VisualAnalysis::new("minimal", "medium")
        .with_vibes(["clean", "intentional"])
        .with_elements(["a", "b", "c"])
}

/// Components that all land on zero.
pub(super) fn neutral_profile() -> VisualAnalysis {
    VisualAnalysis::new("neutral", "medium")
}

/// Every vibe subset drawn from [`VIBE_VOCABULARY`].
pub(super) fn vibe_subsets() -> impl Iterator<Item = Vec<&'static str>> {
    (0u32..(1 << VIBE_VOCABULARY.len())).map(|mask| {
        VIBE_VOCABULARY
            .iter()
            .enumerate()
            .filter(|(bit, _)| mask & (1 << bit) != 0)
            .map(|(_, tag)| *tag)
            .collect()
    })
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
