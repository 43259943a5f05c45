use std::fmt;

use serde::{Deserialize, Serialize};

/// Descending `(minimum score, value)` pairs; the first threshold the score reaches wins.
type Ladder<T> = [(i32, T)];

fn descend<T: Copy>(ladder: &Ladder<T>, score: i32, floor: T) -> T {
    ladder
        .iter()
        .find(|(threshold, _)| score >= *threshold)
        .map(|(_, value)| *value)
        .unwrap_or(floor)
}

const LABEL_LADDER: [(i32, AuraLabel); 6] = [
    (40, AuraLabel::RareEnergy),
    (25, AuraLabel::StrongPresence),
    (10, AuraLabel::PositiveAura),
    (0, AuraLabel::Neutral),
    (-14, AuraLabel::LowSignal),
    (-29, AuraLabel::OffEnergy),
];

// Bands differ from the label ladder between +1 and +39.
const INTENSITY_LADDER: [(i32, RoastIntensity); 6] = [
    (40, RoastIntensity::Dominant),
    (20, RoastIntensity::Challenging),
    (1, RoastIntensity::Teasing),
    (0, RoastIntensity::Deadpan),
    (-14, RoastIntensity::RealityCheck),
    (-29, RoastIntensity::Brutal),
];

/// Categorical classification of a final aura score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuraLabel {
    #[serde(rename = "Rare Energy")]
    RareEnergy,
    #[serde(rename = "Strong Presence")]
    StrongPresence,
    #[serde(rename = "Positive Aura")]
    PositiveAura,
    #[serde(rename = "Neutral")]
    Neutral,
    #[serde(rename = "Low Signal")]
    LowSignal,
    #[serde(rename = "Off Energy")]
    OffEnergy,
    #[serde(rename = "Negative Presence")]
    NegativePresence,
}

impl AuraLabel {
    pub fn for_score(score: i32) -> Self {
        descend(&LABEL_LADDER, score, AuraLabel::NegativePresence)
    }

    pub const fn label(self) -> &'static str {
        match self {
            AuraLabel::RareEnergy => "Rare Energy",
            AuraLabel::StrongPresence => "Strong Presence",
            AuraLabel::PositiveAura => "Positive Aura",
            AuraLabel::Neutral => "Neutral",
            AuraLabel::LowSignal => "Low Signal",
            AuraLabel::OffEnergy => "Off Energy",
            AuraLabel::NegativePresence => "Negative Presence",
        }
    }
}

impl fmt::Display for AuraLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tone guidance handed to the text generator alongside the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoastIntensity {
    Dominant,
    Challenging,
    Teasing,
    Deadpan,
    RealityCheck,
    Brutal,
    Surgical,
}

impl RoastIntensity {
    pub fn for_score(score: i32) -> Self {
        descend(&INTENSITY_LADDER, score, RoastIntensity::Surgical)
    }

    pub const fn guidance(self) -> &'static str {
        match self {
            RoastIntensity::Dominant => "Dominant, confident - 'don't get arrogant'",
            RoastIntensity::Challenging => "Respectful but challenging",
            RoastIntensity::Teasing => "Teasing, slightly disappointed",
            RoastIntensity::Deadpan => "Deadpan, cold",
            RoastIntensity::RealityCheck => "Sharp reality check",
            RoastIntensity::Brutal => "Brutal but fair",
            RoastIntensity::Surgical => "Surgical destruction (still no insults)",
        }
    }
}

impl fmt::Display for RoastIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.guidance())
    }
}
