use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured image attributes produced by the vision collaborator.
///
/// Field names follow the collaborator's JSON document; camelCase aliases are accepted so
/// callers that already re-shaped the payload can post it unchanged. Every field is a plain
/// string so that out-of-vocabulary values still score instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisualAnalysis {
    #[serde(alias = "visualTone")]
    pub visual_tone: String,
    #[serde(alias = "aestheticVibe")]
    pub aesthetic_vibe: BTreeSet<String>,
    #[serde(
        rename = "confidence_indicators",
        alias = "confidenceIndicator",
        alias = "confidence_indicator"
    )]
    pub confidence_indicator: String,
    #[serde(alias = "notableElements")]
    pub notable_elements: Vec<String>,
}

impl VisualAnalysis {
    pub fn new(visual_tone: impl Into<String>, confidence_indicator: impl Into<String>) -> Self {
        Self {
            visual_tone: visual_tone.into(),
            aesthetic_vibe: BTreeSet::new(),
            confidence_indicator: confidence_indicator.into(),
            notable_elements: Vec::new(),
        }
    }

    pub fn with_vibes<I, S>(mut self, vibes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aesthetic_vibe.extend(vibes.into_iter().map(Into::into));
        self
    }

    pub fn with_elements<I, S>(mut self, elements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notable_elements.extend(elements.into_iter().map(Into::into));
        self
    }

    pub fn tone(&self) -> VisualTone {
        VisualTone::classify(&self.visual_tone)
    }

    /// Exact-match classification of the confidence indicator.
    pub fn indicator(&self) -> ConfidenceIndicator {
        ConfidenceIndicator::classify(&self.confidence_indicator)
    }

    pub fn has_vibe(&self, tag: &str) -> bool {
        self.aesthetic_vibe.contains(tag)
    }

    pub fn has_any_vibe(&self, tags: &[&str]) -> bool {
        tags.iter().any(|tag| self.has_vibe(tag))
    }

    pub fn element_count(&self) -> usize {
        self.notable_elements.len()
    }
}

/// Overall tone reported by the vision collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisualTone {
    Confident,
    Neutral,
    Chaotic,
    Minimal,
    Flashy,
    Professional,
    Casual,
    Unclear,
    Unrecognized,
}

impl VisualTone {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "confident" => Self::Confident,
            "neutral" => Self::Neutral,
            "chaotic" => Self::Chaotic,
            "minimal" => Self::Minimal,
            "flashy" => Self::Flashy,
            "professional" => Self::Professional,
            "casual" => Self::Casual,
            "unclear" => Self::Unclear,
            _ => Self::Unrecognized,
        }
    }
}

/// How confident the subject appears, as judged by the vision collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfidenceIndicator {
    Low,
    Medium,
    High,
    Unclear,
    Unrecognized,
}

impl ConfidenceIndicator {
    pub fn classify(raw: &str) -> Self {
        match raw {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            "unclear" => Self::Unclear,
            _ => Self::Unrecognized,
        }
    }

    /// Case-insensitive variant used by the confidence projection rules.
    pub fn classify_loose(raw: &str) -> Self {
        Self::classify(&raw.to_lowercase())
    }
}
