//! Boundary with the vision-analysis collaborator.
//!
//! The collaborator answers with free-form model output that embeds a JSON document. This
//! module extracts that document, validates the fields the scoring engine depends on, and
//! hands back a [`VisionReport`] whose [`VisualAnalysis`] can be scored directly.

mod parser;

pub use parser::parse_vision_output;

use serde::{Deserialize, Serialize};

use crate::scoring::VisualAnalysis;

/// Kind of image the collaborator believes it was shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageType {
    Selfie,
    ChatScreenshot,
    SocialMedia,
    MirrorPhoto,
    ProfilePicture,
    #[default]
    #[serde(other)]
    Other,
}

/// Complete vision document. Only [`VisionReport::analysis`] feeds the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisionReport {
    #[serde(default)]
    pub image_type: ImageType,
    #[serde(flatten)]
    pub analysis: VisualAnalysis,
    #[serde(default)]
    pub overall_impression: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_details: Option<String>,
}

impl VisionReport {
    pub fn analysis(&self) -> &VisualAnalysis {
        &self.analysis
    }
}

/// Failure to recover a usable vision document from collaborator output.
#[derive(Debug, thiserror::Error)]
pub enum VisionParseError {
    #[error("no JSON document found in vision output")]
    MissingDocument,
    #[error("vision document is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}
