use super::{VisionParseError, VisionReport};

/// Extracts and validates the vision document embedded in model output.
///
/// The document spans from the first `{` to the last `}`, so surrounding prose or markdown
/// fences are ignored. Missing scoring fields are reported as [`VisionParseError::Malformed`].
pub fn parse_vision_output(content: &str) -> Result<VisionReport, VisionParseError> {
    let document = extract_document(content).ok_or(VisionParseError::MissingDocument)?;
    let report = serde_json::from_str(document)?;
    Ok(report)
}

fn extract_document(content: &str) -> Option<&str> {
    let start = content.find('{')?;
    let end = content.rfind('}')?;
    (end > start).then(|| &content[start..=end])
}
