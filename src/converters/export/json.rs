use super::error::Result;
use crate::models::presentation::Presentation;

/// Serializes the presentation verbatim as pretty-printed JSON.
pub fn render_json(presentation: &Presentation) -> Result<String> {
    Ok(serde_json::to_string_pretty(presentation)?)
}
