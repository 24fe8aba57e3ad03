use serde_json::Value;

use super::error::{ImportError, Result};
use crate::models::presentation::Presentation;
use crate::models::slide::{ImagePosition, Slide};
use crate::models::theme::ThemeId;

const UNTITLED_SLIDE: &str = "Untitled Slide";

/// JavaScript-style truthiness, used for the required `id` field.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn non_empty_str<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn parse_theme(data: &Value) -> ThemeId {
    match non_empty_str(data, "theme") {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            log::warn!("{}; importing with the default theme", e);
            ThemeId::default()
        }),
        None => ThemeId::default(),
    }
}

fn parse_slide(raw: &Value) -> Slide {
    let mut slide = Slide::new(
        non_empty_str(raw, "title").unwrap_or(UNTITLED_SLIDE),
        raw.get("content").and_then(Value::as_str).unwrap_or_default(),
    );
    slide.image_url = non_empty_str(raw, "imageUrl").map(str::to_string);
    slide.image_position = non_empty_str(raw, "imagePosition")
        .and_then(|p| p.parse::<ImagePosition>().ok())
        .unwrap_or_default();
    slide
}

/// Rebuilds a presentation from a previously exported JSON document.
///
/// The document must carry a non-empty `id`, a non-empty string `title` and an array of
/// `slides`. Everything else is optional and falls back to defaults. The imported deck
/// gets fresh ids and timestamps so it never collides with the original.
///
/// # Arguments
///
/// * `text` - The JSON document.
///
/// # Returns
///
/// A `Result` containing the new `Presentation`, or an `ImportError` if the text is not
/// JSON or a required field is missing.
pub fn import_from_json(text: &str) -> Result<Presentation> {
    let data: Value = serde_json::from_str(text)?;

    if !is_truthy(data.get("id")) {
        return Err(ImportError::MissingField("id"));
    }
    let title = non_empty_str(&data, "title").ok_or(ImportError::MissingField("title"))?;
    let raw_slides = data
        .get("slides")
        .and_then(Value::as_array)
        .ok_or(ImportError::MissingField("slides"))?;

    let slides: Vec<Slide> = raw_slides.iter().map(parse_slide).collect();
    let presentation = Presentation::new_with_slides(title, slides, parse_theme(&data));
    log::info!(
        "Imported '{}' from JSON ({} slides)",
        presentation.title,
        presentation.slides.len()
    );
    Ok(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converters::export::render_json;

    #[test]
    fn round_trips_exported_json_with_fresh_ids() {
        let mut original = Presentation::new_with_slides(
            "Cardiology Update",
            vec![
                Slide::with_id("s1", "Intro", "• One\n• Two"),
                Slide::with_id("s2", "Imaging", ""),
            ],
            ThemeId::ElegantPurple,
        );
        original.slides[1].image_url = Some("data:image/png;base64,AAAA".to_string());
        original.slides[1].image_position = ImagePosition::Right;

        let imported = import_from_json(&render_json(&original).unwrap()).unwrap();
        assert_ne!(imported.id, original.id);
        assert_eq!(imported.title, original.title);
        assert_eq!(imported.theme, original.theme);
        assert_eq!(imported.slides.len(), 2);
        for (a, b) in imported.slides.iter().zip(&original.slides) {
            assert_ne!(a.id, b.id);
            assert_eq!(a.title, b.title);
            assert_eq!(a.content, b.content);
            assert_eq!(a.image_url, b.image_url);
            assert_eq!(a.image_position, b.image_position);
        }
    }

    #[test]
    fn rejects_missing_required_fields() {
        let cases = [
            (r#"{"title":"T","slides":[]}"#, "id"),
            (r#"{"id":null,"title":"T","slides":[]}"#, "id"),
            (r#"{"id":"","title":"T","slides":[]}"#, "id"),
            (r#"{"id":"p","slides":[]}"#, "title"),
            (r#"{"id":"p","title":"","slides":[]}"#, "title"),
            (r#"{"id":"p","title":"T","slides":{}}"#, "slides"),
        ];
        for (json, field) in cases {
            match import_from_json(json) {
                Err(ImportError::MissingField(f)) => assert_eq!(f, field, "{json}"),
                other => panic!("expected missing {field} for {json}, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            import_from_json("{not json"),
            Err(ImportError::InvalidJson(_))
        ));
    }

    #[test]
    fn fills_defaults_for_sparse_slides() {
        let json = r#"{"id":7,"title":"T","theme":"neon-pink","slides":[{},{"title":"","imagePosition":"diagonal"}]}"#;
        let p = import_from_json(json).unwrap();
        assert_eq!(p.theme, ThemeId::ProfessionalBlue);
        assert_eq!(p.slides.len(), 2);
        for slide in &p.slides {
            assert_eq!(slide.title, UNTITLED_SLIDE);
            assert_eq!(slide.content, "");
            assert_eq!(slide.image_url, None);
            assert_eq!(slide.image_position, ImagePosition::Top);
        }
        assert_ne!(p.slides[0].id, p.slides[1].id);
    }
}
