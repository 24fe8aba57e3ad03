use serde::{Deserialize, Serialize};

use crate::models::slide::Slide;
use crate::models::theme::ThemeId;

/// A slide deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    /// Opaque identifier, assigned once at creation.
    pub id: String,

    pub title: String,

    /// Milliseconds since the Unix epoch; set once.
    pub created_at: i64,

    /// Milliseconds since the Unix epoch; refreshed on every mutation.
    /// Never earlier than `created_at`.
    pub updated_at: i64,

    /// Slides in display and playback order. May be empty while the deck is being
    /// edited, but an empty deck cannot be presented.
    #[serde(default)]
    pub slides: Vec<Slide>,

    #[serde(default)]
    pub theme: ThemeId,
}

impl Presentation {
    /// Builds a presentation with a fresh id, stamped with the current time.
    pub fn new_with_slides(title: impl Into<String>, slides: Vec<Slide>, theme: ThemeId) -> Self {
        let now = super::now_millis();
        Presentation {
            id: super::new_id("pres"),
            title: title.into(),
            created_at: now,
            updated_at: now,
            slides,
            theme,
        }
    }

    /// Refreshes `updated_at`, keeping it at or after `created_at`.
    pub fn touch(&mut self) {
        self.updated_at = super::now_millis().max(self.created_at);
    }

    pub fn slide(&self, slide_id: &str) -> Option<&Slide> {
        self.slides.iter().find(|s| s.id == slide_id)
    }

    pub fn slide_index(&self, slide_id: &str) -> Option<usize> {
        self.slides.iter().position(|s| s.id == slide_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_presentation_has_consistent_timestamps() {
        let p = Presentation::new_with_slides("Deck", vec![], ThemeId::default());
        assert!(p.id.starts_with("pres-"));
        assert_eq!(p.created_at, p.updated_at);
    }

    #[test]
    fn touch_never_goes_before_creation() {
        let mut p = Presentation::new_with_slides("Deck", vec![], ThemeId::default());
        p.created_at = i64::MAX - 1;
        p.touch();
        assert!(p.updated_at >= p.created_at);
    }

    #[test]
    fn deserializes_without_theme() {
        let json = r#"{"id":"p1","title":"T","createdAt":1,"updatedAt":2,"slides":[]}"#;
        let p: Presentation = serde_json::from_str(json).unwrap();
        assert_eq!(p.theme, ThemeId::ProfessionalBlue);
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["createdAt"], 1);
        assert_eq!(back["theme"], "professional-blue");
    }
}
