//! Builds a placeholder slide outline for a topic: an introduction, a run of body slides
//! with stock titles, and a conclusion.

use uuid::Uuid;

use crate::errors::{DeckError, Result};
use crate::models::slide::Slide;

pub const MIN_SLIDES: usize = 1;
pub const MAX_SLIDES: usize = 20;

const CONCLUSION_TITLE: &str = "Summary & Conclusions";

/// Body slide titles, used in order.
pub const BODY_TITLES: [&str; 18] = [
    "Background & Context",
    "Key Concepts",
    "Main Findings",
    "Clinical Implications",
    "Best Practices",
    "Case Studies",
    "Evidence & Research",
    "Implementation",
    "Challenges & Solutions",
    "Future Directions",
    "Discussion Points",
    "Practical Applications",
    "Guidelines & Protocols",
    "Risk Factors",
    "Prevention Strategies",
    "Treatment Options",
    "Patient Outcomes",
    "Quality Measures",
];

/// Checks a generation request before any slides are built.
pub fn validate_outline_request(topic: &str, slide_count: usize) -> Result<()> {
    if topic.trim().is_empty() {
        return Err(DeckError::validation("Please enter a topic"));
    }
    if !(MIN_SLIDES..=MAX_SLIDES).contains(&slide_count) {
        return Err(DeckError::validation(format!(
            "Please enter a number between {} and {}",
            MIN_SLIDES, MAX_SLIDES
        )));
    }
    Ok(())
}

/// Shared id prefix for one generation call.
fn id_base() -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!(
        "slide-{}-{}",
        chrono::Utc::now().timestamp_millis(),
        &suffix[..8]
    )
}

/// Generates at most `slide_count` outline slides for `topic`.
///
/// The outline is an introduction, `max(1, slide_count - 2)` body slides (capped by the
/// number of stock titles) and, when `slide_count >= 2`, a conclusion; the result is
/// then truncated to `slide_count`. Ids are `{base}-{index}` with one base per call.
///
/// # Arguments
///
/// * `topic` - Subject of the presentation; surrounding whitespace is ignored.
/// * `slide_count` - Requested number of slides.
pub fn generate_outline(topic: &str, slide_count: usize) -> Vec<Slide> {
    let topic = topic.trim();
    let base = id_base();
    let mut slides = Vec::with_capacity(slide_count.max(2) + 1);

    slides.push(Slide::with_id(
        format!("{}-0", base),
        topic,
        format!(
            "Welcome to this presentation on {}.\n\n• Overview of key concepts\n• Important considerations\n• Practical applications",
            topic
        ),
    ));

    let body_count = slide_count.saturating_sub(2).max(1);
    for (i, title) in BODY_TITLES.iter().take(body_count).enumerate() {
        slides.push(Slide::with_id(
            format!("{}-{}", base, i + 1),
            *title,
            format!(
                "Key points about {} related to {}:\n\n• Point 1: Add your content here\n• Point 2: Add your content here\n• Point 3: Add your content here\n\nNotes: Customize this slide with specific information.",
                title.to_lowercase(),
                topic
            ),
        ));
    }

    if slide_count >= 2 {
        slides.push(Slide::with_id(
            format!("{}-{}", base, slides.len()),
            CONCLUSION_TITLE,
            format!(
                "Key takeaways from this presentation on {}:\n\n• Main point 1\n• Main point 2\n• Main point 3\n\nThank you for your attention!\n\nQuestions?",
                topic
            ),
        ));
    }

    slides.truncate(slide_count);
    log::debug!("Generated {} outline slides for '{}'", slides.len(), topic);
    slides
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exactly_the_requested_count() {
        for count in MIN_SLIDES..=MAX_SLIDES {
            let slides = generate_outline("Hand hygiene", count);
            assert_eq!(slides.len(), count, "count {count}");
            assert_eq!(slides[0].title, "Hand hygiene");
            if count >= 3 {
                assert_eq!(slides[count - 1].title, CONCLUSION_TITLE);
            }
        }
    }

    #[test]
    fn two_slides_keep_intro_and_first_body_slide() {
        let slides = generate_outline("Sepsis", 2);
        let titles: Vec<&str> = slides.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Sepsis", "Background & Context"]);
    }

    #[test]
    fn ids_share_one_base() {
        let slides = generate_outline("  Sepsis  ", 5);
        let base = slides[0].id.strip_suffix("-0").unwrap();
        for (i, slide) in slides.iter().enumerate() {
            assert_eq!(slide.id, format!("{}-{}", base, i));
        }
        assert!(slides[0].content.starts_with("Welcome to this presentation on Sepsis."));
        assert!(slides[1]
            .content
            .starts_with("Key points about background & context related to Sepsis:"));
    }

    #[test]
    fn validates_topic_and_bounds() {
        assert!(validate_outline_request("Topic", 1).is_ok());
        assert!(validate_outline_request("Topic", 20).is_ok());
        assert!(matches!(
            validate_outline_request("   ", 5),
            Err(DeckError::Validation(_))
        ));
        assert!(validate_outline_request("Topic", 0).is_err());
        assert!(validate_outline_request("Topic", 21).is_err());
    }
}
