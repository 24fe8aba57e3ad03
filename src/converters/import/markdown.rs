use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::ThemeId;

// Level 1 and 2 headings only; `###` does not start a new slide.
static SLIDE_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^#{1,2}\s+").expect("valid heading pattern"));

const FALLBACK_SLIDE_TITLE: &str = "Imported Presentation";
const DEFAULT_DECK_TITLE: &str = "Markdown Import";

fn or_default<'a>(title: &'a str, default: &'a str) -> &'a str {
    if title.trim().is_empty() {
        default
    } else {
        title
    }
}

/// Turns one heading-delimited section into a slide: the first line is the title and
/// the rest, trimmed, is the content.
fn section_to_slide(section: &str, number: usize) -> Slide {
    let mut lines = section.trim().split('\n');
    let title = lines
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Slide {}", number));
    let content = lines.collect::<Vec<_>>().join("\n").trim().to_string();
    Slide::new(title, content)
}

/// Builds a presentation from a Markdown document, one slide per `#` or `##` section.
///
/// Text before the first heading forms a section of its own. When the document has no
/// heading at all, the whole input becomes the content of a single slide titled `title`.
///
/// # Arguments
///
/// * `text` - The Markdown source.
/// * `title` - Title for the new presentation; blank selects a default.
pub fn import_from_markdown(text: &str, title: &str) -> Presentation {
    let mut slides: Vec<Slide> = Vec::new();
    if SLIDE_HEADING.is_match(text) {
        slides = SLIDE_HEADING
            .split(text)
            .filter(|section| !section.trim().is_empty())
            .enumerate()
            .map(|(index, section)| section_to_slide(section, index + 1))
            .collect();
    }

    if slides.is_empty() {
        log::warn!("No Markdown headings found; importing as a single slide");
        slides.push(Slide::new(or_default(title, FALLBACK_SLIDE_TITLE), text));
    }

    let presentation = Presentation::new_with_slides(
        or_default(title, DEFAULT_DECK_TITLE),
        slides,
        ThemeId::ProfessionalBlue,
    );
    log::info!(
        "Imported '{}' from Markdown ({} slides)",
        presentation.title,
        presentation.slides.len()
    );
    presentation
}
