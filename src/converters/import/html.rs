use scraper::{ElementRef, Html, Selector};

use super::error::{ImportError, Result};
use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::ThemeId;

const SLIDE_CONTAINERS: &str = "section, .slide, article";
const CONTAINER_HEADINGS: &str = "h1, h2, h3";
const BOUNDARY_HEADINGS: &str = "h1, h2";
const DEFAULT_TITLE: &str = "HTML Import";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ImportError::InvalidSelector(format!("{}: {}", css, e)))
}

fn text_of(element: &ElementRef<'_>) -> String {
    element.text().collect()
}

fn title_or_numbered(text: &str, number: usize) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        format!("Slide {}", number)
    } else {
        trimmed.to_string()
    }
}

/// One slide per `section`, `.slide` or `article` element.
fn slides_from_containers(document: &Html) -> Result<Vec<Slide>> {
    let containers = selector(SLIDE_CONTAINERS)?;
    let headings = selector(CONTAINER_HEADINGS)?;

    let slides = document
        .select(&containers)
        .enumerate()
        .map(|(index, container)| {
            let heading = container
                .select(&headings)
                .next()
                .map(|h| text_of(&h))
                .unwrap_or_default();
            let title = title_or_numbered(&heading, index + 1);
            let content = text_of(&container).replacen(&title, "", 1).trim().to_string();
            Slide::new(title, content)
        })
        .collect();
    Ok(slides)
}

fn is_boundary(element: &ElementRef<'_>) -> bool {
    matches!(element.value().name(), "h1" | "h2")
}

/// One slide per `h1`/`h2`, collecting the text of the following sibling elements up to
/// the next such heading.
fn slides_from_headings(document: &Html) -> Result<Vec<Slide>> {
    let boundaries = selector(BOUNDARY_HEADINGS)?;

    let slides = document
        .select(&boundaries)
        .enumerate()
        .map(|(index, heading)| {
            let title = title_or_numbered(&text_of(&heading), index + 1);
            let mut content = String::new();
            for sibling in heading.next_siblings().filter_map(ElementRef::wrap) {
                if is_boundary(&sibling) {
                    break;
                }
                content.push_str(&text_of(&sibling));
                content.push('\n');
            }
            Slide::new(title, content.trim())
        })
        .collect();
    Ok(slides)
}

fn body_text(document: &Html) -> Result<String> {
    let body = selector("body")?;
    let text = match document.select(&body).next() {
        Some(element) => text_of(&element),
        None => text_of(&document.root_element()),
    };
    Ok(text.trim().to_string())
}

/// Builds a presentation from an HTML document.
///
/// Slide containers (`section`, `.slide`, `article`) are preferred. Only when the
/// document has none are `h1`/`h2` headings used as slide boundaries. If neither yields
/// a slide, the body text becomes a single slide.
///
/// # Arguments
///
/// * `text` - The HTML source.
/// * `title` - Title for the new presentation; blank selects a default.
///
/// # Returns
///
/// A `Result` containing the new `Presentation`.
pub fn import_from_html(text: &str, title: &str) -> Result<Presentation> {
    let document = Html::parse_document(text);
    let title = if title.trim().is_empty() {
        DEFAULT_TITLE
    } else {
        title
    };

    let mut slides = slides_from_containers(&document)?;
    if slides.is_empty() {
        log::warn!("No slide containers found; splitting on h1/h2 headings");
        slides = slides_from_headings(&document)?;
    }
    if slides.is_empty() {
        log::warn!("No headings found; importing the body text as a single slide");
        slides.push(Slide::new(title, body_text(&document)?));
    }

    let presentation = Presentation::new_with_slides(title, slides, ThemeId::ProfessionalBlue);
    log::info!(
        "Imported '{}' from HTML ({} slides)",
        presentation.title,
        presentation.slides.len()
    );
    Ok(presentation)
}
