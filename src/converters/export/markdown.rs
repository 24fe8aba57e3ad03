use super::error::Result;
use super::utils::format_created_date;
use crate::models::presentation::Presentation;
use std::fmt::Write;

/// Renders a presentation as a Markdown document.
///
/// The deck title becomes a level-1 heading followed by the creation date; each slide
/// becomes a level-2 heading with its content and optional image reference. Slides are
/// separated by horizontal rules (none after the last slide).
///
/// # Arguments
///
/// * `presentation` - A reference to the `Presentation` object.
///
/// # Returns
///
/// A `Result` containing the Markdown text.
pub fn render_markdown(presentation: &Presentation) -> Result<String> {
    let mut output = String::new();

    // --- Presentation Header ---
    writeln!(output, "# {}\n", presentation.title)?;
    writeln!(
        output,
        "*Created: {}*\n",
        format_created_date(presentation.created_at)
    )?;
    writeln!(output, "---\n")?;

    let last = presentation.slides.len().saturating_sub(1);
    for (index, slide) in presentation.slides.iter().enumerate() {
        writeln!(output, "## {}\n", slide.title)?;
        writeln!(output, "{}\n", slide.content)?;

        if let Some(url) = &slide.image_url {
            writeln!(output, "![{}]({})\n", slide.title, url)?;
        }

        // Separator before the next slide only
        if index < last {
            writeln!(output, "---\n")?;
        }
    }

    log::debug!(
        "Rendered {} slides to Markdown ({} bytes)",
        presentation.slides.len(),
        output.len()
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{slide::Slide, theme::ThemeId};

    fn deck() -> Presentation {
        let mut second = Slide::with_id("s2", "Results", "• Up 12%");
        second.image_url = Some("https://example.com/chart.png".to_string());
        Presentation::new_with_slides(
            "Quarterly Review",
            vec![Slide::with_id("s1", "Overview", "Line one\nLine two"), second],
            ThemeId::default(),
        )
    }

    #[test]
    fn renders_headings_and_content() {
        let md = render_markdown(&deck()).unwrap();
        assert!(md.starts_with("# Quarterly Review\n\n*Created: "));
        assert!(md.contains("## Overview\n\nLine one\nLine two\n\n"));
        assert!(md.contains("## Results\n\n• Up 12%\n\n![Results](https://example.com/chart.png)\n"));
    }

    #[test]
    fn separates_slides_but_not_after_the_last() {
        let md = render_markdown(&deck()).unwrap();
        // header rule plus one separator between the two slides
        assert_eq!(md.matches("---\n").count(), 2);
        assert!(!md.trim_end().ends_with("---"));
    }

    #[test]
    fn empty_deck_renders_only_header() {
        let empty = Presentation::new_with_slides("Empty", vec![], ThemeId::default());
        let md = render_markdown(&empty).unwrap();
        assert!(md.ends_with("---\n\n"));
        assert!(!md.contains("##"));
    }
}
