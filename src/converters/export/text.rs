use super::error::Result;
use super::utils::format_created_date;
use crate::models::presentation::Presentation;
use std::fmt::Write;

/// Renders a presentation as plain text with `=`/`-` underlined headings.
pub fn render_text(presentation: &Presentation) -> Result<String> {
    let mut output = String::new();

    writeln!(output, "{}", presentation.title)?;
    writeln!(output, "{}", underline(&presentation.title, '='))?;
    writeln!(
        output,
        "Created: {}\n",
        format_created_date(presentation.created_at)
    )?;

    for (index, slide) in presentation.slides.iter().enumerate() {
        writeln!(output, "--- Slide {} ---", index + 1)?;
        writeln!(output, "{}", slide.title)?;
        writeln!(output, "{}", underline(&slide.title, '-'))?;
        writeln!(output, "{}\n", slide.content)?;
    }

    Ok(output)
}

/// A run of `mark` as long as `text` in characters.
fn underline(text: &str, mark: char) -> String {
    std::iter::repeat(mark).take(text.chars().count()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{slide::Slide, theme::ThemeId};

    #[test]
    fn underlines_match_title_lengths() {
        let deck = Presentation::new_with_slides(
            "Café Tour",
            vec![Slide::with_id("s1", "Menu", "Espresso\nLatte")],
            ThemeId::default(),
        );
        let text = render_text(&deck).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Café Tour");
        assert_eq!(lines[1], "=========");
        assert!(lines[2].starts_with("Created: "));
        assert_eq!(lines[4], "--- Slide 1 ---");
        assert_eq!(lines[5], "Menu");
        assert_eq!(lines[6], "----");
        assert_eq!(lines[7], "Espresso");
    }

    #[test]
    fn empty_deck_is_just_the_header() {
        let deck = Presentation::new_with_slides("Blank", Vec::new(), ThemeId::default());
        let text = render_text(&deck).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "=====");
        assert_eq!(lines[3], "");
        assert!(!text.contains("--- Slide"));
    }
}
