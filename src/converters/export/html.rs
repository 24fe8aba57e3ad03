use super::error::Result;
use super::utils::escape_html;
use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::{resolve_theme, ThemeConfig};
use std::fmt::Write;

/// Renders a presentation as a self-contained HTML document.
///
/// Theme colors are embedded in an inline stylesheet so the file needs no external
/// resources. Each slide becomes a `<section class="slide">` block, which is also the
/// shape the HTML importer recognises first.
///
/// # Arguments
///
/// * `presentation` - A reference to the `Presentation` object.
///
/// # Returns
///
/// A `Result` containing the complete HTML document.
pub fn render_html(presentation: &Presentation) -> Result<String> {
    let theme = resolve_theme(Some(presentation.theme));
    let title = escape_html(&presentation.title);
    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, r#"<html lang="en">"#)?;
    writeln!(html, "<head>")?;
    writeln!(html, r#"<meta charset="UTF-8">"#)?;
    writeln!(
        html,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#
    )?;
    writeln!(html, "<title>{}</title>", title)?;
    write_stylesheet(&mut html, theme)?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, r#"<h1 class="deck-title">{}</h1>"#, title)?;

    let total = presentation.slides.len();
    for (index, slide) in presentation.slides.iter().enumerate() {
        write_slide(&mut html, slide, index + 1, total)?;
    }

    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;
    Ok(html)
}

fn write_stylesheet(html: &mut String, theme: &ThemeConfig) -> Result<()> {
    writeln!(html, "<style>")?;
    writeln!(
        html,
        "body {{ margin: 0; padding: 2rem; font-family: Arial, Helvetica, sans-serif; background: #f4f4f5; }}"
    )?;
    writeln!(
        html,
        ".deck-title {{ text-align: center; color: {}; }}",
        theme.secondary_color
    )?;
    writeln!(
        html,
        ".slide {{ background: {}; color: {}; max-width: 960px; min-height: 540px; margin: 0 auto 2rem; padding: 3rem; box-sizing: border-box; border-radius: 12px; display: flex; flex-direction: column; }}",
        theme.background, theme.text_color
    )?;
    writeln!(
        html,
        ".slide h2 {{ margin: 0 0 1.5rem; font-size: 2.25rem; padding-bottom: 0.75rem; border-bottom: 4px solid {}; }}",
        theme.accent_color
    )?;
    writeln!(
        html,
        ".slide img {{ max-width: 100%; max-height: 320px; object-fit: contain; margin-bottom: 1rem; }}"
    )?;
    writeln!(
        html,
        ".slide .content {{ white-space: pre-wrap; font-size: 1.25rem; line-height: 1.6; flex: 1; }}"
    )?;
    writeln!(
        html,
        ".slide .footer {{ text-align: right; font-size: 0.875rem; color: {}; }}",
        theme.accent_color
    )?;
    writeln!(html, "</style>")?;
    Ok(())
}

fn write_slide(html: &mut String, slide: &Slide, number: usize, total: usize) -> Result<()> {
    let title = escape_html(&slide.title);
    writeln!(html, r#"<section class="slide">"#)?;
    writeln!(html, "<h2>{}</h2>", title)?;
    if let Some(url) = &slide.image_url {
        writeln!(
            html,
            r#"<img src="{}" alt="{}" data-position="{}">"#,
            escape_html(url),
            title,
            slide.image_position
        )?;
    }
    writeln!(
        html,
        r#"<div class="content">{}</div>"#,
        escape_html(&slide.content)
    )?;
    writeln!(
        html,
        r#"<div class="footer">Slide {} of {}</div>"#,
        number, total
    )?;
    writeln!(html, "</section>")?;
    Ok(())
}
