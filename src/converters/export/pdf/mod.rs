//! PDF rendering: one A4 landscape page per slide.

mod document;
mod fonts;

use self::document::{escape_literal, ObjectId, PdfDocument};
use self::fonts::{encode_win_ansi, wrap_text, Font};
use super::constants::*;
use super::error::Result;
use crate::models::presentation::Presentation;
use crate::models::slide::Slide;
use crate::models::theme::{primary_background, resolve_theme, Rgb, ThemeConfig};

/// Positions of the wrapped text blocks on a page, in millimetres from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PageLayout {
    pub title_lines: Vec<String>,
    /// Baseline of the first title line.
    pub title_baseline_mm: f64,
    /// Top edge of the accent rule.
    pub rule_top_mm: f64,
    pub content_lines: Vec<String>,
    /// Baseline of the first content line.
    pub content_baseline_mm: f64,
}

fn content_width_mm() -> f64 {
    PDF_PAGE_WIDTH_MM - 2.0 * PDF_MARGIN_MM
}

/// Wraps the title and content of `slide` and places them on the page.
///
/// The rule and content positions depend on how many lines the title wraps to.
pub(crate) fn layout_slide(slide: &Slide) -> PageLayout {
    let width_pt = content_width_mm() * PT_PER_MM;
    let title_lines = wrap_text(&slide.title, Font::Bold, PDF_TITLE_SIZE_PT, width_pt);
    let content_lines = wrap_text(&slide.content, Font::Regular, PDF_CONTENT_SIZE_PT, width_pt);

    let title_block_mm = title_lines.len() as f64 * PDF_TITLE_LINE_MM;
    PageLayout {
        title_baseline_mm: PDF_MARGIN_MM + 15.0,
        rule_top_mm: PDF_MARGIN_MM + title_block_mm + 5.0,
        content_baseline_mm: PDF_MARGIN_MM + title_block_mm + 20.0,
        title_lines,
        content_lines,
    }
}

/// Footer label for page `page` (1-based) of `total`.
pub(crate) fn footer_label(page: usize, total: usize) -> String {
    format!("{}/{}", page, total)
}

// --- Content stream helpers ---

/// Converts a top-based millimetre offset to a PDF y coordinate in points.
fn y_pt(top_mm: f64) -> f64 {
    (PDF_PAGE_HEIGHT_MM - top_mm) * PT_PER_MM
}

fn set_fill(ops: &mut Vec<u8>, color: Rgb) {
    let (r, g, b) = color.to_unit();
    ops.extend_from_slice(format!("{:.3} {:.3} {:.3} rg\n", r, g, b).as_bytes());
}

fn fill_rect(ops: &mut Vec<u8>, left_mm: f64, top_mm: f64, width_mm: f64, height_mm: f64) {
    ops.extend_from_slice(
        format!(
            "{:.2} {:.2} {:.2} {:.2} re f\n",
            left_mm * PT_PER_MM,
            y_pt(top_mm + height_mm),
            width_mm * PT_PER_MM,
            height_mm * PT_PER_MM
        )
        .as_bytes(),
    );
}

/// Draws `lines` starting at the given baseline, stepping down by 1.15 × size.
fn draw_lines(ops: &mut Vec<u8>, lines: &[String], font: Font, size_pt: f64, left_mm: f64, baseline_mm: f64) {
    let leading_mm = size_pt * PDF_LINE_HEIGHT_FACTOR / PT_PER_MM;
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let baseline = baseline_mm + i as f64 * leading_mm;
        ops.extend_from_slice(
            format!(
                "BT /{} {} Tf {:.2} {:.2} Td ",
                font.resource_name(),
                size_pt,
                left_mm * PT_PER_MM,
                y_pt(baseline)
            )
            .as_bytes(),
        );
        ops.extend_from_slice(&escape_literal(&encode_win_ansi(line)));
        ops.extend_from_slice(b" Tj ET\n");
    }
}

/// Builds the uncompressed drawing operators for one slide page.
fn page_operations(slide: &Slide, theme: &ThemeConfig, page: usize, total: usize) -> Vec<u8> {
    let background = Rgb::from_hex(&primary_background(theme));
    let text = Rgb::from_hex(theme.text_color);
    let accent = Rgb::from_hex(theme.accent_color);
    let layout = layout_slide(slide);
    let mut ops = Vec::new();

    set_fill(&mut ops, background);
    fill_rect(&mut ops, 0.0, 0.0, PDF_PAGE_WIDTH_MM, PDF_PAGE_HEIGHT_MM);

    set_fill(&mut ops, text);
    draw_lines(
        &mut ops,
        &layout.title_lines,
        Font::Bold,
        PDF_TITLE_SIZE_PT,
        PDF_MARGIN_MM,
        layout.title_baseline_mm,
    );

    set_fill(&mut ops, accent);
    fill_rect(
        &mut ops,
        PDF_MARGIN_MM,
        layout.rule_top_mm,
        content_width_mm(),
        PDF_RULE_HEIGHT_MM,
    );

    set_fill(&mut ops, text);
    draw_lines(
        &mut ops,
        &layout.content_lines,
        Font::Regular,
        PDF_CONTENT_SIZE_PT,
        PDF_MARGIN_MM,
        layout.content_baseline_mm,
    );

    let footer = [footer_label(page, total)];
    draw_lines(
        &mut ops,
        &footer,
        Font::Regular,
        PDF_FOOTER_SIZE_PT,
        PDF_PAGE_WIDTH_MM - PDF_MARGIN_MM - 20.0,
        PDF_PAGE_HEIGHT_MM - 10.0,
    );
    ops
}

/// Renders a presentation as a PDF document.
///
/// Every slide becomes one landscape A4 page filled with the theme background, with the
/// wrapped title, an accent rule, the wrapped content and a `page/total` footer.
///
/// # Arguments
///
/// * `presentation` - A reference to the `Presentation` object.
///
/// # Returns
///
/// A `Result` containing the PDF bytes.
pub fn render_pdf(presentation: &Presentation) -> Result<Vec<u8>> {
    let theme = resolve_theme(Some(presentation.theme));
    let total = presentation.slides.len();
    let mut doc = PdfDocument::new();

    let catalog = doc.reserve();
    let pages = doc.reserve();
    let regular = doc.add(font_dictionary(Font::Regular));
    let bold = doc.add(font_dictionary(Font::Bold));
    let resources = format!(
        "<< /Font << /{} {} /{} {} >> >>",
        Font::Regular.resource_name(),
        regular.reference(),
        Font::Bold.resource_name(),
        bold.reference()
    );
    let media_box = format!(
        "[0 0 {:.2} {:.2}]",
        PDF_PAGE_WIDTH_MM * PT_PER_MM,
        PDF_PAGE_HEIGHT_MM * PT_PER_MM
    );

    let mut kids: Vec<ObjectId> = Vec::with_capacity(total);
    for (index, slide) in presentation.slides.iter().enumerate() {
        let ops = page_operations(slide, theme, index + 1, total);
        let contents = doc.add_stream(&ops)?;
        let page = doc.add(format!(
            "<< /Type /Page /Parent {} /MediaBox {} /Resources {} /Contents {} >>",
            pages.reference(),
            media_box,
            resources,
            contents.reference()
        ));
        kids.push(page);
    }

    let kid_refs: Vec<String> = kids.iter().map(ObjectId::reference).collect();
    doc.set(
        pages,
        format!(
            "<< /Type /Pages /Kids [{}] /Count {} >>",
            kid_refs.join(" "),
            kids.len()
        ),
    );
    doc.set(
        catalog,
        format!("<< /Type /Catalog /Pages {} >>", pages.reference()),
    );

    let mut info = b"<< /Title ".to_vec();
    info.extend_from_slice(&escape_literal(&encode_win_ansi(&presentation.title)));
    info.extend_from_slice(b" /Producer (Slidecraft) >>");
    let info = doc.add(info);

    let bytes = doc.finish(catalog, Some(info));
    log::debug!("Rendered {} slides to PDF ({} bytes)", total, bytes.len());
    Ok(bytes)
}

fn font_dictionary(font: Font) -> String {
    format!(
        "<< /Type /Font /Subtype /Type1 /BaseFont /{} /Encoding /WinAnsiEncoding >>",
        font.base_font()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::theme::ThemeId;
    use flate2::read::ZlibDecoder;
    use std::io::Read;

    fn deck(slides: Vec<Slide>) -> Presentation {
        Presentation::new_with_slides("Quarterly Review", slides, ThemeId::ProfessionalBlue)
    }

    fn text_of(bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    #[test]
    fn one_page_per_slide() {
        let p = deck(vec![
            Slide::with_id("s1", "Intro", "Hello"),
            Slide::with_id("s2", "Details", "• One\n• Two"),
            Slide::with_id("s3", "End", ""),
        ]);
        let pdf = text_of(&render_pdf(&p).unwrap());
        assert!(pdf.starts_with("%PDF-1.4"));
        assert!(pdf.contains("/Count 3"));
        assert_eq!(pdf.matches("/Type /Page ").count(), 3);
        assert!(pdf.contains("/BaseFont /Helvetica-Bold"));
        assert!(pdf.contains("/Title (Quarterly Review)"));
    }

    #[test]
    fn empty_deck_renders_no_pages() {
        let pdf = text_of(&render_pdf(&deck(vec![])).unwrap());
        assert!(pdf.contains("/Kids [] /Count 0"));
    }

    #[test]
    fn rule_moves_down_with_wrapped_title() {
        let short = layout_slide(&Slide::with_id("s1", "Short", ""));
        let long = layout_slide(&Slide::with_id(
            "s2",
            "A considerably longer slide title that cannot possibly fit on a single line of the page",
            "",
        ));
        assert_eq!(short.title_lines.len(), 1);
        assert!((short.rule_top_mm - (PDF_MARGIN_MM + 12.0 + 5.0)).abs() < 1e-9);
        assert!((short.content_baseline_mm - (PDF_MARGIN_MM + 12.0 + 20.0)).abs() < 1e-9);

        let lines = long.title_lines.len() as f64;
        assert!(lines >= 2.0);
        assert!((long.rule_top_mm - (PDF_MARGIN_MM + lines * 12.0 + 5.0)).abs() < 1e-9);
    }

    #[test]
    fn page_stream_draws_footer_and_colors() {
        let p = deck(vec![Slide::with_id("s1", "Intro", "• Point")]);
        let theme = resolve_theme(Some(p.theme));
        let ops = page_operations(&p.slides[0], theme, 2, 5);
        let text = text_of(&ops);
        assert!(text.contains("(2/5) Tj"));
        assert!(text.contains("/F2 32 Tf"));
        // bullet is written as WinAnsi 0x95
        assert!(ops.windows(2).any(|w| w == [0x95, b' ']));
        assert_eq!(text.matches(" re f").count(), 2);
    }

    #[test]
    fn page_streams_are_deflated() {
        let p = deck(vec![Slide::with_id("s1", "Intro", "Hello")]);
        let pdf = render_pdf(&p).unwrap();
        let start = pdf.windows(7).position(|w| w == b"stream\n").unwrap() + 7;
        let end = pdf.windows(10).position(|w| w == b"\nendstream").unwrap();
        let mut decoded = String::new();
        ZlibDecoder::new(&pdf[start..end])
            .read_to_string(&mut decoded)
            .unwrap();
        assert!(decoded.contains("(Intro) Tj"));
        assert!(decoded.contains("(1/1) Tj"));
    }
}
