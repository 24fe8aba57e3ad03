//! Page geometry shared by the PDF and slide-deck renderers.

// --- PDF (A4 landscape, millimetres) ---
pub const PT_PER_MM: f64 = 72.0 / 25.4;
pub const PDF_PAGE_WIDTH_MM: f64 = 297.0;
pub const PDF_PAGE_HEIGHT_MM: f64 = 210.0;
pub const PDF_MARGIN_MM: f64 = 20.0;
pub const PDF_TITLE_SIZE_PT: f64 = 32.0;
pub const PDF_CONTENT_SIZE_PT: f64 = 16.0;
pub const PDF_FOOTER_SIZE_PT: f64 = 10.0;
/// Vertical space reserved per wrapped title line.
pub const PDF_TITLE_LINE_MM: f64 = 12.0;
pub const PDF_RULE_HEIGHT_MM: f64 = 2.0;
pub const PDF_LINE_HEIGHT_FACTOR: f64 = 1.15;

// --- Slide deck (16:9, inches) ---
pub const EMU_PER_INCH: f64 = 914400.0;
pub const DECK_WIDTH_IN: f64 = 10.0;
pub const DECK_HEIGHT_IN: f64 = 5.625;
pub const DECK_FONT_FACE: &str = "Arial";
pub const DECK_TITLE_SIZE_PT: u32 = 44;
pub const DECK_BODY_SIZE_PT: u32 = 18;

/// Converts inches to English Metric Units.
pub fn emu(inches: f64) -> i64 {
    (inches * EMU_PER_INCH).round() as i64
}
