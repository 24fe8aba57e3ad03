//! JavaScript bindings. Presentations cross the boundary as JSON strings in the same
//! camelCase shape the JSON exporter writes.

use wasm_bindgen::prelude::*;

use crate::config::ExportConfig;
use crate::converters::export::{export_presentation, ExportFormat};
use crate::converters::import::{import_text, ImportFormat};
use crate::formatter::format_slide;
use crate::models::presentation::Presentation;
use crate::models::template::{templates_by_category, TemplateCategory, TEMPLATES};
use crate::models::theme::THEMES;
use crate::outline::{generate_outline, validate_outline_request};

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_presentation(json: &str) -> Result<Presentation, JsValue> {
    serde_json::from_str(json).map_err(to_js)
}

/// Installs the console logger and panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn init_logging() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        log::debug!("Console logger already installed");
    }
}

/// Renders `presentation_json` as `format` (a format name such as `markdown` or an
/// extension such as `md`) and returns the file bytes.
#[wasm_bindgen]
pub fn export_document(
    presentation_json: &str,
    format: &str,
    author: Option<String>,
    company: Option<String>,
) -> Result<Vec<u8>, JsValue> {
    let presentation = parse_presentation(presentation_json)?;
    let format: ExportFormat = format.parse().map_err(to_js)?;
    let defaults = ExportConfig::default();
    let config = ExportConfig {
        author: author.unwrap_or(defaults.author),
        company: company.unwrap_or(defaults.company),
    };
    let file = export_presentation(&presentation, format, &config).map_err(to_js)?;
    Ok(file.bytes)
}

/// Download name for `presentation_json` in `format`.
#[wasm_bindgen]
pub fn export_file_name(presentation_json: &str, format: &str) -> Result<String, JsValue> {
    let presentation = parse_presentation(presentation_json)?;
    let format: ExportFormat = format.parse().map_err(to_js)?;
    Ok(crate::converters::export::export_file_name(&presentation, format))
}

/// Parses a document and returns the new presentation as JSON. `format` is a file
/// extension such as `md` or `html`.
#[wasm_bindgen]
pub fn import_document(text: &str, format: &str, title: &str) -> Result<String, JsValue> {
    let format = ImportFormat::from_extension(format)
        .ok_or_else(|| to_js(format!("Unsupported file type: {}", format)))?;
    let presentation = import_text(text, format, title).map_err(to_js)?;
    serde_json::to_string(&presentation).map_err(to_js)
}

/// Generates outline slides and returns them as a JSON array.
#[wasm_bindgen]
pub fn generate_outline_slides(topic: &str, slide_count: usize) -> Result<String, JsValue> {
    validate_outline_request(topic, slide_count).map_err(to_js)?;
    serde_json::to_string(&generate_outline(topic, slide_count)).map_err(to_js)
}

/// Formats slide text and returns `{ "title": ..., "content": ... }`.
#[wasm_bindgen]
pub fn format_slide_text(title: &str, content: &str) -> Result<String, JsValue> {
    serde_json::to_string(&format_slide(title, content)).map_err(to_js)
}

/// The theme registry as a JSON array.
#[wasm_bindgen]
pub fn list_themes() -> Result<String, JsValue> {
    serde_json::to_string(&THEMES).map_err(to_js)
}

/// Template catalog as a JSON array, optionally limited to one category.
#[wasm_bindgen]
pub fn list_templates(category: Option<String>) -> Result<String, JsValue> {
    match category {
        Some(name) => {
            let category = TemplateCategory::from_str_opt(&name)
                .ok_or_else(|| to_js(format!("Unknown template category: {}", name)))?;
            let templates: Vec<_> = templates_by_category(category).collect();
            serde_json::to_string(&templates).map_err(to_js)
        }
        None => serde_json::to_string(&TEMPLATES).map_err(to_js),
    }
}
