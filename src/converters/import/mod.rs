//! Recovers a `Presentation` from JSON, Markdown, HTML or plain-text documents.
//!
//! Every importer builds a brand-new presentation with fresh ids and timestamps; none
//! of them touch an existing deck.

mod error;
mod html;
mod json;
mod markdown;

pub use error::{ImportError, Result};
pub use html::import_from_html;
pub use json::import_from_json;
pub use markdown::import_from_markdown;

use crate::errors::DeckError;
use crate::models::presentation::Presentation;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Document types accepted for import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportFormat {
    Json,
    Markdown,
    Html,
    /// Plain text, read with the Markdown importer.
    Text,
}

impl ImportFormat {
    /// Detects the format from a file extension, ignoring case.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(ImportFormat::Json),
            "md" | "markdown" => Some(ImportFormat::Markdown),
            "html" | "htm" => Some(ImportFormat::Html),
            "txt" => Some(ImportFormat::Text),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImportFormat::from_extension)
    }
}

/// File name without its final extension, used as the default import title.
pub fn title_from_file_name(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(dot) if dot + 1 < file_name.len() => &file_name[..dot],
        _ => file_name,
    }
}

/// Parses `text` as `format`. The title is ignored for JSON, which carries its own.
pub fn import_text(text: &str, format: ImportFormat, title: &str) -> Result<Presentation> {
    match format {
        ImportFormat::Json => import_from_json(text),
        ImportFormat::Markdown | ImportFormat::Text => Ok(import_from_markdown(text, title)),
        ImportFormat::Html => import_from_html(text, title),
    }
}

/// Reads and imports a document from disk.
///
/// The format is detected from the extension. Non-JSON documents are titled with
/// `title` when given, otherwise with the file name stem.
///
/// # Errors
///
/// * `DeckError::Validation` if `title` is given but blank.
/// * `DeckError::Io` if the file cannot be read.
/// * `DeckError::Format` if the extension is unsupported or the document is malformed.
pub async fn import_file(path: &Path, title: Option<&str>) -> crate::Result<Presentation> {
    if title.is_some_and(|t| t.trim().is_empty()) {
        return Err(DeckError::validation("Please enter a title"));
    }
    let format = ImportFormat::from_path(path)
        .ok_or_else(|| ImportError::UnsupportedFormat(path.display().to_string()))?;

    let text = tokio::fs::read_to_string(path).await?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    let title = title.unwrap_or_else(|| title_from_file_name(file_name));

    log::debug!("Importing {} as {:?}", path.display(), format);
    Ok(import_text(&text, format, title)?)
}
