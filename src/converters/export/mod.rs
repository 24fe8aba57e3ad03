//! Renders a `Presentation` into downloadable files.
//!
//! Each target format has its own renderer; they share only theme color resolution and
//! the escaping helpers in `utils`. All renderers are pure functions of the presentation
//! (and, for the slide-deck package, the export configuration).
//!
//! # Formats
//! *   PDF: one A4 landscape page per slide.
//! *   PPTX: 16:9 slide-deck package.
//! *   JSON: lossless pretty-printed serialization.
//! *   Markdown, HTML and plain text documents.

mod constants;
mod error;
mod html;
mod json;
mod markdown;
mod pdf;
mod pptx;
mod text;
mod utils;

pub use error::{ExportError, Result};
pub use html::render_html;
pub use json::render_json;
pub use markdown::render_markdown;
pub use pdf::render_pdf;
pub use pptx::render_pptx;
pub use text::render_text;
pub use utils::format_created_date;

use crate::config::ExportConfig;
use crate::models::presentation::Presentation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Supported export targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Pptx,
    Json,
    Markdown,
    Html,
    Text,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 6] = [
        ExportFormat::Pdf,
        ExportFormat::Pptx,
        ExportFormat::Json,
        ExportFormat::Markdown,
        ExportFormat::Html,
        ExportFormat::Text,
    ];

    /// File extension without the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Pptx => "pptx",
            ExportFormat::Json => "json",
            ExportFormat::Markdown => "md",
            ExportFormat::Html => "html",
            ExportFormat::Text => "txt",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            ExportFormat::Json => "application/json",
            ExportFormat::Markdown => "text/markdown",
            ExportFormat::Html => "text/html",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    /// Accepts the lowercase format name or its file extension.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "pptx" => Ok(ExportFormat::Pptx),
            "json" => Ok(ExportFormat::Json),
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "html" | "htm" => Ok(ExportFormat::Html),
            "text" | "txt" => Ok(ExportFormat::Text),
            other => Err(format!("unknown export format: {other}")),
        }
    }
}

/// A rendered export, ready to be saved or offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Replaces every character outside `[A-Za-z0-9]` with `_`.
pub fn sanitize_file_name(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}

/// Output file name for `presentation` in `format`, e.g. `Q3_Report.pdf`.
pub fn export_file_name(presentation: &Presentation, format: ExportFormat) -> String {
    format!(
        "{}.{}",
        sanitize_file_name(&presentation.title),
        format.extension()
    )
}

/// Renders `presentation` in the requested format.
///
/// # Arguments
///
/// * `presentation` - The deck to render.
/// * `format` - The target format.
/// * `config` - Deck metadata; only the slide-deck package uses it.
///
/// # Returns
///
/// A `Result` containing the file name, MIME type and payload.
pub fn export_presentation(
    presentation: &Presentation,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<ExportedFile> {
    log::info!(
        "Exporting '{}' ({} slides) as {:?}",
        presentation.title,
        presentation.slides.len(),
        format
    );
    let bytes = match format {
        ExportFormat::Pdf => render_pdf(presentation)?,
        ExportFormat::Pptx => render_pptx(presentation, config)?,
        ExportFormat::Json => render_json(presentation)?.into_bytes(),
        ExportFormat::Markdown => render_markdown(presentation)?.into_bytes(),
        ExportFormat::Html => render_html(presentation)?.into_bytes(),
        ExportFormat::Text => render_text(presentation)?.into_bytes(),
    };
    Ok(ExportedFile {
        file_name: export_file_name(presentation, format),
        mime_type: format.mime_type(),
        bytes,
    })
}

/// Writes `file` into `dir` and returns the final path.
///
/// The payload goes to a hidden temporary sibling first and is renamed into place, so a
/// failed write never leaves a partial file under the final name.
pub async fn save_export(file: &ExportedFile, dir: &Path) -> Result<PathBuf> {
    let target = dir.join(&file.file_name);
    let temp = dir.join(format!(".{}.tmp", file.file_name));

    let written = match tokio::fs::write(&temp, &file.bytes).await {
        Ok(()) => tokio::fs::rename(&temp, &target).await,
        Err(e) => Err(e),
    };
    if let Err(e) = written {
        log::warn!("Failed to save {}: {}", target.display(), e);
        if let Err(cleanup) = tokio::fs::remove_file(&temp).await {
            log::debug!("Temporary file {} not removed: {}", temp.display(), cleanup);
        }
        return Err(e.into());
    }

    log::info!("Saved {} ({} bytes)", target.display(), file.bytes.len());
    Ok(target)
}

/// Renders the slide-deck package and saves it into `dir`.
pub async fn write_pptx(
    presentation: &Presentation,
    config: &ExportConfig,
    dir: &Path,
) -> Result<PathBuf> {
    let file = export_presentation(presentation, ExportFormat::Pptx, config)?;
    save_export(&file, dir).await
}
