use thiserror::Error;

use crate::converters::export::ExportError;
use crate::converters::import::ImportError;
use crate::store::StoreError;

/// Represents errors that can occur while editing, importing, exporting or storing decks.
///
/// Every variant is local to a single operation: the operation is aborted and nothing
/// is committed to the presentation collection.
#[derive(Error, Debug)]
pub enum DeckError {
    /// Missing or blank user input (topic, title, image, slide selection...).
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The import source could not be parsed or lacks required fields.
    #[error("Unsupported or malformed document: {0}")]
    Format(#[from] ImportError),

    /// Rendering or writing an export failed.
    #[error("Export failed: {0}")]
    Resource(#[from] ExportError),

    /// The presentation collection could not be read or written.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// An I/O error occurred, often while reading an uploaded file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DeckError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        DeckError::Validation(message.into())
    }
}

/// A type alias for `Result<T, DeckError>` for convenience within the crate.
pub type Result<T> = std::result::Result<T, DeckError>;
