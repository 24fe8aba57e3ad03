use thiserror::Error;

/// Errors that can occur while rendering a presentation to an export format.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Formatting error during document generation: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("Failed to serialize presentation: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Failed to build slide-deck archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("I/O error while writing export: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
