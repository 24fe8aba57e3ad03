use thiserror::Error;

/// Errors that can occur while recovering a presentation from an external document.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Invalid presentation format: missing or empty '{0}'")]
    MissingField(&'static str),
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
    #[error("Unsupported file type: {0}")]
    UnsupportedFormat(String),
}

/// A specialized Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;
