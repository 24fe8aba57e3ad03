//! Conversions between a `Presentation` and external document formats.

pub mod export;
pub mod import;
