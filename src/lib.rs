pub mod config;
pub mod converters;
pub mod editor;
pub mod errors;
pub mod formatter;
pub mod library;
pub mod media;
pub mod models;
pub mod outline;
pub mod store;
pub mod viewer;

pub use config::{ExportConfig, Settings};
pub use converters::export::{export_presentation, ExportFormat, ExportedFile};
pub use converters::import::{import_file, ImportFormat};
pub use errors::{DeckError, Result};
pub use library::PresentationLibrary;
pub use models::presentation::Presentation;
pub use models::slide::{ImagePosition, Slide, SlideUpdate};
pub use models::theme::ThemeId;

// bindings
pub mod wasm;
