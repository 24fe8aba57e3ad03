//! In-memory document model: presentations, slides, themes and starter templates.

pub mod presentation;
pub mod slide;
pub mod template;
pub mod theme;

use uuid::Uuid;

/// Generates an opaque identifier of the form `{prefix}-{uuid}`.
pub(crate) fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
