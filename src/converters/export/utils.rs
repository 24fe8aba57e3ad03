//! Escaping and formatting helpers shared by the text-based renderers.

use chrono::{Local, TimeZone};

/// Escapes `&`, `<`, `>`, `"` and `'` for HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Escapes special XML characters for DrawingML text runs and attributes.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Formats a millisecond timestamp as a local `M/D/YYYY` date.
pub fn format_created_date(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(date) => date.format("%-m/%-d/%Y").to_string(),
        None => {
            log::warn!("Timestamp {} is out of range", timestamp_ms);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_xml("R&D <Q3>"), "R&amp;D &lt;Q3&gt;");
    }

    #[test]
    fn formats_dates_without_padding() {
        let date = format_created_date(chrono::Utc::now().timestamp_millis());
        let parts: Vec<&str> = date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
        assert!(!parts[0].starts_with('0'));
    }
}
