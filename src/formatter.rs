//! Normalizes a slide's title casing and bullet style.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static SENTENCE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.\n]+").expect("valid sentence pattern"));
static LEADING_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[-*]\s*").expect("valid bullet pattern"));
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").expect("valid newline pattern"));

/// Title and content after formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedSlide {
    pub title: String,
    pub content: String,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let rest = chars.as_str().to_lowercase();
            first.to_uppercase().chain(rest.chars()).collect()
        }
        None => String::new(),
    }
}

/// Upper-cases the first letter of each space-separated word and lower-cases the rest.
pub fn title_case(title: &str) -> String {
    title
        .trim()
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Turns prose into bullets and normalizes existing `-`/`*` markers to `•`.
///
/// Content with no bullet characters is split into sentences on `.` and newlines; two or
/// more sentences become one bullet each. Runs of three or more newlines collapse to a
/// single blank line.
pub fn format_content(content: &str) -> String {
    let mut formatted = content.trim().to_string();

    if !formatted.contains(['•', '-', '*']) {
        let sentences: Vec<&str> = SENTENCE_BREAK
            .split(&formatted)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();
        if sentences.len() > 1 {
            formatted = sentences
                .iter()
                .map(|s| format!("• {}", s))
                .collect::<Vec<_>>()
                .join("\n");
        }
    }

    let formatted = LEADING_MARKER.replace_all(&formatted, "• ");
    BLANK_RUN.replace_all(&formatted, "\n\n").trim().to_string()
}

/// Formats a slide's title and content. Applying it twice gives the same result.
pub fn format_slide(title: &str, content: &str) -> FormattedSlide {
    FormattedSlide {
        title: title_case(title),
        content: format_content(content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_title_and_sentences() {
        let out = format_slide("hello world", "First point. Second point.");
        assert_eq!(out.title, "Hello World");
        assert_eq!(out.content, "• First point\n• Second point");
    }

    #[test]
    fn is_idempotent() {
        let inputs = [
            ("hello world", "First point. Second point."),
            ("  mIxEd   case ", "- one\n* two\n\n\n\nthree"),
            ("", "single sentence"),
            ("état des lieux", "Line one\nLine two"),
            ("t", "-"),
            ("t", "*"),
            ("t", "- a\n-"),
        ];
        for (title, content) in inputs {
            let once = format_slide(title, content);
            let twice = format_slide(&once.title, &once.content);
            assert_eq!(once, twice, "{title:?} / {content:?}");
        }
    }

    #[test]
    fn normalizes_markers_and_blank_runs() {
        assert_eq!(format_content("- one\n*two\n\n\n\nthree"), "• one\n• two\n\nthree");
    }

    #[test]
    fn bare_marker_has_no_trailing_space() {
        assert_eq!(format_content("-"), "•");
        assert_eq!(format_content("- a\n-"), "• a\n•");
    }

    #[test]
    fn leaves_single_sentence_alone() {
        assert_eq!(format_content("  Just one thought  "), "Just one thought");
        assert_eq!(title_case("  mIxEd   case "), "Mixed   Case");
    }
}
