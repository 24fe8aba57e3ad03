use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a slide's image is placed relative to its text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
    /// The image fills the slide behind the text.
    Background,
}

impl ImagePosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImagePosition::Top => "top",
            ImagePosition::Bottom => "bottom",
            ImagePosition::Left => "left",
            ImagePosition::Right => "right",
            ImagePosition::Background => "background",
        }
    }
}

impl fmt::Display for ImagePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImagePosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(ImagePosition::Top),
            "bottom" => Ok(ImagePosition::Bottom),
            "left" => Ok(ImagePosition::Left),
            "right" => Ok(ImagePosition::Right),
            "background" => Ok(ImagePosition::Background),
            other => Err(format!("unknown image position: {other}")),
        }
    }
}

/// A single slide of a presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Opaque identifier, assigned once at creation. Unique within its presentation.
    pub id: String,

    pub title: String,

    /// Free text; lines are separated by `\n` and may start with a `•` bullet.
    #[serde(default)]
    pub content: String,

    /// Absolute URL or an embedded `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default)]
    pub image_position: ImagePosition,
}

impl Slide {
    /// Creates a slide with a freshly generated id.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Slide::with_id(super::new_id("slide"), title, content)
    }

    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Slide {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            image_url: None,
            image_position: ImagePosition::default(),
        }
    }

    /// Content lines without the leading and trailing blank lines.
    pub fn trimmed_lines(&self) -> Vec<&str> {
        let lines: Vec<&str> = self.content.split('\n').collect();
        let start = lines.iter().position(|l| !l.trim().is_empty());
        let end = lines.iter().rposition(|l| !l.trim().is_empty());
        match (start, end) {
            (Some(start), Some(end)) => lines[start..=end].to_vec(),
            _ => Vec::new(),
        }
    }
}

/// Partial update applied to a slide; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlideUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<Option<String>>,
    pub image_position: Option<ImagePosition>,
}

impl SlideUpdate {
    pub(crate) fn apply(self, slide: &mut Slide) {
        if let Some(title) = self.title {
            slide.title = title;
        }
        if let Some(content) = self.content {
            slide.content = content;
        }
        if let Some(image_url) = self.image_url {
            slide.image_url = image_url;
        }
        if let Some(position) = self.image_position {
            slide.image_position = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_optional_fields_take_defaults() {
        let slide: Slide = serde_json::from_str(r#"{"id":"s1","title":"Intro"}"#).unwrap();
        assert_eq!(slide.content, "");
        assert_eq!(slide.image_url, None);
        assert_eq!(slide.image_position, ImagePosition::Top);
    }

    #[test]
    fn serializes_camel_case_fields() {
        let mut slide = Slide::with_id("s1", "Intro", "Hello");
        slide.image_url = Some("https://example.com/a.png".to_string());
        slide.image_position = ImagePosition::Background;
        let json = serde_json::to_value(&slide).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.png");
        assert_eq!(json["imagePosition"], "background");
    }

    #[test]
    fn trims_blank_edge_lines_only() {
        let slide = Slide::with_id("s1", "T", "\n\n  \nfirst\n\nsecond\n \n");
        assert_eq!(slide.trimmed_lines(), vec!["first", "", "second"]);
        assert!(Slide::with_id("s2", "T", "\n \n").trimmed_lines().is_empty());
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut slide = Slide::with_id("s1", "Old", "Body");
        SlideUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        }
        .apply(&mut slide);
        assert_eq!(slide.title, "New");
        assert_eq!(slide.content, "Body");
    }
}
