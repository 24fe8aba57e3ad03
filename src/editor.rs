//! Editing operations on a single presentation.
//!
//! Every successful mutation refreshes `updated_at`. Failed operations leave the deck
//! untouched.

use crate::errors::{DeckError, Result};
use crate::formatter::{format_slide, FormattedSlide};
use crate::models::presentation::Presentation;
use crate::models::slide::{ImagePosition, Slide, SlideUpdate};
use crate::models::template::PresentationTemplate;
use crate::models::theme::ThemeId;

const WELCOME_TITLE: &str = "Welcome";
const WELCOME_CONTENT: &str = "Start editing your presentation here.";
const NEW_SLIDE_TITLE: &str = "New Slide";

fn require_title(title: &str) -> Result<()> {
    if title.trim().is_empty() {
        return Err(DeckError::validation("Please enter a presentation title"));
    }
    Ok(())
}

impl Presentation {
    /// Creates a new deck with a single welcome slide.
    pub fn create(title: &str) -> Result<Self> {
        require_title(title)?;
        let slides = vec![Slide::new(WELCOME_TITLE, WELCOME_CONTENT)];
        Ok(Presentation::new_with_slides(title, slides, ThemeId::default()))
    }

    /// Creates a new deck from a starter template.
    pub fn from_template(template: &PresentationTemplate, title: &str) -> Result<Self> {
        require_title(title)?;
        log::debug!("Creating '{}' from template '{}'", title, template.id);
        Ok(template.instantiate(title))
    }

    fn index_of(&self, slide_id: &str) -> Result<usize> {
        self.slide_index(slide_id)
            .ok_or_else(|| DeckError::validation(format!("Slide '{}' not found", slide_id)))
    }

    /// Appends a blank slide and returns its index.
    pub fn add_slide(&mut self) -> usize {
        self.slides.push(Slide::new(NEW_SLIDE_TITLE, ""));
        self.touch();
        self.slides.len() - 1
    }

    pub fn update_slide(&mut self, slide_id: &str, update: SlideUpdate) -> Result<()> {
        let index = self.index_of(slide_id)?;
        update.apply(&mut self.slides[index]);
        self.touch();
        Ok(())
    }

    /// Removes a slide and returns it. The deck may become empty.
    pub fn delete_slide(&mut self, slide_id: &str) -> Result<Slide> {
        let index = self.index_of(slide_id)?;
        let removed = self.slides.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Moves the slide at `from` so that it ends up at index `to`.
    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<()> {
        let len = self.slides.len();
        if from >= len || to >= len {
            return Err(DeckError::validation(format!(
                "Cannot move slide {} to {} in a deck of {}",
                from, to, len
            )));
        }
        let slide = self.slides.remove(from);
        self.slides.insert(to, slide);
        self.touch();
        Ok(())
    }

    pub fn set_theme(&mut self, theme: ThemeId) {
        self.theme = theme;
        self.touch();
    }

    pub fn rename(&mut self, title: &str) -> Result<()> {
        require_title(title)?;
        self.title = title.to_string();
        self.touch();
        Ok(())
    }

    /// Attaches an image (absolute URL or `data:` URI) to a slide.
    pub fn set_slide_image(
        &mut self,
        slide_id: &str,
        url: &str,
        position: ImagePosition,
    ) -> Result<()> {
        let url = url.trim();
        if url.is_empty() {
            return Err(DeckError::validation("Please enter an image URL"));
        }
        let index = self.index_of(slide_id)?;
        let slide = &mut self.slides[index];
        slide.image_url = Some(url.to_string());
        slide.image_position = position;
        self.touch();
        Ok(())
    }

    pub fn clear_slide_image(&mut self, slide_id: &str) -> Result<()> {
        let index = self.index_of(slide_id)?;
        let slide = &mut self.slides[index];
        slide.image_url = None;
        slide.image_position = ImagePosition::Top;
        self.touch();
        Ok(())
    }

    /// Appends generated or imported slides, e.g. an outline.
    pub fn append_slides(&mut self, slides: Vec<Slide>) {
        self.slides.extend(slides);
        self.touch();
    }

    /// Applies the slide formatter to one slide and returns the new text.
    pub fn format_slide(&mut self, slide_id: &str) -> Result<FormattedSlide> {
        let index = self.index_of(slide_id)?;
        let slide = &mut self.slides[index];
        if slide.title.trim().is_empty() && slide.content.trim().is_empty() {
            return Err(DeckError::validation("Please add some content to format"));
        }
        let formatted = format_slide(&slide.title, &slide.content);
        slide.title = formatted.title.clone();
        slide.content = formatted.content.clone();
        self.touch();
        Ok(formatted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::template::template_by_id;

    fn deck() -> Presentation {
        let mut p = Presentation::create("Deck").unwrap();
        p.add_slide();
        p.add_slide();
        p
    }

    fn titles(p: &Presentation) -> Vec<&str> {
        p.slides.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn create_adds_welcome_slide() {
        let p = Presentation::create("Morning Report").unwrap();
        assert_eq!(p.slides.len(), 1);
        assert_eq!(p.slides[0].title, WELCOME_TITLE);
        assert_eq!(p.slides[0].content, WELCOME_CONTENT);
        assert!(matches!(
            Presentation::create("  "),
            Err(DeckError::Validation(_))
        ));
    }

    #[test]
    fn from_template_uses_template_theme() {
        let template = template_by_id("clinical-rounds").unwrap();
        let p = Presentation::from_template(template, "Rounds").unwrap();
        assert_eq!(p.theme, template.theme);
        assert_eq!(p.slides.len(), template.slides.len());
        assert!(Presentation::from_template(template, "").is_err());
    }

    #[test]
    fn add_and_delete_slides() {
        let mut p = deck();
        assert_eq!(titles(&p), vec![WELCOME_TITLE, NEW_SLIDE_TITLE, NEW_SLIDE_TITLE]);
        let id = p.slides[0].id.clone();
        let removed = p.delete_slide(&id).unwrap();
        assert_eq!(removed.title, WELCOME_TITLE);
        assert_eq!(p.slides.len(), 2);
        assert!(p.delete_slide(&id).is_err());
    }

    #[test]
    fn move_slide_reorders_and_checks_bounds() {
        let mut p = deck();
        p.slides[2].title = "Last".to_string();
        p.move_slide(2, 0).unwrap();
        assert_eq!(titles(&p), vec!["Last", WELCOME_TITLE, NEW_SLIDE_TITLE]);
        p.move_slide(0, 2).unwrap();
        assert_eq!(titles(&p)[2], "Last");
        assert!(p.move_slide(3, 0).is_err());
        assert!(p.move_slide(0, 3).is_err());
    }

    #[test]
    fn images_are_set_and_cleared() {
        let mut p = deck();
        let id = p.slides[1].id.clone();
        assert!(p.set_slide_image(&id, "   ", ImagePosition::Left).is_err());
        p.set_slide_image(&id, "https://example.com/x.png", ImagePosition::Left)
            .unwrap();
        assert_eq!(p.slides[1].image_position, ImagePosition::Left);

        p.clear_slide_image(&id).unwrap();
        assert_eq!(p.slides[1].image_url, None);
        assert_eq!(p.slides[1].image_position, ImagePosition::Top);
    }

    #[test]
    fn update_rename_and_theme() {
        let mut p = deck();
        let id = p.slides[1].id.clone();
        p.update_slide(
            &id,
            SlideUpdate {
                content: Some("Body".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(p.slides[1].content, "Body");
        assert!(p.update_slide("missing", SlideUpdate::default()).is_err());

        p.rename("Renamed").unwrap();
        assert_eq!(p.title, "Renamed");
        assert!(p.rename("").is_err());
        assert_eq!(p.title, "Renamed");

        p.set_theme(ThemeId::MinimalBlack);
        assert_eq!(p.theme, ThemeId::MinimalBlack);
        assert!(p.updated_at >= p.created_at);
    }

    #[test]
    fn format_slide_rewrites_text() {
        let mut p = deck();
        let id = p.slides[1].id.clone();
        assert!(p.format_slide(&id).is_ok());
        p.slides[1].title = " ".to_string();
        assert!(matches!(p.format_slide(&id), Err(DeckError::Validation(_))));

        p.slides[1].title = "intro notes".to_string();
        p.slides[1].content = "One. Two.".to_string();
        let formatted = p.format_slide(&id).unwrap();
        assert_eq!(formatted.title, "Intro Notes");
        assert_eq!(p.slides[1].content, "• One\n• Two");
    }

    #[test]
    fn append_slides_keeps_order() {
        let mut p = deck();
        p.append_slides(vec![Slide::new("A", ""), Slide::new("B", "")]);
        assert_eq!(&titles(&p)[3..], &["A", "B"]);
    }
}
