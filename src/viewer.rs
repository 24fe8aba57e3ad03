//! Full-screen playback state for presenting a deck.

use crate::errors::{DeckError, Result};
use crate::models::presentation::Presentation;
use crate::models::slide::Slide;

/// A navigation request coming from the keyboard or on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    Exit,
}

impl Navigation {
    /// Maps a DOM `KeyboardEvent.key` value to a navigation request.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowRight" | " " => Some(Navigation::Next),
            "ArrowLeft" => Some(Navigation::Previous),
            "Escape" => Some(Navigation::Exit),
            _ => None,
        }
    }
}

/// Cursor over the slides of a presentation. Borrowing the deck keeps it unchanged
/// while it is being presented.
#[derive(Debug, Clone)]
pub struct Playback<'a> {
    slides: &'a [Slide],
    index: usize,
}

impl<'a> Playback<'a> {
    /// Starts playback at the first slide.
    ///
    /// # Errors
    ///
    /// `DeckError::Validation` if the deck has no slides.
    pub fn new(presentation: &'a Presentation) -> Result<Self> {
        if presentation.slides.is_empty() {
            return Err(DeckError::validation("Add at least one slide to present"));
        }
        Ok(Playback {
            slides: &presentation.slides,
            index: 0,
        })
    }

    pub fn current(&self) -> &'a Slide {
        &self.slides[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.slides.len()
    }

    /// Advances one slide. Returns `false` when already on the last slide.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Goes back one slide. Returns `false` when already on the first slide.
    pub fn previous(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Applies a navigation request. Returns `false` once playback should end.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        match navigation {
            Navigation::Next => {
                self.next();
            }
            Navigation::Previous => {
                self.previous();
            }
            Navigation::Exit => return false,
        }
        true
    }

    /// One-based position, e.g. `"2 / 7"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.slides.len())
    }
}
