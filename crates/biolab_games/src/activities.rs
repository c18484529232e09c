//! Flashcard browser over a topic's definitions.

use crate::content::Definition;
use crate::error::{ContentKind, ContentUnavailable};
use derive_getters::Getters;
use tracing::instrument;

/// Circular deck of term/definition cards.
#[derive(Debug, Clone, Getters)]
pub struct ActivityBrowser {
    cards: Vec<Definition>,
    index: usize,
    flipped: bool,
}

impl ActivityBrowser {
    /// Builds a deck starting on the first card, term side up.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] for an empty list.
    #[instrument(skip(cards), fields(cards = cards.len()))]
    pub fn new(cards: Vec<Definition>) -> Result<Self, ContentUnavailable> {
        if cards.is_empty() {
            return Err(ContentUnavailable::new(ContentKind::Definitions));
        }
        Ok(Self {
            cards,
            index: 0,
            flipped: false,
        })
    }

    /// Card under the cursor.
    pub fn current(&self) -> &Definition {
        &self.cards[self.index]
    }

    /// Advances, wrapping to the first card.
    pub fn next(&mut self) -> &Definition {
        self.flipped = false;
        self.index = (self.index + 1) % self.cards.len();
        self.current()
    }

    /// Steps back, wrapping to the last card.
    pub fn prev(&mut self) -> &Definition {
        self.flipped = false;
        self.index = (self.index + self.cards.len() - 1) % self.cards.len();
        self.current()
    }

    /// Turns the card over. Returns true when the definition side is up.
    pub fn flip(&mut self) -> bool {
        self.flipped = !self.flipped;
        self.flipped
    }

    /// "Tarjeta n de m".
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.cards.len())
    }
}
