//! Hangman over generated terms.
//!
//! The word is a term drawn at random from a definitions batch and the
//! definition is shown as the clue. Six misses lose the round.

use crate::content::Definition;
use crate::error::{ContentKind, ContentUnavailable, IllegalTransition};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

/// Misses allowed before the round is lost.
pub const MAX_MISTAKES: u8 = 6;

/// Letters offered on the on-screen keyboard.
pub const KEYBOARD: &str = "ABCDEFGHIJKLMNÑOPQRSTUVWXYZ";

/// Round status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HangmanStatus {
    /// Guesses accepted.
    Playing,
    /// Every letter found.
    Won,
    /// Six misses.
    Lost,
}

/// Result of guessing a letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter is in the word.
    Hit {
        /// Letter as stored (uppercase).
        letter: char,
        /// Status after the guess.
        status: HangmanStatus,
    },
    /// The letter is not in the word.
    Miss {
        /// Letter as stored (uppercase).
        letter: char,
        /// Misses so far.
        mistakes: u8,
        /// Status after the guess.
        status: HangmanStatus,
    },
    /// Nothing changed.
    Ignored(IllegalTransition),
}

/// One hangman round.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct HangmanRound {
    word: String,
    definition: String,
    guessed: BTreeSet<char>,
    mistakes: u8,
    status: HangmanStatus,
}

impl HangmanRound {
    /// Starts a round for the given term; the word is uppercased.
    #[instrument(skip(definition))]
    pub fn new(term: &str, definition: impl Into<String>) -> Self {
        Self {
            word: term.trim().to_uppercase(),
            definition: definition.into(),
            guessed: BTreeSet::new(),
            mistakes: 0,
            status: HangmanStatus::Playing,
        }
    }

    /// Guesses one letter.
    #[instrument(skip(self), fields(word_len = self.word.chars().count()))]
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        let letter = letter.to_uppercase().next().unwrap_or(letter);

        if self.status != HangmanStatus::Playing {
            debug!("Guess ignored: round finished");
            return GuessOutcome::Ignored(IllegalTransition::RoundOver);
        }
        if !self.guessed.insert(letter) {
            debug!(%letter, "Guess ignored: already guessed");
            return GuessOutcome::Ignored(IllegalTransition::AlreadyGuessed(letter));
        }

        if !self.word.contains(letter) {
            self.mistakes += 1;
            if self.mistakes >= MAX_MISTAKES {
                self.status = HangmanStatus::Lost;
                info!(word = %self.word, "Hangman lost");
            }
            return GuessOutcome::Miss {
                letter,
                mistakes: self.mistakes,
                status: self.status,
            };
        }

        if self.is_solved() {
            self.status = HangmanStatus::Won;
            info!(word = %self.word, mistakes = self.mistakes, "Hangman won");
        }
        GuessOutcome::Hit {
            letter,
            status: self.status,
        }
    }

    /// True when every non-space character has been guessed.
    pub fn is_solved(&self) -> bool {
        self.word
            .chars()
            .all(|c| c == ' ' || self.guessed.contains(&c))
    }

    /// Word with unguessed letters as `_`. Fully shown once lost.
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if c == ' ' || self.status == HangmanStatus::Lost || self.guessed.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    /// Misses left before losing.
    pub fn remaining(&self) -> u8 {
        MAX_MISTAKES.saturating_sub(self.mistakes)
    }
}

/// Hangman engine; holds at most one round.
#[derive(Debug, Clone, Default)]
pub struct HangmanEngine {
    round: Option<HangmanRound>,
}

impl HangmanEngine {
    /// Creates an engine with no round.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current round, if one has started.
    pub fn round(&self) -> Option<&HangmanRound> {
        self.round.as_ref()
    }

    /// Picks a definition uniformly at random and starts a round with it.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when `entries` is empty; the previous
    /// round, if any, is kept.
    #[instrument(skip(self, entries, rng), fields(candidates = entries.len()))]
    pub fn start_round<R: Rng + ?Sized>(
        &mut self,
        entries: &[Definition],
        rng: &mut R,
    ) -> Result<&HangmanRound, ContentUnavailable> {
        let pick = entries
            .choose(rng)
            .ok_or_else(|| ContentUnavailable::new(ContentKind::Definitions))?;
        info!(term = %pick.term(), "Hangman round started");
        let round = self
            .round
            .insert(HangmanRound::new(pick.term(), pick.definition().clone()));
        Ok(&*round)
    }

    /// Guesses a letter in the current round.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        match self.round.as_mut() {
            Some(round) => round.guess_letter(letter),
            None => GuessOutcome::Ignored(IllegalTransition::NoRound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn letters_are_uppercased() {
        let mut round = HangmanRound::new("útero", "Órgano donde se desarrolla el feto");
        assert_eq!(round.word(), "ÚTERO");
        assert!(matches!(round.guess_letter('t'), GuessOutcome::Hit { letter: 'T', .. }));
    }

    #[test]
    fn spaces_need_no_guess() {
        let mut round = HangmanRound::new("cuerpo luteo", "d");
        for c in "CUERPOLT".chars() {
            round.guess_letter(c);
        }
        assert_eq!(*round.status(), HangmanStatus::Won);
        assert_eq!(round.masked_word(), "CUERPO LUTEO");
    }

    #[test]
    fn masked_word_hides_unguessed() {
        let mut round = HangmanRound::new("ovulo", "d");
        round.guess_letter('O');
        assert_eq!(round.masked_word(), "O___O");
    }

    #[test]
    fn empty_batch_cannot_start() {
        let mut engine = HangmanEngine::new();
        let mut rng = StdRng::seed_from_u64(7);
        assert!(engine.start_round(&[], &mut rng).is_err());
        assert!(engine.round().is_none());
    }

    #[test]
    fn guess_without_round_is_ignored() {
        let mut engine = HangmanEngine::new();
        assert_eq!(
            engine.guess_letter('A'),
            GuessOutcome::Ignored(IllegalTransition::NoRound)
        );
    }

    #[test]
    fn start_round_picks_from_batch() {
        let entries = vec![
            Definition::new("Cigoto", "Célula resultante de la fecundación"),
            Definition::new("Placenta", "Órgano de intercambio materno-fetal"),
        ];
        let mut engine = HangmanEngine::new();
        let mut rng = StdRng::seed_from_u64(42);
        let round = engine.start_round(&entries, &mut rng).unwrap();
        assert!(round.word() == "CIGOTO" || round.word() == "PLACENTA");
        assert_eq!(*round.mistakes(), 0);
        assert_eq!(*round.status(), HangmanStatus::Playing);
    }
}
