//! Biolab games - pure study and game logic
//!
//! Every engine here is a plain value owned by one player session. Engines
//! never perform I/O: content arrives already fetched, and inputs that the
//! current state does not accept come back as `Ignored` outcomes instead of
//! errors.
//!
//! # Architecture
//!
//! - **Content**: payload types produced by the content generator
//! - **Tic-tac-toe**: trivia-gated moves, win and draw detection
//! - **Hangman**: letter guessing with six allowed misses
//! - **Jeopardy**: category board with self-graded clues
//! - **Feud**: two-team survey game with strikes and steals
//! - **Study**: flashcard browser and multiple-choice quiz
//!
//! # Example
//!
//! ```
//! use biolab_games::{JeopardyCategory, JeopardyClue, JeopardyEngine};
//!
//! let board = vec![JeopardyCategory::new(
//!     "Feto",
//!     vec![JeopardyClue::new(100, "¿Dónde se implanta el embrión?", "Útero")],
//! )];
//! let mut engine = JeopardyEngine::load(board)?;
//! engine.open_cell(0, 0);
//! engine.reveal();
//! engine.resolve(true);
//! assert_eq!(*engine.score(), 100);
//! # Ok::<(), biolab_games::ContentUnavailable>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod activities;
mod content;
mod error;
mod feud;
mod hangman;
mod jeopardy;
mod matching;
mod quiz;
pub mod tictactoe;

pub use activities::ActivityBrowser;
pub use content::{
    Definition, FeudAnswer, FeudQuestion, GameKind, JeopardyCategory, JeopardyClue, QuizQuestion,
    TopicId, TriviaPair,
};
pub use error::{ContentKind, ContentUnavailable, IllegalTransition};
pub use feud::{
    FeudEngine, FeudOutcome, FeudRound, FinalRevealScoring, MAX_STRIKES, ROUND_ADVANCE_DELAY,
    RoundEnd, RoundEndReason, Team, TeamScores,
};
pub use hangman::{GuessOutcome, HangmanEngine, HangmanRound, HangmanStatus, KEYBOARD, MAX_MISTAKES};
pub use jeopardy::{ActiveCell, JeopardyEngine, JeopardyOutcome};
pub use matching::{loosely_matches, normalize};
pub use quiz::{QuizRunner, SelectionOutcome, Verdict};
pub use tictactoe::TicTacToeEngine;
