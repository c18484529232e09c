//! Player sessions.
//!
//! A session owns one engine plus the content provider that feeds it, and
//! runs the fetch-then-transition sequence for its mode. Every operation
//! takes `&mut self`, so a session never has two operations in flight.

mod feud;
mod hangman;
mod jeopardy;
mod study;
mod tictactoe;

pub use feud::FeudSession;
pub use hangman::HangmanSession;
pub use jeopardy::JeopardySession;
pub use study::{ActivitySession, QuizSession};
pub use tictactoe::TicTacToeSession;
