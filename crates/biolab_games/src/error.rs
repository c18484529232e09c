//! Error and rejection types shared by the engines.

use derive_more::{Display, Error};
use tracing::{instrument, warn};

/// Which kind of content a round needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ContentKind {
    /// Term/definition list.
    #[display("definitions")]
    Definitions,
    /// Quiz question list.
    #[display("quiz")]
    Quiz,
    /// Jeopardy board.
    #[display("jeopardy board")]
    JeopardyBoard,
    /// Feud question.
    #[display("feud question")]
    FeudQuestion,
    /// Single trivia pair.
    #[display("trivia pair")]
    TriviaPair,
}

/// The provider returned nothing usable, so the round cannot start.
#[derive(Debug, Clone, Display, Error)]
#[display("Content unavailable: no {} at {}:{}", kind, file, line)]
pub struct ContentUnavailable {
    /// Content that was missing.
    pub kind: ContentKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ContentUnavailable {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ContentKind) -> Self {
        let loc = std::panic::Location::caller();
        warn!(%kind, "Content unavailable");
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// An input that the current state does not accept.
///
/// Engines never fail on these; they hand the reason back inside an
/// `Ignored` outcome and leave their state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum IllegalTransition {
    /// No round has been started.
    #[display("No round in play")]
    NoRound,
    /// The round or game has already finished.
    #[display("Round is already over")]
    RoundOver,
    /// Cell index outside the board.
    #[display("Cell {} is out of bounds", _0)]
    OutOfBounds(usize),
    /// The tic-tac-toe square is taken.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
    /// A move is already waiting on its trivia challenge.
    #[display("A move is already pending")]
    MovePending,
    /// There is no pending move to resolve.
    #[display("No move is pending")]
    NoPendingMove,
    /// The pending move's trivia has not arrived yet.
    #[display("Trivia question has not arrived yet")]
    TriviaNotReady,
    /// The letter was guessed earlier in the round.
    #[display("Letter {} was already guessed", _0)]
    AlreadyGuessed(char),
    /// No clue at these board coordinates.
    #[display("No cell at ({}, {})", _0, _1)]
    NoSuchCell(usize, usize),
    /// The board cell was answered earlier.
    #[display("Cell ({}, {}) was already answered", _0, _1)]
    CellAnswered(usize, usize),
    /// Another board cell is open.
    #[display("Another cell is open")]
    CellActive,
    /// No board cell is open.
    #[display("No cell is open")]
    NoActiveCell,
    /// The open cell's answer is already showing.
    #[display("Answer is already revealed")]
    AlreadyRevealed,
    /// The open cell's answer has not been shown yet.
    #[display("Answer has not been revealed")]
    NotRevealed,
    /// The quiz question was already answered.
    #[display("Question already answered")]
    AlreadyAnswered,
    /// Option index outside the question's options.
    #[display("Option {} does not exist", _0)]
    NoSuchOption(usize),
}
