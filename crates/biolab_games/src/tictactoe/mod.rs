mod engine;
mod rules;
mod types;

pub use engine::{AnswerOutcome, PendingMove, SelectOutcome, TicTacToeEngine};
pub use rules::{LINES, check_winner, is_full};
pub use types::{Board, GameStatus, Player, Square};
