//! Win and draw detection.

use super::types::{Board, Player, Square};
use tracing::instrument;

/// Winning combinations.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8], // Rows
    [0, 3, 6], [1, 4, 7], [2, 5, 8], // Columns
    [0, 4, 8], [2, 4, 6],             // Diagonals
];

/// Returns the player holding three in a row, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [a, b, c] in LINES {
        if let Some(Square::Occupied(player)) = board.get(a)
            && board.get(b) == Some(Square::Occupied(player))
            && board.get(c) == Some(Square::Occupied(player))
        {
            return Some(player);
        }
    }
    None
}

/// Checks if every square is taken.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|&s| s != Square::Empty)
}
