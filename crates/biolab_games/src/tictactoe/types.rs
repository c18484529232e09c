//! Core domain types for trivia tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, "Jugador 1").
    X,
    /// Player O ("Jugador 2").
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Mark drawn on the board.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square claimed by a player.
    Occupied(Player),
}

/// 3x3 board, squares in row-major order (0-8).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Claims an empty square. Returns false, leaving the board as it
    /// was, when the square is taken or out of range.
    pub fn claim(&mut self, index: usize, player: Player) -> bool {
        if !self.is_empty(index) {
            return false;
        }
        self.squares[index] = Square::Occupied(player);
        true
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board, numbering free squares 1-9.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.squares[index] {
                    Square::Empty => result.push_str(&(index + 1).to_string()),
                    Square::Occupied(player) => result.push(player.symbol()),
                }
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Player),
    /// Board filled with no line.
    Draw,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_never_overwrites() {
        let mut board = Board::new();
        assert!(board.claim(4, Player::X));
        assert!(!board.claim(4, Player::O));
        assert_eq!(board.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn claim_out_of_range_is_refused() {
        let mut board = Board::new();
        assert!(!board.claim(9, Player::X));
    }

    #[test]
    fn display_numbers_free_squares() {
        let mut board = Board::new();
        board.claim(0, Player::X);
        board.claim(8, Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
