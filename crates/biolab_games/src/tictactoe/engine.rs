//! Trivia-gated tic-tac-toe.
//!
//! A square is only claimed after the current player answers a trivia
//! question. Selecting a square opens a [`PendingMove`]; the trivia pair
//! arrives later from the content provider and is attached to it. A wrong
//! answer forfeits the turn.

use super::rules::{check_winner, is_full};
use super::types::{Board, GameStatus, Player};
use crate::content::TriviaPair;
use crate::error::IllegalTransition;
use crate::matching::loosely_matches;
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// A square waiting on its trivia challenge.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PendingMove {
    cell: usize,
    /// `None` while the trivia fetch is in flight.
    trivia: Option<TriviaPair>,
}

/// Result of selecting a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// A pending move now awaits its trivia question.
    Opened(usize),
    /// Nothing changed.
    Ignored(IllegalTransition),
}

/// Result of answering the trivia challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// Correct answer: the mark was placed.
    Placed {
        /// Square that was claimed.
        cell: usize,
        /// Player who claimed it.
        player: Player,
        /// Status after the move.
        status: GameStatus,
    },
    /// Wrong answer: the turn passed to the opponent.
    Forfeited {
        /// Square that stays empty.
        cell: usize,
        /// Player who lost the turn.
        player: Player,
        /// The answer that would have been accepted.
        correct_answer: String,
    },
    /// Nothing changed.
    Ignored(IllegalTransition),
}

/// Tic-tac-toe engine with trivia-gated moves.
#[derive(Debug, Clone, Getters)]
pub struct TicTacToeEngine {
    board: Board,
    current_player: Player,
    status: GameStatus,
    pending: Option<PendingMove>,
}

impl TicTacToeEngine {
    /// Creates a new game with X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            pending: None,
        }
    }

    /// Winner, if a line has been completed.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// Opens a pending move on an empty square.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn select_cell(&mut self, cell: usize) -> SelectOutcome {
        let rejection = if self.status != GameStatus::InProgress {
            Some(IllegalTransition::RoundOver)
        } else if self.pending.is_some() {
            Some(IllegalTransition::MovePending)
        } else if self.board.get(cell).is_none() {
            Some(IllegalTransition::OutOfBounds(cell))
        } else if !self.board.is_empty(cell) {
            Some(IllegalTransition::CellOccupied(cell))
        } else {
            None
        };

        if let Some(reason) = rejection {
            debug!(%reason, "Cell selection ignored");
            return SelectOutcome::Ignored(reason);
        }

        self.pending = Some(PendingMove { cell, trivia: None });
        debug!(cell, "Pending move opened");
        SelectOutcome::Opened(cell)
    }

    /// Binds the fetched trivia pair to the pending move.
    #[instrument(skip(self, trivia))]
    pub fn attach_trivia(&mut self, trivia: TriviaPair) -> Result<(), IllegalTransition> {
        match self.pending.as_mut() {
            Some(pending) if pending.trivia.is_none() => {
                pending.trivia = Some(trivia);
                Ok(())
            }
            Some(_) => Err(IllegalTransition::MovePending),
            None => Err(IllegalTransition::NoPendingMove),
        }
    }

    /// Drops a pending move whose trivia never arrived. The turn is kept.
    #[instrument(skip(self))]
    pub fn abandon_pending(&mut self) -> Option<PendingMove> {
        let dropped = self.pending.take();
        if dropped.is_some() {
            debug!("Pending move abandoned");
        }
        dropped
    }

    /// Checks the player's answer and resolves the pending move.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn submit_trivia_answer(&mut self, text: &str) -> AnswerOutcome {
        let Some(pending) = self.pending.as_ref() else {
            debug!("Answer ignored: no pending move");
            return AnswerOutcome::Ignored(IllegalTransition::NoPendingMove);
        };
        let Some(trivia) = pending.trivia.as_ref() else {
            debug!("Answer ignored: trivia not ready");
            return AnswerOutcome::Ignored(IllegalTransition::TriviaNotReady);
        };

        let cell = pending.cell;
        let player = self.current_player;

        if !loosely_matches(text, trivia.answer()) {
            let correct_answer = trivia.answer().clone();
            self.pending = None;
            self.current_player = player.opponent();
            info!(cell, ?player, "Wrong answer, turn forfeited");
            return AnswerOutcome::Forfeited {
                cell,
                player,
                correct_answer,
            };
        }

        self.pending = None;
        self.board.claim(cell, player);

        if let Some(winner) = check_winner(&self.board) {
            self.status = GameStatus::Won(winner);
            info!(?winner, "Line completed");
        } else if is_full(&self.board) {
            self.status = GameStatus::Draw;
            info!("Board full, draw");
        } else {
            self.current_player = player.opponent();
        }

        AnswerOutcome::Placed {
            cell,
            player,
            status: self.status,
        }
    }

    /// Clears the board; X moves first again.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("Tic-tac-toe reset");
    }
}

impl Default for TicTacToeEngine {
    fn default() -> Self {
        Self::new()
    }
}
