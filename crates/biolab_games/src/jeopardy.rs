//! Jeopardy-style category board.
//!
//! The board is fixed once loaded. Opening a cell shows its question,
//! revealing shows the answer, and the player then self-grades. Correct
//! adds the cell's points, incorrect subtracts them; the score has no
//! floor. A resolved cell stays locked.

use crate::content::{JeopardyCategory, JeopardyClue};
use crate::error::{ContentKind, ContentUnavailable, IllegalTransition};
use derive_getters::Getters;
use tracing::{debug, info, instrument};

/// Coordinates of the cell being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters)]
pub struct ActiveCell {
    category: usize,
    question: usize,
    revealed: bool,
}

/// Result of a board action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JeopardyOutcome {
    /// A cell is now open with its question showing.
    Opened {
        /// Category column.
        category: usize,
        /// Question row.
        question: usize,
    },
    /// The open cell's answer is showing.
    Revealed,
    /// The open cell was graded and locked.
    Resolved {
        /// Signed change applied to the score.
        delta: i64,
        /// Score after the change.
        score: i64,
    },
    /// Nothing changed.
    Ignored(IllegalTransition),
}

/// Jeopardy board state.
#[derive(Debug, Clone, Getters)]
pub struct JeopardyEngine {
    categories: Vec<JeopardyCategory>,
    #[getter(skip)]
    answered: Vec<Vec<bool>>,
    score: i64,
    active: Option<ActiveCell>,
}

impl JeopardyEngine {
    /// Loads a generated board.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when the board has no categories.
    #[instrument(skip(categories), fields(categories = categories.len()))]
    pub fn load(categories: Vec<JeopardyCategory>) -> Result<Self, ContentUnavailable> {
        if categories.is_empty() {
            return Err(ContentUnavailable::new(ContentKind::JeopardyBoard));
        }
        let answered = categories
            .iter()
            .map(|c| vec![false; c.questions().len()])
            .collect();
        info!("Jeopardy board loaded");
        Ok(Self {
            categories,
            answered,
            score: 0,
            active: None,
        })
    }

    /// Clue at the given coordinates.
    pub fn clue(&self, category: usize, question: usize) -> Option<&JeopardyClue> {
        self.categories.get(category)?.questions().get(question)
    }

    /// Clue of the open cell.
    pub fn active_clue(&self) -> Option<&JeopardyClue> {
        let active = self.active?;
        self.clue(active.category, active.question)
    }

    /// Whether the cell has been resolved. Missing cells report false.
    pub fn is_answered(&self, category: usize, question: usize) -> bool {
        self.answered
            .get(category)
            .and_then(|row| row.get(question))
            .copied()
            .unwrap_or(false)
    }

    /// True once every cell has been resolved.
    pub fn is_complete(&self) -> bool {
        self.answered.iter().flatten().all(|&done| done)
    }

    /// Largest number of questions in any category.
    pub fn rows(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.questions().len())
            .max()
            .unwrap_or(0)
    }

    /// Opens a cell and shows its question.
    #[instrument(skip(self))]
    pub fn open_cell(&mut self, category: usize, question: usize) -> JeopardyOutcome {
        let rejection = if self.active.is_some() {
            Some(IllegalTransition::CellActive)
        } else if self.clue(category, question).is_none() {
            Some(IllegalTransition::NoSuchCell(category, question))
        } else if self.is_answered(category, question) {
            Some(IllegalTransition::CellAnswered(category, question))
        } else {
            None
        };
        if let Some(reason) = rejection {
            debug!(%reason, "Open ignored");
            return JeopardyOutcome::Ignored(reason);
        }

        self.active = Some(ActiveCell {
            category,
            question,
            revealed: false,
        });
        JeopardyOutcome::Opened { category, question }
    }

    /// Shows the open cell's answer.
    #[instrument(skip(self))]
    pub fn reveal(&mut self) -> JeopardyOutcome {
        match self.active.as_mut() {
            None => JeopardyOutcome::Ignored(IllegalTransition::NoActiveCell),
            Some(active) if active.revealed => {
                JeopardyOutcome::Ignored(IllegalTransition::AlreadyRevealed)
            }
            Some(active) => {
                active.revealed = true;
                JeopardyOutcome::Revealed
            }
        }
    }

    /// Grades the open cell and locks it.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, correct: bool) -> JeopardyOutcome {
        let active = match self.active {
            None => return JeopardyOutcome::Ignored(IllegalTransition::NoActiveCell),
            Some(active) if !active.revealed => {
                return JeopardyOutcome::Ignored(IllegalTransition::NotRevealed);
            }
            Some(active) => active,
        };
        let points = self
            .clue(active.category, active.question)
            .map(|clue| *clue.points())
            .unwrap_or(0);
        // Clue values come from generated JSON, so stay within i64.
        let delta = if correct { points } else { points.saturating_neg() };

        self.score = self.score.saturating_add(delta);
        self.answered[active.category][active.question] = true;
        self.active = None;
        info!(delta, score = self.score, "Cell resolved");
        JeopardyOutcome::Resolved {
            delta,
            score: self.score,
        }
    }
}
