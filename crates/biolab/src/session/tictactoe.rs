use crate::provider::ContentProvider;
use biolab_games::tictactoe::{AnswerOutcome, SelectOutcome};
use biolab_games::{ContentKind, ContentUnavailable, TicTacToeEngine, TriviaPair};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game whose moves wait on fetched trivia.
pub struct TicTacToeSession {
    provider: Arc<dyn ContentProvider>,
    engine: TicTacToeEngine,
}

impl TicTacToeSession {
    /// Starts a fresh game.
    #[instrument(skip(provider))]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            engine: TicTacToeEngine::new(),
        }
    }

    /// Read-only view of the game.
    pub fn engine(&self) -> &TicTacToeEngine {
        &self.engine
    }

    /// The trivia question the current player must answer, once fetched.
    pub fn challenge(&self) -> Option<&TriviaPair> {
        self.engine
            .pending()
            .as_ref()
            .and_then(|pending| pending.trivia().as_ref())
    }

    /// Selects a square and fetches its trivia question.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no trivia pair could be fetched.
    /// The pending move is dropped and the same player keeps the turn.
    #[instrument(skip(self))]
    pub async fn select_cell(&mut self, cell: usize) -> Result<SelectOutcome, ContentUnavailable> {
        let outcome = self.engine.select_cell(cell);
        if !matches!(outcome, SelectOutcome::Opened(_)) {
            return Ok(outcome);
        }

        match self.provider.fetch_trivia_pair().await {
            Some(trivia) => {
                debug!(question = %trivia.question(), "Trivia attached");
                if let Err(reason) = self.engine.attach_trivia(trivia) {
                    warn!(%reason, "Trivia arrived for a move that is no longer open");
                }
                Ok(outcome)
            }
            None => {
                self.engine.abandon_pending();
                Err(ContentUnavailable::new(ContentKind::TriviaPair))
            }
        }
    }

    /// Answers the open trivia question.
    #[instrument(skip(self))]
    pub fn submit_answer(&mut self, text: &str) -> AnswerOutcome {
        self.engine.submit_trivia_answer(text)
    }

    /// Clears the board for a new game.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.engine.reset();
        info!("New tic-tac-toe game");
    }
}
