use crate::provider::ContentProvider;
use biolab_games::{
    ContentKind, ContentUnavailable, FeudEngine, FeudOutcome, FeudRound, FinalRevealScoring,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Two-team feud game that moves on to a new question after each round.
///
/// When a guess ends the round, the next round becomes due after the
/// configured delay. The engine keeps the team scores across rounds.
pub struct FeudSession {
    provider: Arc<dyn ContentProvider>,
    engine: FeudEngine,
    advance_delay: Duration,
    next_round_at: Option<Instant>,
}

impl FeudSession {
    /// Creates a session; no round is in play until [`start_round`](Self::start_round).
    #[instrument(skip(provider))]
    pub fn new(
        provider: Arc<dyn ContentProvider>,
        scoring: FinalRevealScoring,
        advance_delay: Duration,
    ) -> Self {
        Self {
            provider,
            engine: FeudEngine::new(scoring),
            advance_delay,
            next_round_at: None,
        }
    }

    /// Read-only view of the game.
    pub fn engine(&self) -> &FeudEngine {
        &self.engine
    }

    /// When the next round is due, if the current one has ended.
    pub fn next_round_at(&self) -> Option<Instant> {
        self.next_round_at
    }

    /// Fetches a question and starts a round with it.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no usable question arrived. The
    /// finished round, if any, stays on the board.
    #[instrument(skip(self))]
    pub async fn start_round(&mut self) -> Result<&FeudRound, ContentUnavailable> {
        let question = self
            .provider
            .fetch_feud_question()
            .await
            .ok_or_else(|| ContentUnavailable::new(ContentKind::FeudQuestion))?;
        self.next_round_at = None;
        self.engine.start_round(question)
    }

    /// Checks a guess and schedules the next round when this one ends.
    #[instrument(skip(self))]
    pub fn guess(&mut self, text: &str) -> FeudOutcome {
        let outcome = self.engine.guess(text);
        if let Some(end) = outcome.round_end() {
            let due = Instant::now() + self.advance_delay;
            self.next_round_at = Some(due);
            info!(
                team = end.team().number(),
                awarded = end.awarded(),
                reason = ?end.reason(),
                "Feud round over"
            );
        }
        outcome
    }

    /// Waits until the next round is due, then starts it.
    ///
    /// Starts immediately when no advance is scheduled.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no usable question arrived.
    #[instrument(skip(self))]
    pub async fn await_next_round(&mut self) -> Result<&FeudRound, ContentUnavailable> {
        if let Some(due) = self.next_round_at {
            debug!("Waiting for next round");
            sleep_until(due).await;
        }
        self.start_round().await
    }

    /// Abandons the current round without scoring and starts another.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no usable question arrived.
    #[instrument(skip(self))]
    pub async fn skip_round(&mut self) -> Result<&FeudRound, ContentUnavailable> {
        info!("Round skipped");
        self.start_round().await
    }
}
