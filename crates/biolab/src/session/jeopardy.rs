use crate::provider::ContentProvider;
use biolab_games::{ContentUnavailable, IllegalTransition, JeopardyEngine, JeopardyOutcome};
use std::sync::Arc;
use tracing::{info, instrument};

/// Jeopardy board loaded from the provider.
pub struct JeopardySession {
    provider: Arc<dyn ContentProvider>,
    engine: Option<JeopardyEngine>,
}

impl JeopardySession {
    /// Creates a session with no board yet.
    #[instrument(skip(provider))]
    pub fn new(provider: Arc<dyn ContentProvider>) -> Self {
        Self {
            provider,
            engine: None,
        }
    }

    /// Read-only view of the board, once loaded.
    pub fn engine(&self) -> Option<&JeopardyEngine> {
        self.engine.as_ref()
    }

    /// Fetches a fresh board; the score starts over.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when the provider produced no
    /// categories. A board already in play is kept.
    #[instrument(skip(self))]
    pub async fn load_board(&mut self) -> Result<&JeopardyEngine, ContentUnavailable> {
        let categories = self.provider.fetch_jeopardy_board().await;
        let engine = JeopardyEngine::load(categories)?;
        info!(categories = engine.categories().len(), "Jeopardy board loaded");
        Ok(&*self.engine.insert(engine))
    }

    /// Opens the clue at (`category`, `question`).
    #[instrument(skip(self))]
    pub fn open_cell(&mut self, category: usize, question: usize) -> JeopardyOutcome {
        self.with_engine(|engine| engine.open_cell(category, question))
    }

    /// Shows the active clue's answer.
    #[instrument(skip(self))]
    pub fn reveal(&mut self) -> JeopardyOutcome {
        self.with_engine(JeopardyEngine::reveal)
    }

    /// Self-grades the active clue.
    #[instrument(skip(self))]
    pub fn resolve(&mut self, correct: bool) -> JeopardyOutcome {
        self.with_engine(|engine| engine.resolve(correct))
    }

    fn with_engine(&mut self, f: impl FnOnce(&mut JeopardyEngine) -> JeopardyOutcome) -> JeopardyOutcome {
        match self.engine.as_mut() {
            Some(engine) => f(engine),
            None => JeopardyOutcome::Ignored(IllegalTransition::NoRound),
        }
    }
}
