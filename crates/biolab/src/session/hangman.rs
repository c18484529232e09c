use crate::provider::ContentProvider;
use biolab_games::{ContentUnavailable, GuessOutcome, HangmanEngine, HangmanRound, TopicId};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Hangman game drawing its words from one topic's definitions.
///
/// Every round asks the provider for a fresh batch of definitions.
pub struct HangmanSession {
    provider: Arc<dyn ContentProvider>,
    topic: TopicId,
    engine: HangmanEngine,
    rng: StdRng,
}

impl HangmanSession {
    /// Creates a session for `topic`.
    #[instrument(skip(provider))]
    pub fn new(provider: Arc<dyn ContentProvider>, topic: TopicId) -> Self {
        Self::with_rng(provider, topic, StdRng::from_entropy())
    }

    /// Creates a session with a seeded word picker.
    #[instrument(skip(provider))]
    pub fn with_seed(provider: Arc<dyn ContentProvider>, topic: TopicId, seed: u64) -> Self {
        Self::with_rng(provider, topic, StdRng::seed_from_u64(seed))
    }

    fn with_rng(provider: Arc<dyn ContentProvider>, topic: TopicId, rng: StdRng) -> Self {
        Self {
            provider,
            topic,
            engine: HangmanEngine::new(),
            rng,
        }
    }

    /// Read-only view of the game.
    pub fn engine(&self) -> &HangmanEngine {
        &self.engine
    }

    /// Topic the words come from.
    pub fn topic(&self) -> TopicId {
        self.topic
    }

    /// Fetches a batch of definitions and starts a round with a randomly
    /// chosen term.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when the batch is empty. The previous
    /// round, if any, stays on the board.
    #[instrument(skip(self), fields(topic = %self.topic))]
    pub async fn new_round(&mut self) -> Result<&HangmanRound, ContentUnavailable> {
        let words = self.provider.fetch_definitions(self.topic).await;
        debug!(count = words.len(), "Word list fetched");
        self.engine.start_round(&words, &mut self.rng)
    }

    /// Guesses one letter.
    #[instrument(skip(self))]
    pub fn guess_letter(&mut self, letter: char) -> GuessOutcome {
        self.engine.guess_letter(letter)
    }
}
