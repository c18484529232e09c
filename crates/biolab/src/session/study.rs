use crate::provider::ContentProvider;
use biolab_games::{
    ActivityBrowser, ContentUnavailable, Definition, QuizRunner, SelectionOutcome, TopicId,
};
use std::sync::Arc;
use tracing::{info, instrument};

/// Flashcards for one topic.
pub struct ActivitySession {
    provider: Arc<dyn ContentProvider>,
    topic: TopicId,
    browser: ActivityBrowser,
}

impl ActivitySession {
    /// Fetches the topic's definitions and opens the deck.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no definitions came back.
    #[instrument(skip(provider))]
    pub async fn load(
        provider: Arc<dyn ContentProvider>,
        topic: TopicId,
    ) -> Result<Self, ContentUnavailable> {
        let browser = ActivityBrowser::new(provider.fetch_definitions(topic).await)?;
        info!(cards = browser.cards().len(), "Flashcards ready");
        Ok(Self {
            provider,
            topic,
            browser,
        })
    }

    /// Topic being studied.
    pub fn topic(&self) -> TopicId {
        self.topic
    }

    /// Read-only view of the deck.
    pub fn browser(&self) -> &ActivityBrowser {
        &self.browser
    }

    /// Next card.
    pub fn next(&mut self) -> &Definition {
        self.browser.next()
    }

    /// Previous card.
    pub fn prev(&mut self) -> &Definition {
        self.browser.prev()
    }

    /// Turns the current card over.
    pub fn flip(&mut self) -> bool {
        self.browser.flip()
    }

    /// Fetches a new set of cards. The old deck is kept if none arrive.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no definitions came back.
    #[instrument(skip(self), fields(topic = %self.topic))]
    pub async fn reload(&mut self) -> Result<(), ContentUnavailable> {
        self.browser = ActivityBrowser::new(self.provider.fetch_definitions(self.topic).await)?;
        Ok(())
    }
}

/// Multiple-choice quiz for one topic.
pub struct QuizSession {
    provider: Arc<dyn ContentProvider>,
    topic: TopicId,
    runner: QuizRunner,
}

impl QuizSession {
    /// Fetches the topic's questions and starts on the first one.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no playable questions came back.
    #[instrument(skip(provider))]
    pub async fn load(
        provider: Arc<dyn ContentProvider>,
        topic: TopicId,
    ) -> Result<Self, ContentUnavailable> {
        let runner = QuizRunner::new(provider.fetch_quiz(topic).await)?;
        info!(questions = runner.questions().len(), "Quiz ready");
        Ok(Self {
            provider,
            topic,
            runner,
        })
    }

    /// Topic being quizzed.
    pub fn topic(&self) -> TopicId {
        self.topic
    }

    /// Read-only view of the run.
    pub fn runner(&self) -> &QuizRunner {
        &self.runner
    }

    /// Records an option for the current question.
    pub fn select(&mut self, option: usize) -> SelectionOutcome {
        self.runner.select(option)
    }

    /// Moves to the next question or completes the run.
    pub fn advance(&mut self) -> bool {
        self.runner.advance()
    }

    /// Starts over with freshly fetched questions.
    ///
    /// # Errors
    ///
    /// Returns [`ContentUnavailable`] when no playable questions came back;
    /// the finished run is kept.
    #[instrument(skip(self), fields(topic = %self.topic))]
    pub async fn restart(&mut self) -> Result<(), ContentUnavailable> {
        self.runner = QuizRunner::new(self.provider.fetch_quiz(self.topic).await)?;
        Ok(())
    }
}
