//! Content providers.
//!
//! Every game round starts by asking a [`ContentProvider`] for material.
//! Providers are best-effort: failures are logged and come back as an empty
//! list or `None`, which callers treat as "cannot start".

mod json;
mod llm;
mod prompts;
mod scripted;

pub use json::extract_json;
pub use llm::LlmContentProvider;
pub use scripted::ScriptedContentProvider;

use async_trait::async_trait;
use biolab_games::{Definition, FeudQuestion, JeopardyCategory, QuizQuestion, TopicId, TriviaPair};

/// Source of generated study and game content.
#[async_trait]
pub trait ContentProvider: Send + Sync {
    /// About ten term/definition pairs for a topic.
    async fn fetch_definitions(&self, topic: TopicId) -> Vec<Definition>;

    /// About twenty four-option questions for a topic.
    async fn fetch_quiz(&self, topic: TopicId) -> Vec<QuizQuestion>;

    /// Five categories of three clues each.
    async fn fetch_jeopardy_board(&self) -> Vec<JeopardyCategory>;

    /// One survey question with about five answers.
    async fn fetch_feud_question(&self) -> Option<FeudQuestion>;

    /// One trivia question with a short answer.
    async fn fetch_trivia_pair(&self) -> Option<TriviaPair>;
}
