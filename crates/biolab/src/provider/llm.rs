//! Content provider backed by an LLM.

use super::json::extract_json;
use super::{ContentProvider, prompts};
use crate::llm_client::{GenerationOptions, LlmClient};
use async_trait::async_trait;
use biolab_games::{
    ContentKind, Definition, FeudQuestion, JeopardyCategory, QuizQuestion, TopicId, TriviaPair,
};
use serde::de::DeserializeOwned;
use tracing::{error, info, instrument, warn};

/// Generates content by prompting an LLM for JSON.
#[derive(Debug, Clone)]
pub struct LlmContentProvider {
    client: LlmClient,
}

impl LlmContentProvider {
    /// Wraps a configured client.
    #[instrument(skip(client))]
    pub fn new(client: LlmClient) -> Self {
        Self { client }
    }

    /// Prompts the model and parses its reply, logging and swallowing any
    /// failure.
    #[instrument(skip(self, prompt, options))]
    async fn request<T: DeserializeOwned>(
        &self,
        kind: ContentKind,
        prompt: String,
        options: GenerationOptions,
    ) -> Option<T> {
        let reply = match self
            .client
            .generate_with(prompts::SYSTEM_PROMPT, &prompt, options.json(true))
            .await
        {
            Ok(reply) => reply,
            Err(e) => {
                error!(%kind, error = %e, "Content generation failed");
                return None;
            }
        };

        match serde_json::from_str(extract_json(&reply)) {
            Ok(content) => {
                info!(%kind, "Content generated");
                Some(content)
            }
            Err(e) => {
                warn!(%kind, error = %e, reply = %reply, "Generated content did not parse");
                None
            }
        }
    }
}

#[async_trait]
impl ContentProvider for LlmContentProvider {
    #[instrument(skip(self))]
    async fn fetch_definitions(&self, topic: TopicId) -> Vec<Definition> {
        let options = GenerationOptions::default().temperature(0.3);
        self.request(ContentKind::Definitions, prompts::definitions(topic), options)
            .await
            .unwrap_or_default()
    }

    #[instrument(skip(self))]
    async fn fetch_quiz(&self, topic: TopicId) -> Vec<QuizQuestion> {
        let options = GenerationOptions::default().temperature(0.4);
        let questions: Vec<QuizQuestion> = self
            .request(ContentKind::Quiz, prompts::quiz(topic), options)
            .await
            .unwrap_or_default();
        // A question whose answer index points past its options is unplayable.
        questions
            .into_iter()
            .filter(|q| *q.correct_answer() < q.options().len())
            .collect()
    }

    #[instrument(skip(self))]
    async fn fetch_jeopardy_board(&self) -> Vec<JeopardyCategory> {
        self.request(
            ContentKind::JeopardyBoard,
            prompts::jeopardy_board(),
            GenerationOptions::default(),
        )
        .await
        .unwrap_or_default()
    }

    #[instrument(skip(self))]
    async fn fetch_feud_question(&self) -> Option<FeudQuestion> {
        let options = GenerationOptions::default().temperature(0.7);
        self.request(ContentKind::FeudQuestion, prompts::feud_question(), options)
            .await
    }

    #[instrument(skip(self))]
    async fn fetch_trivia_pair(&self) -> Option<TriviaPair> {
        self.request(
            ContentKind::TriviaPair,
            prompts::trivia_pair(),
            GenerationOptions::default(),
        )
        .await
    }
}
