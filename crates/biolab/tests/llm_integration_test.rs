//! Live content generation against real LLM APIs.
//!
//! Run with `--features api` and the matching API key in the environment.

use biolab::{ContentProvider, LlmClient, LlmConfig, LlmContentProvider, LlmProvider};
use biolab_games::TopicId;
use tracing::instrument;

fn live_client(provider: LlmProvider, model: &str) -> LlmClient {
    dotenvy::dotenv().ok();
    let var = provider.api_key_var();
    let api_key = std::env::var(var).unwrap_or_else(|_| panic!("{} not set", var));
    LlmClient::new(LlmConfig::new(provider, api_key, model.to_string(), 4096))
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_gemini_connectivity() {
    let client = live_client(LlmProvider::Gemini, "gemini-2.5-flash");

    let response = client
        .generate("You are a helpful assistant.", "Say 'Hello, world!' and nothing else.")
        .await
        .expect("Failed to generate");

    assert!(!response.is_empty(), "Response should not be empty");
    eprintln!("Response: {}", response);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_gemini_definitions() {
    let provider = LlmContentProvider::new(live_client(LlmProvider::Gemini, "gemini-2.5-flash"));

    let definitions = provider.fetch_definitions(TopicId::Menstrual).await;

    assert!(!definitions.is_empty(), "Expected generated definitions");
    eprintln!("First: {:?}", definitions[0]);
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_openai_feud_question() {
    let provider = LlmContentProvider::new(live_client(LlmProvider::OpenAI, "gpt-4o-mini"));

    let question = provider
        .fetch_feud_question()
        .await
        .expect("Expected a feud question");

    assert!(!question.answers().is_empty(), "Question should have answers");
    eprintln!("Question: {}", question.question());
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
#[instrument]
async fn test_anthropic_trivia_pair() {
    let provider = LlmContentProvider::new(live_client(
        LlmProvider::Anthropic,
        "claude-3-5-haiku-20241022",
    ));

    let trivia = provider
        .fetch_trivia_pair()
        .await
        .expect("Expected a trivia pair");

    assert!(!trivia.answer().is_empty(), "Answer should not be empty");
    eprintln!("Trivia: {} -> {}", trivia.question(), trivia.answer());
}
