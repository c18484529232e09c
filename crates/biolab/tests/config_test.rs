//! Tests for loading `biolab.toml`.

use biolab::{AppConfig, LlmProvider};
use biolab_games::{FinalRevealScoring, TopicId};
use std::io::Write;
use std::time::Duration;

fn write_config(text: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_config_loads() {
    let file = write_config(
        r#"
llm_provider = "anthropic"
llm_model = "claude-3-5-haiku-20241022"
llm_max_tokens = 2048
round_advance_ms = 500
hangman_topic = "fetal_dev"
final_reveal_scoring = "exact"
"#,
    );

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.llm_provider(), LlmProvider::Anthropic);
    assert_eq!(config.llm_model(), "claude-3-5-haiku-20241022");
    assert_eq!(*config.llm_max_tokens(), 2048);
    assert_eq!(config.round_advance(), Duration::from_millis(500));
    assert_eq!(*config.hangman_topic(), TopicId::FetalDev);
    assert_eq!(*config.final_reveal_scoring(), FinalRevealScoring::Exact);
}

#[test]
fn test_missing_keys_take_defaults() {
    let file = write_config("llm_provider = \"openai\"\n");

    let config = AppConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.llm_provider(), LlmProvider::OpenAI);
    assert_eq!(*config.round_advance_ms(), 3000);
    assert_eq!(*config.hangman_topic(), TopicId::HumanRepro);
    assert_eq!(
        *config.final_reveal_scoring(),
        FinalRevealScoring::DoubleCountFinal
    );
}

#[test]
fn test_unknown_provider_is_rejected() {
    let file = write_config("llm_provider = \"cohere\"\n");

    let err = AppConfig::from_file(file.path()).unwrap_err();

    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = AppConfig::from_file(dir.path().join("absent.toml")).unwrap_err();

    assert!(err.message.contains("Failed to read config file"));
    assert!(err.file.ends_with("config.rs"));
}

#[test]
fn test_explicit_path_wins_over_defaults() {
    let file = write_config("llm_model = \"gemini-2.5-pro\"\n");

    let config = AppConfig::load(Some(file.path())).unwrap();

    assert_eq!(config.llm_model(), "gemini-2.5-pro");
}
