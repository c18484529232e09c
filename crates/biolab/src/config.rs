//! Application configuration.

use crate::llm_client::{LlmConfig, LlmProvider};
use biolab_games::{FinalRevealScoring, ROUND_ADVANCE_DELAY, TopicId};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings read from `biolab.toml`.
///
/// Every field has a default, so an empty file (or no file) is valid.
#[derive(Debug, Clone, PartialEq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_", into)]
pub struct AppConfig {
    /// LLM provider (gemini, openai or anthropic).
    #[serde(default = "default_provider")]
    llm_provider: LlmProvider,

    /// LLM model name (e.g. "gemini-2.5-flash", "gpt-4o-mini").
    #[serde(default = "default_model")]
    llm_model: String,

    /// Maximum tokens for LLM responses.
    #[serde(default = "default_max_tokens")]
    llm_max_tokens: u32,

    /// Alternate endpoint for the provider's API.
    #[serde(default)]
    #[setters(strip_option)]
    llm_base_url: Option<String>,

    /// Pause between a finished feud round and the next one.
    #[serde(default = "default_round_advance_ms")]
    round_advance_ms: u64,

    /// Topic whose definitions feed the hangman word list.
    #[serde(default = "default_hangman_topic")]
    hangman_topic: TopicId,

    /// How the last correct answer of a feud round is scored.
    #[serde(default)]
    final_reveal_scoring: FinalRevealScoring,
}

#[instrument]
fn default_provider() -> LlmProvider {
    LlmProvider::Gemini
}

#[instrument]
fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

#[instrument]
fn default_max_tokens() -> u32 {
    8192
}

#[instrument]
fn default_round_advance_ms() -> u64 {
    ROUND_ADVANCE_DELAY.as_millis() as u64
}

#[instrument]
fn default_hangman_topic() -> TopicId {
    TopicId::HumanRepro
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            llm_provider: default_provider(),
            llm_model: default_model(),
            llm_max_tokens: default_max_tokens(),
            llm_base_url: None,
            round_advance_ms: default_round_advance_ms(),
            hangman_topic: default_hangman_topic(),
            final_reveal_scoring: FinalRevealScoring::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(provider = ?config.llm_provider, model = %config.llm_model, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` when given, otherwise `biolab.toml` in the working
    /// directory if present, otherwise the defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let local = Path::new("biolab.toml");
                if local.exists() {
                    Self::from_file(local)
                } else {
                    debug!("No config file, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Feud round advance delay as a duration.
    pub fn round_advance(&self) -> Duration {
        Duration::from_millis(self.round_advance_ms)
    }

    /// Creates LLM configuration from this config.
    ///
    /// Reads the provider's key from GEMINI_API_KEY, OPENAI_API_KEY or
    /// ANTHROPIC_API_KEY.
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        debug!("Creating LLM config");
        let var = self.llm_provider.api_key_var();
        let api_key = std::env::var(var)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} environment variable not set", var)))?;

        let config = LlmConfig::new(
            self.llm_provider,
            api_key,
            self.llm_model.clone(),
            self.llm_max_tokens,
        );
        Ok(match &self.llm_base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        })
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
