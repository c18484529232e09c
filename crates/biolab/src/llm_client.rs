//! LLM API client abstraction for Gemini, OpenAI and Anthropic.

use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, error, info, instrument};

/// LLM provider selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    /// Google Gemini.
    Gemini,
    /// OpenAI (GPT models).
    OpenAI,
    /// Anthropic (Claude models).
    Anthropic,
}

impl LlmProvider {
    /// Environment variable holding the API key.
    pub fn api_key_var(self) -> &'static str {
        match self {
            LlmProvider::Gemini => "GEMINI_API_KEY",
            LlmProvider::OpenAI => "OPENAI_API_KEY",
            LlmProvider::Anthropic => "ANTHROPIC_API_KEY",
        }
    }

    fn default_base_url(self) -> &'static str {
        match self {
            LlmProvider::Gemini => "https://generativelanguage.googleapis.com",
            LlmProvider::OpenAI => "https://api.openai.com",
            LlmProvider::Anthropic => "https://api.anthropic.com",
        }
    }
}

/// Configuration for LLM client.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    provider: LlmProvider,
    api_key: String,
    model: String,
    max_tokens: u32,
    base_url: Option<String>,
}

impl LlmConfig {
    /// Creates a new LLM configuration.
    #[instrument(skip(api_key), fields(provider = ?provider, model = %model))]
    pub fn new(provider: LlmProvider, api_key: String, model: String, max_tokens: u32) -> Self {
        debug!("Creating LLM config");
        Self {
            provider,
            api_key,
            model,
            max_tokens,
            base_url: None,
        }
    }

    /// Points the client at a compatible endpoint instead of the vendor's.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Gets the provider.
    pub fn provider(&self) -> LlmProvider {
        self.provider
    }

    /// Gets the model name.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Gets the max tokens.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Gets the endpoint base URL.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or_else(|| self.provider.default_base_url())
            .trim_end_matches('/')
    }
}

/// Per-request sampling options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Setters)]
#[setters(strip_option)]
pub struct GenerationOptions {
    /// Sampling temperature; provider default when unset.
    pub temperature: Option<f32>,
    /// Ask the provider for a JSON-only response.
    pub json: bool,
}

/// LLM client that abstracts over multiple providers.
#[derive(Debug, Clone)]
pub struct LlmClient {
    config: LlmConfig,
    http: reqwest::Client,
}

impl LlmClient {
    /// Creates a new LLM client.
    #[instrument(skip(config), fields(provider = ?config.provider()))]
    pub fn new(config: LlmConfig) -> Self {
        info!("Creating LLM client");
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Gets the configuration.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Generates a completion from a system prompt and user message.
    #[instrument(skip(self, system_prompt, user_message))]
    pub async fn generate(&self, system_prompt: &str, user_message: &str) -> Result<String, LlmError> {
        self.generate_with(system_prompt, user_message, GenerationOptions::default())
            .await
    }

    /// Generates a completion with explicit sampling options.
    #[instrument(skip(self, system_prompt, user_message), fields(provider = ?self.config.provider, model = %self.config.model))]
    pub async fn generate_with(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        debug!(?options, "Generating completion");
        let content = match self.config.provider {
            LlmProvider::Gemini => self.generate_gemini(system_prompt, user_message, options).await,
            LlmProvider::OpenAI => self.generate_openai(system_prompt, user_message, options).await,
            LlmProvider::Anthropic => {
                self.generate_anthropic(system_prompt, user_message, options)
                    .await
            }
        }?;
        info!(content_length = content.len(), "Generated completion");
        Ok(content)
    }

    /// Generates a completion using Google Gemini.
    #[instrument(skip_all)]
    async fn generate_gemini(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        let mut generation_config = json!({ "maxOutputTokens": self.config.max_tokens });
        if let Some(t) = options.temperature {
            generation_config["temperature"] = json!(t);
        }
        if options.json {
            generation_config["responseMimeType"] = json!("application/json");
        }
        let body = json!({
            "systemInstruction": { "parts": [{ "text": system_prompt }] },
            "contents": [{ "role": "user", "parts": [{ "text": user_message }] }],
            "generationConfig": generation_config,
        });

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url(),
            self.config.model
        );
        let request = self
            .http
            .post(url)
            .header("x-goog-api-key", self.config.api_key.clone())
            .json(&body);
        let response = self.send("Gemini", request).await?;

        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                error!(response = %response, "No text content in Gemini response");
                LlmError::new("No text content in Gemini response".to_string())
            })
    }

    /// Generates a completion using Anthropic Claude.
    #[instrument(skip_all)]
    async fn generate_anthropic(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        let mut body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": system_prompt,
            "messages": [
                {
                    "role": "user",
                    "content": user_message
                }
            ]
        });
        if let Some(t) = options.temperature {
            body["temperature"] = json!(t);
        }

        let request = self
            .http
            .post(format!("{}/v1/messages", self.config.base_url()))
            .header("x-api-key", self.config.api_key.clone())
            .header("anthropic-version", "2023-06-01")
            .json(&body);
        let response = self.send("Anthropic", request).await?;

        response["content"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                error!(response = %response, "No text content in Anthropic response");
                LlmError::new("No text content in Anthropic response".to_string())
            })
    }

    /// Generates a completion using OpenAI chat completions.
    #[instrument(skip_all)]
    async fn generate_openai(
        &self,
        system_prompt: &str,
        user_message: &str,
        options: GenerationOptions,
    ) -> Result<String, LlmError> {
        let mut body = json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_message }
            ]
        });
        if let Some(t) = options.temperature {
            body["temperature"] = json!(t);
        }
        if options.json {
            body["response_format"] = json!({ "type": "json_object" });
        }

        let request = self
            .http
            .post(format!("{}/v1/chat/completions", self.config.base_url()))
            .bearer_auth(&self.config.api_key)
            .json(&body);
        let response = self.send("OpenAI", request).await?;

        response["choices"][0]["message"]["content"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                error!("No content in OpenAI response");
                LlmError::new("No content in OpenAI response".to_string())
            })
    }

    /// Sends a request and parses the JSON body, mapping every failure to
    /// [`LlmError`].
    async fn send(&self, vendor: &str, request: reqwest::RequestBuilder) -> Result<Value, LlmError> {
        debug!(vendor, "Sending request");
        let response = request.send().await.map_err(|e| {
            error!(error = ?e, vendor, "API request failed");
            LlmError::new(format!("{} API request failed: {}", vendor, e))
        })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            error!(error = ?e, vendor, "Failed to read response");
            LlmError::new(format!("Failed to read response: {}", e))
        })?;

        if !status.is_success() {
            error!(status = %status, response = %response_text, vendor, "API error");
            return Err(LlmError::new(format!(
                "{} API error {}: {}",
                vendor, status, response_text
            )));
        }

        debug!(response_length = response_text.len(), vendor, "Parsing response");
        serde_json::from_str(&response_text).map_err(|e| {
            error!(error = ?e, response = %response_text, vendor, "Failed to parse response");
            LlmError::new(format!("Failed to parse response: {}", e))
        })
    }
}

/// LLM client error.
#[derive(Debug, Clone, Display, Error)]
#[display("LLM error: {} at {}:{}", message, file, line)]
pub struct LlmError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl LlmError {
    /// Creates a new LLM error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        error!(error_message = %message, "LLM error created");
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
