//! BioLab - study app and classroom games about human reproduction
//!
//! Content comes from an LLM through a [`ContentProvider`]; the game rules
//! live in [`biolab_games`]. This crate glues the two together.
//!
//! # Architecture
//!
//! - **Provider**: content generation (LLM-backed or scripted)
//! - **Sessions**: one async session per game or study mode
//! - **Console**: line-oriented terminal front-end
//! - **Config**: TOML settings and LLM credentials
//!
//! # Example
//!
//! ```no_run
//! use biolab::{AppConfig, FeudSession, LlmClient, LlmContentProvider};
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = AppConfig::from_file("biolab.toml")?;
//! let client = LlmClient::new(config.create_llm_config()?);
//! let provider = Arc::new(LlmContentProvider::new(client));
//!
//! let mut feud = FeudSession::new(
//!     provider,
//!     *config.final_reveal_scoring(),
//!     config.round_advance(),
//! );
//! feud.start_round().await?;
//! feud.guess("náuseas");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod console;
mod llm_client;
mod navigation;
mod provider;
mod session;

/// Command-line definitions, shared with the binary.
pub mod cli;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError};

// Crate-level exports - Console
pub use console::Console;

// Crate-level exports - LLM client
pub use llm_client::{GenerationOptions, LlmClient, LlmConfig, LlmError, LlmProvider};

// Crate-level exports - Navigation
pub use navigation::{Navigator, View};

// Crate-level exports - Content providers
pub use provider::{ContentProvider, LlmContentProvider, ScriptedContentProvider, extract_json};

// Crate-level exports - Sessions
pub use session::{
    ActivitySession, FeudSession, HangmanSession, JeopardySession, QuizSession, TicTacToeSession,
};
