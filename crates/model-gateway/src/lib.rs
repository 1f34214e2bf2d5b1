//! # Model gateway
//!
//! Defines the [`Gateway`] trait: given an input and the conversation history so far, return the
//! model's response together with the updated history. [`OpenAiGateway`] talks to any
//! OpenAI-compatible chat completions server hosting the model.
//!
//! Inputs the model cannot take (anything but text) are rejected with
//! [`GatewayError::UnsupportedContentKind`] so callers can match on it explicitly.

use async_trait::async_trait;
use thiserror::Error;

mod config;
mod history;
mod openai_gateway;

pub use config::{EnvGatewayConfig, GatewayConfig, DEFAULT_MODEL_API_KEY, DEFAULT_MODEL_API_URL};
pub use history::{ConversationHistory, Turn};
pub use openai_gateway::{build_messages, mask_token, OpenAiGateway};

/// What is handed to the model for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelInput {
    /// Plain text query.
    Text(String),
    /// Content the model cannot take; `kind` names it (e.g. "photo").
    Unsupported { kind: String },
}

/// Response plus the history the caller should keep for the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatOutcome {
    pub response: String,
    pub history: ConversationHistory,
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unsupported content kind: {0}")]
    UnsupportedContentKind(String),

    #[error("Model returned no response")]
    EmptyResponse,

    #[error("Model request failed: {0}")]
    Request(String),
}

/// Conversational model interface.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Runs one exchange. On success the returned history replaces the caller's history.
    async fn chat(
        &self,
        input: ModelInput,
        history: &ConversationHistory,
    ) -> Result<ChatOutcome, GatewayError>;
}
