//! [`Gateway`] over an OpenAI-compatible chat completions server (vLLM, FastChat, llama.cpp server, ...)
//! hosting the model at `MODEL_PATH`.

use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::config::GatewayConfig;
use crate::history::{ConversationHistory, Turn};
use crate::{ChatOutcome, Gateway, GatewayError, ModelInput};

/// Masks an API key for logging: first 7 chars + "***" + last 4 chars; "***" when 11 chars or fewer.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// Translates history plus the new query into chat messages: one user/assistant pair per turn, then the query.
pub fn build_messages(
    history: &ConversationHistory,
    query: &str,
) -> Result<Vec<ChatCompletionRequestMessage>, GatewayError> {
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for turn in history.turns() {
        messages.push(user_message(&turn.query)?);
        messages.push(
            ChatCompletionRequestAssistantMessageArgs::default()
                .content(turn.response.clone())
                .build()
                .map_err(|e| GatewayError::Request(e.to_string()))?
                .into(),
        );
    }
    messages.push(user_message(query)?);
    Ok(messages)
}

fn user_message(content: &str) -> Result<ChatCompletionRequestMessage, GatewayError> {
    Ok(ChatCompletionRequestUserMessageArgs::default()
        .content(content.to_string())
        .build()
        .map_err(|e| GatewayError::Request(e.to_string()))?
        .into())
}

/// OpenAI-compatible gateway. Cheap to clone; the HTTP client is shared.
#[derive(Clone)]
pub struct OpenAiGateway {
    client: Arc<Client<OpenAIConfig>>,
    model: String,
    max_history_turns: Option<usize>,
    /// Kept only for masked logging.
    api_key: String,
}

impl OpenAiGateway {
    pub fn new(api_url: &str, api_key: &str, model: impl Into<String>) -> Self {
        let config = OpenAIConfig::new()
            .with_api_key(api_key)
            .with_api_base(api_url.trim_end_matches('/'));
        Self {
            client: Arc::new(Client::with_config(config)),
            model: model.into(),
            max_history_turns: None,
            api_key: api_key.to_string(),
        }
    }

    pub fn from_config(config: &dyn GatewayConfig) -> Self {
        Self::new(config.api_url(), config.api_key(), config.model_path())
            .with_max_history_turns(config.max_history_turns())
    }

    pub fn with_max_history_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_history_turns = max_turns;
        self
    }
}

#[async_trait]
impl Gateway for OpenAiGateway {
    #[instrument(skip(self, input, history), fields(model = %self.model, history_turns = history.len()))]
    async fn chat(
        &self,
        input: ModelInput,
        history: &ConversationHistory,
    ) -> Result<ChatOutcome, GatewayError> {
        let query = match input {
            ModelInput::Text(text) => text,
            ModelInput::Unsupported { kind } => {
                warn!(kind = %kind, "Rejected non-text model input");
                return Err(GatewayError::UnsupportedContentKind(kind));
            }
        };

        let messages = build_messages(history, &query)?;
        info!(
            message_count = messages.len(),
            api_key = %mask_token(&self.api_key),
            "chat_completion request"
        );

        let request = CreateChatCompletionRequestArgs::default()
            .model(self.model.as_str())
            .messages(messages)
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| GatewayError::Request(e.to_string()))?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat_completion usage"
            );
        }

        let reply = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(GatewayError::EmptyResponse)?;

        let mut updated = history.clone().with_turn(Turn::new(query, reply.clone()));
        if let Some(max) = self.max_history_turns {
            updated = updated.keep_recent(max);
        }

        Ok(ChatOutcome {
            response: reply,
            history: updated,
        })
    }
}
