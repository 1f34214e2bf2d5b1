//! `/ask <question>`: typing indicator, model call under the session lock, history overwrite, reply.

use askbot_core::{AskbotError, Bot, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use model_gateway::{Gateway, GatewayError, ModelInput};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::commands::{split_command, ASK_USAGE, FALLBACK_REPLY};
use crate::session::SessionStore;

pub struct AskHandler {
    bot: Arc<dyn Bot>,
    gateway: Arc<dyn Gateway>,
    sessions: Arc<SessionStore>,
}

impl AskHandler {
    pub fn new(bot: Arc<dyn Bot>, gateway: Arc<dyn Gateway>, sessions: Arc<SessionStore>) -> Self {
        Self {
            bot,
            gateway,
            sessions,
        }
    }

    /// Text messages become the question after `/ask`; media (command in a caption) is passed on as unsupported.
    fn model_input(message: &Message) -> ModelInput {
        if message.is_text() {
            let question = split_command(&message.content)
                .map(|token| token.args)
                .unwrap_or("");
            ModelInput::Text(question.to_string())
        } else {
            ModelInput::Unsupported {
                kind: message.content_kind.to_string(),
            }
        }
    }
}

#[async_trait]
impl Handler for AskHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, user_id = message.user.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let input = Self::model_input(message);
        if matches!(input, ModelInput::Text(ref q) if q.is_empty()) {
            self.bot.reply_to(message, ASK_USAGE).await?;
            return Ok(HandlerResponse::Reply(ASK_USAGE.to_string()));
        }

        self.bot.send_typing(&message.chat).await?;

        let session = self.sessions.session(&message.chat).await;
        let response = {
            let mut history = session.lock().await;
            match self.gateway.chat(input, &history).await {
                Ok(outcome) => {
                    *history = outcome.history;
                    info!(history_turns = history.len(), "History updated");
                    outcome.response
                }
                Err(GatewayError::UnsupportedContentKind(kind)) => {
                    drop(history);
                    warn!(kind = %kind, "Model cannot take this content, sending fallback");
                    self.bot.send_message(&message.chat, FALLBACK_REPLY).await?;
                    return Ok(HandlerResponse::Reply(FALLBACK_REPLY.to_string()));
                }
                Err(e) => return Err(AskbotError::Gateway(e.to_string())),
            }
        };

        self.bot.reply_to(message, &response).await?;
        Ok(HandlerResponse::Reply(response))
    }
}
