//! Fallback: copies the message back to its chat; uncopyable kinds get the fallback reply.

use askbot_core::{AskbotError, Bot, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::commands::FALLBACK_REPLY;

pub struct EchoHandler {
    bot: Arc<dyn Bot>,
}

impl EchoHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for EchoHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id, kind = %message.content_kind))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match self.bot.copy_message(message).await {
            Ok(()) => {
                debug!("Echoed message");
                Ok(HandlerResponse::Stop)
            }
            Err(AskbotError::UnsupportedContentKind(kind)) => {
                warn!(kind = %kind, "Cannot copy message, sending fallback");
                self.bot.send_message(&message.chat, FALLBACK_REPLY).await?;
                Ok(HandlerResponse::Reply(FALLBACK_REPLY.to_string()))
            }
            Err(e) => Err(e),
        }
    }
}
