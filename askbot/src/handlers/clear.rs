//! `/flush`, `/clear`: resets the session's history and confirms.

use askbot_core::{Bot, Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::commands::CLEAR_REPLY;
use crate::session::SessionStore;

pub struct ClearHandler {
    bot: Arc<dyn Bot>,
    sessions: Arc<SessionStore>,
}

impl ClearHandler {
    pub fn new(bot: Arc<dyn Bot>, sessions: Arc<SessionStore>) -> Self {
        Self { bot, sessions }
    }
}

#[async_trait]
impl Handler for ClearHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        self.sessions.clear(&message.chat).await;
        info!(session = ?self.sessions.key_for(&message.chat), "History cleared");
        self.bot.reply_to(message, CLEAR_REPLY).await?;
        Ok(HandlerResponse::Reply(CLEAR_REPLY.to_string()))
    }
}
