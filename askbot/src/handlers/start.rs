//! `/start`, `/hi`: greets the sender by name.

use askbot_core::{Bot, Handler, HandlerResponse, Message, Result, User};
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::utils::html;
use tracing::{info, instrument};

/// `Hello, <b>{full name}!</b>` with the name HTML-escaped.
pub fn greeting_html(user: &User) -> String {
    let name = user.full_name().unwrap_or_else(|| "there".to_string());
    format!("Hello, <b>{}!</b>", html::escape(&name))
}

pub struct StartHandler {
    bot: Arc<dyn Bot>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let text = greeting_html(&message.user);
        self.bot.send_html(&message.chat, &text).await?;
        info!(user_id = message.user.id, "Sent greeting");
        Ok(HandlerResponse::Reply(text))
    }
}
