//! Wraps teloxide::Bot and implements [`askbot_core::Bot`]. Production code talks to Telegram; tests substitute another Bot impl.

use askbot_core::{ensure_copyable, parse_message_id, AskbotError, Bot as CoreBot, Chat, Message, Result};
use async_trait::async_trait;
use teloxide::payloads::SendMessageSetters;
use teloxide::prelude::*;
use teloxide::types::{ChatAction, ChatId, MessageId, ParseMode, ReplyParameters};

/// Thin wrapper around teloxide::Bot that implements the core Bot trait.
#[derive(Clone)]
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

fn bot_err(e: teloxide::RequestError) -> AskbotError {
    AskbotError::Bot(e.to_string())
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(bot_err)?;
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .parse_mode(ParseMode::Html)
            .await
            .map_err(bot_err)?;
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        let id = parse_message_id(&message.id)?;
        self.bot
            .send_message(ChatId(message.chat.id), text.to_string())
            .reply_parameters(ReplyParameters::new(MessageId(id)))
            .await
            .map_err(bot_err)?;
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.bot
            .send_chat_action(ChatId(chat.id), ChatAction::Typing)
            .await
            .map_err(bot_err)?;
        Ok(())
    }

    async fn copy_message(&self, message: &Message) -> Result<()> {
        ensure_copyable(message)?;
        let id = parse_message_id(&message.id)?;
        let chat_id = ChatId(message.chat.id);
        self.bot
            .copy_message(chat_id, chat_id, MessageId(id))
            .await
            .map_err(bot_err)?;
        Ok(())
    }
}
