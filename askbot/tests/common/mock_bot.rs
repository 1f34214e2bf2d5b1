//! Mock implementation of [`askbot_core::Bot`] that records every outbound call.

use askbot_core::{ensure_copyable, Bot, Chat, Message, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// One recorded outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text { chat_id: i64, text: String },
    Html { chat_id: i64, text: String },
    Reply { chat_id: i64, message_id: String, text: String },
    Typing { chat_id: i64 },
    Copy { chat_id: i64, message_id: String },
}

/// Records calls in order. `copy_message` rejects uncopyable kinds like the real adapter.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<Sent>>,
}

impl MockBot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }

    /// Text of every reply_to call, in order.
    pub fn replies(&self) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter_map(|s| match s {
                Sent::Reply { text, .. } => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Text {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()> {
        self.record(Sent::Html {
            chat_id: chat.id,
            text: text.to_string(),
        });
        Ok(())
    }

    async fn reply_to(&self, message: &Message, text: &str) -> Result<()> {
        self.record(Sent::Reply {
            chat_id: message.chat.id,
            message_id: message.id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }

    async fn send_typing(&self, chat: &Chat) -> Result<()> {
        self.record(Sent::Typing { chat_id: chat.id });
        Ok(())
    }

    async fn copy_message(&self, message: &Message) -> Result<()> {
        ensure_copyable(message)?;
        self.record(Sent::Copy {
            chat_id: message.chat.id,
            message_id: message.id.clone(),
        });
        Ok(())
    }
}
