//! Bot abstraction for outbound chat operations.
//!
//! [`Bot`] is transport-agnostic; askbot-telegram implements it via teloxide and tests substitute a recording mock.

use crate::error::{AskbotError, Result};
use crate::types::{Chat, Message};
use async_trait::async_trait;

/// Abstraction for sending messages and chat actions. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message formatted with HTML markup (`<b>`, `<i>`, ...). Callers escape user-provided parts.
    async fn send_html(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends `text` as a reply to `message` (same chat, quoting the original).
    async fn reply_to(&self, message: &Message, text: &str) -> Result<()>;
    /// Shows the "typing..." indicator in the chat.
    async fn send_typing(&self, chat: &Chat) -> Result<()>;
    /// Re-sends `message` unchanged to its own chat. Returns
    /// [`AskbotError::UnsupportedContentKind`] for kinds that cannot be copied.
    async fn copy_message(&self, message: &Message) -> Result<()>;
}

/// Parses a message id string into an i32.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| AskbotError::Bot(format!("Invalid message_id: {}", s)))
}

/// Returns `UnsupportedContentKind` unless `message` can be copied.
pub fn ensure_copyable(message: &Message) -> Result<()> {
    if message.content_kind.is_copyable() {
        Ok(())
    } else {
        Err(AskbotError::UnsupportedContentKind(message.content_kind))
    }
}
