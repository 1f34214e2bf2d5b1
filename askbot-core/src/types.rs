//! Core types: user, chat, message, content kind, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// First and last name joined by a space. Falls back to the username when no name is set.
    pub fn full_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.username.clone()
        } else {
            Some(name)
        }
    }
}

/// Chat (channel, group or private) identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// What the message carries. Commands are read from text or from a media caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    Photo,
    Video,
    Animation,
    Audio,
    Document,
    Voice,
    VideoNote,
    Sticker,
    Location,
    Venue,
    Contact,
    Poll,
    Dice,
    Game,
    Invoice,
    /// Service messages and anything the transport does not classify.
    Other,
}

impl ContentKind {
    /// Whether a message of this kind can be re-sent as a copy to a chat.
    pub fn is_copyable(self) -> bool {
        !matches!(self, ContentKind::Game | ContentKind::Invoice | ContentKind::Other)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentKind::Text => "text",
            ContentKind::Photo => "photo",
            ContentKind::Video => "video",
            ContentKind::Animation => "animation",
            ContentKind::Audio => "audio",
            ContentKind::Document => "document",
            ContentKind::Voice => "voice",
            ContentKind::VideoNote => "video_note",
            ContentKind::Sticker => "sticker",
            ContentKind::Location => "location",
            ContentKind::Venue => "venue",
            ContentKind::Contact => "contact",
            ContentKind::Poll => "poll",
            ContentKind::Dice => "dice",
            ContentKind::Game => "game",
            ContentKind::Invoice => "invoice",
            ContentKind::Other => "other",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single inbound message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    /// Transport-specific id (Telegram numeric string).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Text for text messages, caption for media (empty when there is none).
    pub content: String,
    pub content_kind: ContentKind,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn is_text(&self) -> bool {
        self.content_kind == ContentKind::Text
    }
}

/// Handler result for the chain. `Reply(text)` carries the text that was sent so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach the reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _message: &Message) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the message. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _message: &Message) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _message: &Message,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
