//! Adapters from Telegram (teloxide) types to askbot_core types.

use askbot_core::{Chat, ContentKind, Message, ToCoreMessage, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

/// Wraps a teloxide Message for conversion to core [`Message`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreMessage for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Message {
        let msg = self.0;
        Message {
            id: msg.id.0.to_string(),
            user: msg
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(|| User {
                    id: 0,
                    username: None,
                    first_name: None,
                    last_name: None,
                }),
            chat: Chat {
                id: msg.chat.id.0,
                chat_type: self.chat_type().to_string(),
            },
            content: msg.text().or_else(|| msg.caption()).unwrap_or("").to_string(),
            content_kind: self.content_kind(),
            created_at: msg.date,
        }
    }
}

impl<'a> TelegramMessageWrapper<'a> {
    fn chat_type(&self) -> &'static str {
        let chat = &self.0.chat;
        if chat.is_private() {
            "private"
        } else if chat.is_supergroup() {
            "supergroup"
        } else if chat.is_group() {
            "group"
        } else if chat.is_channel() {
            "channel"
        } else {
            "unknown"
        }
    }

    /// Classifies the payload. Venue is checked before location, animation before document.
    pub fn content_kind(&self) -> ContentKind {
        let m = self.0;
        if m.text().is_some() {
            ContentKind::Text
        } else if m.photo().is_some() {
            ContentKind::Photo
        } else if m.animation().is_some() {
            ContentKind::Animation
        } else if m.video().is_some() {
            ContentKind::Video
        } else if m.video_note().is_some() {
            ContentKind::VideoNote
        } else if m.audio().is_some() {
            ContentKind::Audio
        } else if m.voice().is_some() {
            ContentKind::Voice
        } else if m.document().is_some() {
            ContentKind::Document
        } else if m.sticker().is_some() {
            ContentKind::Sticker
        } else if m.venue().is_some() {
            ContentKind::Venue
        } else if m.location().is_some() {
            ContentKind::Location
        } else if m.contact().is_some() {
            ContentKind::Contact
        } else if m.poll().is_some() {
            ContentKind::Poll
        } else if m.dice().is_some() {
            ContentKind::Dice
        } else if m.game().is_some() {
            ContentKind::Game
        } else if m.invoice().is_some() {
            ContentKind::Invoice
        } else {
            ContentKind::Other
        }
    }
}
