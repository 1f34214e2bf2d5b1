//! Shared helpers for askbot integration tests: recording bot, stub gateways, message builders.

#![allow(dead_code)]

pub mod mock_bot;
pub mod stub_gateway;

use askbot::{build_handler_chain, SessionScope, SessionStore};
use askbot_core::{Chat, ContentKind, Message, User};
use chrono::Utc;
use handler_chain::HandlerChain;
use model_gateway::Gateway;
use std::sync::Arc;
use tokio::sync::RwLock;

use mock_bot::MockBot;

pub const BOT_USERNAME: &str = "ask_test_bot";

/// Chain wired like the binary, with a known bot username.
pub struct Harness {
    pub bot: Arc<MockBot>,
    pub sessions: Arc<SessionStore>,
    pub chain: HandlerChain,
}

impl Harness {
    pub fn new(gateway: Arc<dyn Gateway>, scope: SessionScope) -> Self {
        let bot = Arc::new(MockBot::new());
        let sessions = Arc::new(SessionStore::new(scope));
        let chain = build_handler_chain(
            bot.clone(),
            gateway,
            sessions.clone(),
            Arc::new(RwLock::new(Some(BOT_USERNAME.to_string()))),
        );
        Self {
            bot,
            sessions,
            chain,
        }
    }
}

pub fn chat(id: i64) -> Chat {
    Chat {
        id,
        chat_type: "private".to_string(),
    }
}

pub fn user() -> User {
    User {
        id: 123,
        username: Some("ada".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: Some("Lovelace".to_string()),
    }
}

pub fn text_message(chat_id: i64, text: &str) -> Message {
    message(chat_id, ContentKind::Text, text)
}

/// Non-text message; `caption` becomes the content.
pub fn media_message(chat_id: i64, kind: ContentKind, caption: &str) -> Message {
    message(chat_id, kind, caption)
}

fn message(chat_id: i64, kind: ContentKind, content: &str) -> Message {
    Message {
        id: "42".to_string(),
        user: user(),
        chat: chat(chat_id),
        content: content.to_string(),
        content_kind: kind,
        created_at: Utc::now(),
    }
}
