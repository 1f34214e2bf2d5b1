//! Session state: one conversation history per chat (or one for the whole bot), each behind its own lock.
//!
//! `/ask` holds its session's lock from the model call through the history write, so concurrent
//! asks on one session run one after the other; different sessions never wait on each other.

use askbot_core::Chat;
use model_gateway::ConversationHistory;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// How histories are partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionScope {
    /// One history per chat.
    #[default]
    Chat,
    /// One history shared by every chat.
    Global,
}

impl FromStr for SessionScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(SessionScope::Chat),
            "global" => Ok(SessionScope::Global),
            other => Err(format!("unknown session scope: {} (expected chat or global)", other)),
        }
    }
}

impl fmt::Display for SessionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionScope::Chat => f.write_str("chat"),
            SessionScope::Global => f.write_str("global"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
    Chat(i64),
    Global,
}

/// A conversation history and the lock that serializes access to it.
pub type Session = Arc<Mutex<ConversationHistory>>;

/// Map from [`SessionKey`] to [`Session`]. Sessions are created empty on first use.
pub struct SessionStore {
    scope: SessionScope,
    sessions: Mutex<HashMap<SessionKey, Session>>,
}

impl SessionStore {
    pub fn new(scope: SessionScope) -> Self {
        Self {
            scope,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn key_for(&self, chat: &Chat) -> SessionKey {
        match self.scope {
            SessionScope::Chat => SessionKey::Chat(chat.id),
            SessionScope::Global => SessionKey::Global,
        }
    }

    /// Returns the chat's session, creating an empty one if needed. The map lock is released before returning.
    pub async fn session(&self, chat: &Chat) -> Session {
        let key = self.key_for(chat);
        let mut sessions = self.sessions.lock().await;
        sessions
            .entry(key)
            .or_insert_with(|| {
                debug!(key = ?key, "Created session");
                Arc::new(Mutex::new(ConversationHistory::new()))
            })
            .clone()
    }

    /// Snapshot of the chat's history (empty if the session does not exist).
    pub async fn history(&self, chat: &Chat) -> ConversationHistory {
        let existing = self.sessions.lock().await.get(&self.key_for(chat)).cloned();
        match existing {
            Some(session) => session.lock().await.clone(),
            None => ConversationHistory::new(),
        }
    }

    /// Forgets the chat's history. An idle session is dropped from the map; one still held by an
    /// in-flight `/ask` stays and is emptied once that `/ask` releases its lock.
    pub async fn clear(&self, chat: &Chat) {
        let key = self.key_for(chat);
        let in_use = {
            let mut sessions = self.sessions.lock().await;
            match sessions.remove(&key) {
                Some(session) if Arc::strong_count(&session) > 1 => {
                    sessions.insert(key, session.clone());
                    session
                }
                Some(_) => {
                    debug!(key = ?key, "Dropped session");
                    return;
                }
                None => return,
            }
        };
        *in_use.lock().await = ConversationHistory::new();
    }

    /// Number of sessions created so far.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionScope::default())
    }
}
