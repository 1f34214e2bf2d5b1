//! Command router: classifies each message into a [`Command`] and dispatches to exactly one handler.

use askbot_core::{Handler, HandlerResponse, Message, Result};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::commands::{Command, CommandKind};

/// Maps each [`CommandKind`] to its handler; [`CommandKind::Other`] goes to the fallback.
pub struct CommandRouter {
    bot_username: Arc<RwLock<Option<String>>>,
    start: Arc<dyn Handler>,
    ask: Arc<dyn Handler>,
    clear: Arc<dyn Handler>,
    fallback: Arc<dyn Handler>,
}

impl CommandRouter {
    pub fn new(
        bot_username: Arc<RwLock<Option<String>>>,
        start: Arc<dyn Handler>,
        ask: Arc<dyn Handler>,
        clear: Arc<dyn Handler>,
        fallback: Arc<dyn Handler>,
    ) -> Self {
        Self {
            bot_username,
            start,
            ask,
            clear,
            fallback,
        }
    }

    pub async fn classify(&self, message: &Message) -> Command {
        let username = self.bot_username.read().await;
        Command::parse(&message.content, username.as_deref())
    }

    pub fn handler_for(&self, kind: CommandKind) -> &Arc<dyn Handler> {
        match kind {
            CommandKind::Start => &self.start,
            CommandKind::Ask => &self.ask,
            CommandKind::Clear => &self.clear,
            CommandKind::Other => &self.fallback,
        }
    }
}

#[async_trait]
impl Handler for CommandRouter {
    #[instrument(skip(self, message), fields(chat_id = message.chat.id))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let kind = self.classify(message).await.kind();
        info!(user_id = message.user.id, command = ?kind, "Dispatching");
        self.handler_for(kind).handle(message).await
    }
}
