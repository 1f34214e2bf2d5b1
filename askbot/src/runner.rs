//! Assembly and entry point: builds the transport, gateway, session store and handler chain, then runs the REPL.

use anyhow::Result;
use askbot_core::{init_tracing, Bot};
use askbot_telegram::{build_bot, run_repl, TelegramBotAdapter};
use handler_chain::HandlerChain;
use model_gateway::{Gateway, OpenAiGateway};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, instrument};

use crate::config::BotConfig;
use crate::handlers::{AskHandler, ClearHandler, EchoHandler, LoggingHandler, StartHandler};
use crate::router::CommandRouter;
use crate::session::SessionStore;

/// Everything the handler chain needs; produced by [`build_components`].
#[derive(Clone)]
pub struct BotComponents {
    pub teloxide_bot: teloxide::Bot,
    pub bot: Arc<dyn Bot>,
    pub gateway: Arc<dyn Gateway>,
    pub sessions: Arc<SessionStore>,
    /// Filled by the runner from get_me; used to match `/cmd@botname`.
    pub bot_username: Arc<RwLock<Option<String>>>,
}

/// Builds the proxied teloxide Bot, the model gateway and an empty session store from config.
pub fn build_components(config: &BotConfig) -> Result<BotComponents> {
    let teloxide_bot = build_bot(&config.telegram)?;
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let gateway: Arc<dyn Gateway> = Arc::new(OpenAiGateway::from_config(&config.gateway));
    Ok(BotComponents {
        teloxide_bot,
        bot,
        gateway,
        sessions: Arc::new(SessionStore::new(config.session_scope)),
        bot_username: Arc::new(RwLock::new(None)),
    })
}

/// Chain: [`LoggingHandler`] then [`CommandRouter`] over start / ask / clear / echo.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    gateway: Arc<dyn Gateway>,
    sessions: Arc<SessionStore>,
    bot_username: Arc<RwLock<Option<String>>>,
) -> HandlerChain {
    let router = CommandRouter::new(
        bot_username,
        Arc::new(StartHandler::new(bot.clone())),
        Arc::new(AskHandler::new(bot.clone(), gateway, sessions.clone())),
        Arc::new(ClearHandler::new(bot.clone(), sessions)),
        Arc::new(EchoHandler::new(bot)),
    );
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(router))
}

/// Main entry: validate config, init logging, build components and chain, run the REPL until it stops.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        model_path = %config.model_path(),
        model_api_url = %config.model_api_url(),
        session_scope = %config.session_scope,
        custom_api_url = config.telegram_api_url().is_some(),
        "Initializing bot"
    );

    let components = build_components(&config)?;
    let chain = build_handler_chain(
        components.bot.clone(),
        components.gateway.clone(),
        components.sessions.clone(),
        components.bot_username.clone(),
    );

    info!("Bot started");
    run_repl(components.teloxide_bot, chain, components.bot_username).await?;
    info!("Bot stopped");

    Ok(())
}
