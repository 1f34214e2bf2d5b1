//! # askbot
//!
//! Telegram bot that greets (`/start`, `/hi`), answers questions with a conversational model
//! (`/ask`), forgets the conversation (`/flush`, `/clear`) and echoes everything else.
//! Wires askbot-telegram (transport), model-gateway and handler-chain; loads config from env.

pub mod cli;
pub mod commands;
pub mod config;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod session;

pub use cli::{load_config, Cli, Commands};
pub use commands::{Command, CommandKind, ASK_USAGE, CLEAR_REPLY, FALLBACK_REPLY};
pub use config::BotConfig;
pub use router::CommandRouter;
pub use runner::{build_components, build_handler_chain, run_bot, BotComponents};
pub use session::{Session, SessionKey, SessionScope, SessionStore};
