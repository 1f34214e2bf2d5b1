//! # askbot-telegram
//!
//! Telegram transport: proxied teloxide client, adapters to core types, [`askbot_core::Bot`]
//! implementation, minimal config and the REPL runner. No model or session logic.

mod adapters;
mod bot_adapter;
mod client;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use client::build_bot;
pub use config::TelegramConfig;
pub use runner::run_repl;
