//! # askbot-core
//!
//! Core types and traits for the bot: [`Bot`], [`Handler`], message, user and content-kind types,
//! errors, and tracing initialization. Transport-agnostic; used by askbot-telegram, handler-chain and askbot.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{ensure_copyable, parse_message_id, Bot};
pub use error::{AskbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ContentKind, Handler, HandlerResponse, Message, ToCoreMessage, ToCoreUser, User,
};
