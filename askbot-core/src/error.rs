//! Error types for the bot core.
//!
//! [`AskbotError`] is the single error type returned by [`crate::Bot`] and [`crate::Handler`].

use crate::types::ContentKind;
use thiserror::Error;

/// Error returned by transport calls and handlers.
#[derive(Error, Debug)]
pub enum AskbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    /// The operation cannot take content of this kind (e.g. copying a game message).
    #[error("Unsupported content kind: {0}")]
    UnsupportedContentKind(ContentKind),

    #[error("Gateway error: {0}")]
    Gateway(String),
}

/// Result type for core operations; uses [`AskbotError`].
pub type Result<T> = std::result::Result<T, AskbotError>;
