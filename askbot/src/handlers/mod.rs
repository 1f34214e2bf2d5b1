//! Command handlers plus the logging handler that wraps the chain.

mod ask;
mod clear;
mod echo;
mod logging;
mod start;

pub use ask::AskHandler;
pub use clear::ClearHandler;
pub use echo::EchoHandler;
pub use logging::LoggingHandler;
pub use start::{greeting_html, StartHandler};
