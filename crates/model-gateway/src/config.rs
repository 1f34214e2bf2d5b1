//! Gateway configuration: trait and env-based implementation.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_MODEL_API_URL: &str = "http://127.0.0.1:8000/v1";
/// Local model servers usually accept any key; this is what they conventionally expect.
pub const DEFAULT_MODEL_API_KEY: &str = "EMPTY";

/// Model gateway configuration interface.
pub trait GatewayConfig: Send + Sync {
    /// Model path or identifier as served by the model server.
    fn model_path(&self) -> &str;
    fn api_url(&self) -> &str;
    fn api_key(&self) -> &str;
    /// Max turns kept in history; None keeps everything.
    fn max_history_turns(&self) -> Option<usize>;
}

/// Gateway config loaded from environment variables.
#[derive(Debug, Clone)]
pub struct EnvGatewayConfig {
    pub model_path: String,
    pub model_api_url: String,
    pub model_api_key: String,
    pub history_max_turns: Option<usize>,
}

impl GatewayConfig for EnvGatewayConfig {
    fn model_path(&self) -> &str {
        &self.model_path
    }
    fn api_url(&self) -> &str {
        &self.model_api_url
    }
    fn api_key(&self) -> &str {
        &self.model_api_key
    }
    fn max_history_turns(&self) -> Option<usize> {
        self.history_max_turns
    }
}

impl EnvGatewayConfig {
    /// Loads from env: MODEL_PATH required; MODEL_API_URL, MODEL_API_KEY, HISTORY_MAX_TURNS optional.
    pub fn from_env() -> Result<Self> {
        let model_path = env::var("MODEL_PATH")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .context("MODEL_PATH not set")?;
        let model_api_url =
            env::var("MODEL_API_URL").unwrap_or_else(|_| DEFAULT_MODEL_API_URL.to_string());
        let model_api_key =
            env::var("MODEL_API_KEY").unwrap_or_else(|_| DEFAULT_MODEL_API_KEY.to_string());
        let history_max_turns = match env::var("HISTORY_MAX_TURNS") {
            Ok(s) => Some(
                s.trim()
                    .parse()
                    .with_context(|| format!("HISTORY_MAX_TURNS is not a number: {}", s))?,
            ),
            Err(_) => None,
        };
        Ok(Self {
            model_path,
            model_api_url,
            model_api_key,
            history_max_turns,
        })
    }

    /// MODEL_API_URL must be a valid URL.
    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.model_api_url).is_err() {
            anyhow::bail!("MODEL_API_URL is not a valid URL: {}", self.model_api_url);
        }
        Ok(())
    }
}
