//! Bot configuration: Telegram transport + model gateway + session scope + log file. Loaded from env.

use anyhow::{Context, Result};
use askbot_telegram::TelegramConfig;
use model_gateway::{EnvGatewayConfig, GatewayConfig};
use std::env;

use crate::session::SessionScope;

pub const DEFAULT_LOG_FILE: &str = "logs/askbot.log";

pub struct BotConfig {
    pub telegram: TelegramConfig,
    pub gateway: EnvGatewayConfig,
    /// SESSION_SCOPE
    pub session_scope: SessionScope,
    /// LOG_FILE
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` overrides API_TOKEN. API_TOKEN, PROXY_URL and MODEL_PATH are required.
    /// Call validate() after load to check URLs before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::from_env(token)?;
        if telegram.proxy_url.is_none() {
            anyhow::bail!("PROXY_URL not set");
        }
        let gateway = EnvGatewayConfig::from_env()?;
        let session_scope = match env::var("SESSION_SCOPE") {
            Ok(s) => s
                .parse::<SessionScope>()
                .map_err(|e: String| anyhow::anyhow!(e))
                .context("Invalid SESSION_SCOPE")?,
            Err(_) => SessionScope::default(),
        };
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        Ok(Self {
            telegram,
            gateway,
            session_scope,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        self.gateway.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.telegram.bot_token
    }
    pub fn proxy_url(&self) -> Option<&str> {
        self.telegram.proxy_url.as_deref()
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.telegram.telegram_api_url.as_deref()
    }
    pub fn model_path(&self) -> &str {
        self.gateway.model_path()
    }
    pub fn model_api_url(&self) -> &str {
        self.gateway.api_url()
    }
    pub fn log_file(&self) -> &str {
        &self.log_file
    }
}
