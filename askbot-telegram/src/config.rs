//! Transport config: token, proxy, optional API URL. Loaded from env: API_TOKEN (or BOT_TOKEN),
//! PROXY_URL, TELEGRAM_API_URL (or TELOXIDE_API_URL).

use anyhow::Result;
use std::env;

/// Telegram connectivity config.
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Proxy for every Bot API request (http, https, socks5, socks5h).
    pub proxy_url: Option<String>,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Loads from env. `token` overrides API_TOKEN / BOT_TOKEN when given; one of them is required.
    pub fn from_env(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("API_TOKEN")
                .or_else(|_| env::var("BOT_TOKEN"))
                .map_err(|_| anyhow::anyhow!("API_TOKEN not set"))?,
        };
        let proxy_url = non_empty_var("PROXY_URL");
        let telegram_api_url =
            non_empty_var("TELEGRAM_API_URL").or_else(|| non_empty_var("TELOXIDE_API_URL"));
        Ok(Self {
            bot_token,
            proxy_url,
            telegram_api_url,
        })
    }

    /// Builds config with the given token; no proxy, default API URL.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            proxy_url: None,
            telegram_api_url: None,
        }
    }

    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Token must be non-empty; proxy and API URL, when set, must be valid URLs.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("API_TOKEN is empty");
        }
        if let Some(ref proxy) = self.proxy_url {
            if reqwest::Url::parse(proxy).is_err() {
                anyhow::bail!("PROXY_URL is set but not a valid URL: {}", proxy);
            }
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.trim().is_empty())
}
