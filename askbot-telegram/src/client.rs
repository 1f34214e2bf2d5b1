//! Builds the teloxide Bot: reqwest client with teloxide's defaults plus the configured proxy, optional custom API URL.

use anyhow::{Context, Result};
use tracing::info;

use super::config::TelegramConfig;

/// Creates a teloxide Bot whose HTTP traffic goes through `config.proxy_url` when set.
pub fn build_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let mut builder = teloxide::net::default_reqwest_settings();
    if let Some(ref proxy_url) = config.proxy_url {
        let proxy = reqwest::Proxy::all(proxy_url.as_str())
            .with_context(|| format!("Invalid PROXY_URL: {}", proxy_url))?;
        builder = builder.proxy(proxy);
        info!(proxy = %redact_proxy(proxy_url), "Telegram requests go through proxy");
    }
    let client = builder.build().context("Failed to build HTTP client for Telegram")?;

    let bot = teloxide::Bot::with_client(config.bot_token.clone(), client);
    let bot = match config.telegram_api_url {
        Some(ref url_str) => {
            let url = reqwest::Url::parse(url_str)
                .with_context(|| format!("Invalid TELEGRAM_API_URL: {}", url_str))?;
            info!(api_url = %url, "Using custom Telegram API URL");
            bot.set_api_url(url)
        }
        None => bot,
    };
    Ok(bot)
}

/// Proxy URL without credentials, for logs.
fn redact_proxy(proxy_url: &str) -> String {
    match reqwest::Url::parse(proxy_url) {
        Ok(mut url) => {
            if !url.username().is_empty() || url.password().is_some() {
                let _ = url.set_username("***");
                let _ = url.set_password(None);
            }
            url.to_string()
        }
        Err(_) => "***".to_string(),
    }
}
