use std::env;

use anyhow::{Context, Result};

use crate::chunker::DEFAULT_MAX_CHUNK_LEN;

/// Bot config. Use [`BotConfig::load`] then [`BotConfig::validate`] before startup.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    /// Log file path
    pub log_file: String,
    /// News database path (SQLite file)
    pub database_url: String,
    /// Per-message character budget for result listings
    pub max_message_length: usize,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").context("BOT_TOKEN not set")?,
        };
        let database_url = env::var("DATABASE_URL").unwrap_or_else(|_| "./news.db".to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/news-bot.log".to_string());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let max_message_length = match env::var("MAX_MESSAGE_LENGTH") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("MAX_MESSAGE_LENGTH is not a number: {}", raw))?,
            Err(_) => DEFAULT_MAX_CHUNK_LEN,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            max_message_length,
        })
    }

    /// Validate config (telegram_api_url must parse; budget must fit a Telegram message).
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.max_message_length == 0 || self.max_message_length > 4096 {
            anyhow::bail!(
                "MAX_MESSAGE_LENGTH must be between 1 and 4096, got {}",
                self.max_message_length
            );
        }
        Ok(())
    }
}
