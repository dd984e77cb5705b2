//! Bot configuration: Telegram connection, news database, logging and reply size. Loaded from env.

mod bot_config;


pub use bot_config::BotConfig;
