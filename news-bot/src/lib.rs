//! # Telegram news bot
//!
//! Menu-driven browsing of scraped regional news: by period, by category and by keyword.
//! The dialog layer is transport-agnostic; `telegram` plugs it into teloxide.

pub mod chunker;
pub mod cli;
pub mod components;
pub mod config;
pub mod core;
pub mod dialog;
pub mod runner;
pub mod telegram;

pub use cli::{load_config, Cli, Commands};

pub use core::{
    init_tracing, Bot, Chat, InlineButton, Keyboard, NewsBotError, Reply, Result, ToCoreUser,
    User, ValidationError,
};

pub use chunker::{chunk_items, chunk_records, render_item, DEFAULT_MAX_CHUNK_LEN, NO_RESULTS};
pub use dialog::{DialogController, DialogHandler, Incoming, UserAction};
pub use telegram::{run_dispatcher, TelegramBotAdapter, TelegramUserWrapper};

pub use components::{build_bot_components, build_dialog_handler, BotComponents};
pub use config::BotConfig;
pub use runner::run_bot;
