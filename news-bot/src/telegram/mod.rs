//! Telegram framework layer: update adapters, Bot implementation, dispatcher runner.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{incoming_from_callback, incoming_from_message, TelegramUserWrapper};
pub use bot_adapter::{to_reply_markup, TelegramBotAdapter};
pub use runner::run_dispatcher;
