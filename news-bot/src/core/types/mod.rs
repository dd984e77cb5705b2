//! Core types: user, chat, outgoing reply and keyboard.
//!
//! Types are split into one file per main type for easier navigation.

mod chat;
mod reply;
mod user;

pub use chat::Chat;
pub use reply::{InlineButton, Keyboard, Reply};
pub use user::{ToCoreUser, User};
