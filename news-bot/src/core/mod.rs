//! Core types and traits: Bot, Chat, User, Reply, errors, logger.
//! Transport-agnostic.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::Bot;
pub use error::{NewsBotError, Result, ValidationError};
pub use logger::init_tracing;
pub use types::{Chat, InlineButton, Keyboard, Reply, ToCoreUser, User};
