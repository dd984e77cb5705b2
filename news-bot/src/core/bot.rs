//! Bot abstraction for sending replies.
//!
//! [`Bot`] is transport-agnostic; [`crate::telegram::TelegramBotAdapter`] implements it via teloxide.

use async_trait::async_trait;

use super::error::Result;
use super::types::{Chat, Reply};

/// Abstraction for sending messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a reply (text and optional keyboard) to the given chat.
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()>;
}
