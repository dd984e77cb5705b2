//! Mock implementation of [`news_bot::Bot`] for integration tests.
//!
//! Records every `send_reply` call so tests can assert on reply text and keyboards
//! without hitting Telegram.

use async_trait::async_trait;
use news_bot::{Bot, Chat, NewsBotError, Reply, Result};
use std::sync::Arc;
use tokio::sync::Mutex;

/// One recorded call to `send_reply(chat, reply)`.
#[derive(Debug, Clone)]
pub struct SentReply {
    pub chat_id: i64,
    pub reply: Reply,
}

/// Mock Bot that keeps every reply in order.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentReply>>,
    max_text_len: Option<usize>,
}

impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Rejects (and does not record) replies longer than `max_text_len` characters,
    /// like Telegram does for oversized messages.
    pub fn with_max_text_len(max_text_len: usize) -> Arc<Self> {
        Arc::new(Self {
            max_text_len: Some(max_text_len),
            ..Self::default()
        })
    }

    /// Returns and clears everything sent so far.
    pub async fn take(&self) -> Vec<SentReply> {
        std::mem::take(&mut *self.sent.lock().await)
    }

    /// Texts of everything sent so far, then clears.
    pub async fn take_texts(&self) -> Vec<String> {
        self.take().await.into_iter().map(|s| s.reply.text).collect()
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_reply(&self, chat: &Chat, reply: &Reply) -> Result<()> {
        if let Some(max) = self.max_text_len {
            if reply.text.chars().count() > max {
                return Err(NewsBotError::Bot("Bad Request: message is too long".to_string()));
            }
        }
        self.sent.lock().await.push(SentReply {
            chat_id: chat.id,
            reply: reply.clone(),
        });
        Ok(())
    }
}
