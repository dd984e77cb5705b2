//! Dialog handler: runs the controller for one incoming action and sends every reply through a [`Bot`].

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::core::{Bot, Reply, Result};

use super::action::Incoming;
use super::controller::DialogController;
use super::menu;

/// Glue between the transport and [`DialogController`]; production wraps Telegram, tests a mock bot.
#[derive(Clone)]
pub struct DialogHandler {
    controller: Arc<DialogController>,
    bot: Arc<dyn Bot>,
}

impl DialogHandler {
    pub fn new(controller: Arc<DialogController>, bot: Arc<dyn Bot>) -> Self {
        Self { controller, bot }
    }

    pub fn controller(&self) -> &DialogController {
        &self.controller
    }

    /// Handles the action and sends replies in order.
    ///
    /// On the first send failure the remaining replies are dropped, the user gets one
    /// failure notice and the send error is returned.
    #[instrument(skip(self, incoming), fields(user_id = incoming.user.id, chat_id = incoming.chat.id))]
    pub async fn process(&self, incoming: &Incoming) -> Result<()> {
        info!(action = ?incoming.action, "step: dialog started");

        let replies = self
            .controller
            .handle(incoming.user.id, incoming.action.clone())
            .await;

        for (sent, reply) in replies.iter().enumerate() {
            if let Err(e) = self.bot.send_reply(&incoming.chat, reply).await {
                error!(error = %e, sent, total = replies.len(), "Failed to send reply");
                let notice = Reply::text(menu::TEXT_SEND_FAILURE);
                if let Err(notice_err) = self.bot.send_reply(&incoming.chat, &notice).await {
                    error!(error = %notice_err, "Failed to send failure notice");
                }
                return Err(e);
            }
        }

        info!(replies = replies.len(), "step: dialog finished");
        Ok(())
    }
}
