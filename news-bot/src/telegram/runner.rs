//! Dispatcher runner: routes teloxide messages and callback queries to the [`DialogHandler`].

use std::sync::Arc;

use anyhow::Result;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::dialog::DialogHandler;

use super::adapters::{incoming_from_callback, incoming_from_message};

/// Runs the long-polling dispatcher until Ctrl-C.
///
/// Updates from one chat are handled in order; different chats run concurrently.
#[instrument(skip(bot, handler))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler: Arc<DialogHandler>) -> Result<()> {
    let schema = dptree::entry()
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_callback_query().endpoint(handle_callback));

    info!("step: dispatcher starting");

    Dispatcher::builder(bot, schema)
        .dependencies(dptree::deps![handler])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

async fn handle_message(msg: Message, handler: Arc<DialogHandler>) -> Result<()> {
    let Some(incoming) = incoming_from_message(&msg) else {
        info!(chat_id = msg.chat.id.0, "Received non-text message, ignored");
        return Ok(());
    };

    info!(
        user_id = incoming.user.id,
        chat_id = incoming.chat.id,
        message_content = msg.text().unwrap_or_default(),
        "Received message"
    );

    if let Err(e) = handler.process(&incoming).await {
        error!(error = %e, user_id = incoming.user.id, "Dialog handling failed");
    }
    Ok(())
}

async fn handle_callback(bot: Bot, query: CallbackQuery, handler: Arc<DialogHandler>) -> Result<()> {
    if let Err(e) = bot.answer_callback_query(query.id.clone()).await {
        error!(error = %e, "Failed to answer callback query");
    }

    let Some(incoming) = incoming_from_callback(&query) else {
        info!(user_id = query.from.id.0, "Callback query without data, ignored");
        return Ok(());
    };

    info!(
        user_id = incoming.user.id,
        chat_id = incoming.chat.id,
        token = query.data.as_deref().unwrap_or_default(),
        "Received callback"
    );

    if let Err(e) = handler.process(&incoming).await {
        error!(error = %e, user_id = incoming.user.id, "Dialog handling failed");
    }
    Ok(())
}
