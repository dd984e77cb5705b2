//! Component factory: builds BotComponents from config. Isolates assembly logic from runner.

use std::sync::Arc;

use anyhow::Result;
use news_storage::{NewsRepository, NewsStore};
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use crate::core::Bot as CoreBot;
use crate::dialog::{DialogController, DialogHandler};
use crate::telegram::TelegramBotAdapter;

use super::config::BotConfig;

/// Dependencies for run_bot; produced by the component factory.
pub struct BotComponents {
    pub repo: Arc<NewsRepository>,
    pub teloxide_bot: Bot,
    pub handler: Arc<DialogHandler>,
}

/// Creates the teloxide Bot, honouring a custom API URL when set.
pub fn build_teloxide_bot(config: &BotConfig) -> Bot {
    let bot = Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Builds the dialog handler over any store and outgoing bot. Used by run_bot and tests.
pub fn build_dialog_handler(
    config: &BotConfig,
    store: Arc<dyn NewsStore>,
    bot: Arc<dyn CoreBot>,
) -> Arc<DialogHandler> {
    let controller =
        Arc::new(DialogController::new(store).with_max_chunk_len(config.max_message_length));
    Arc::new(DialogHandler::new(controller, bot))
}

/// Opens the news database and wires the Telegram adapter into the dialog handler.
#[instrument(skip(config))]
pub async fn build_bot_components(config: &BotConfig) -> Result<BotComponents> {
    let repo = Arc::new(NewsRepository::new(&config.database_url).await.map_err(|e| {
        error!(
            error = %e,
            database_url = %config.database_url,
            "Failed to initialize news storage"
        );
        anyhow::anyhow!("Failed to initialize news storage: {}", e)
    })?);

    let teloxide_bot = build_teloxide_bot(config);
    let bot_adapter: Arc<dyn CoreBot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let handler = build_dialog_handler(config, repo.clone(), bot_adapter);

    info!(
        database_url = %config.database_url,
        max_message_length = config.max_message_length,
        "Bot components built"
    );

    Ok(BotComponents {
        repo,
        teloxide_bot,
        handler,
    })
}
