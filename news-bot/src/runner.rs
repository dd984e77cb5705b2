use anyhow::Result;
use tracing::{info, instrument};

use crate::core::init_tracing;
use crate::telegram::run_dispatcher;

use super::components::build_bot_components;
use super::config::BotConfig;

/// Main entry: validate config, init logging, build components, then run the dispatcher.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        database_url = %config.database_url,
        custom_api_url = config.telegram_api_url.is_some(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let records = components.repo.count().await?;
    info!(records, "Bot started successfully");

    run_dispatcher(components.teloxide_bot, components.handler).await
}
