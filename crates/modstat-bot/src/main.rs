//! Main entry point for the modstat bot.

use anyhow::{Context, Result};
use modstat_bot::ModstatBot;
use modstat_common::init_logging;
use modstat_config::ConfigLoader;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    let loader = ConfigLoader::default();
    let config = loader
        .load()
        .with_context(|| format!("Failed to load {}", loader.path().display()))?;

    // Keeps the file writer flushing until exit.
    let _logging = init_logging(&config.logging)?;

    info!("Starting modstat bot");
    info!("Configuration loaded from {}", loader.path().display());

    let token = ConfigLoader::load_token(&config)?;
    let bot = ModstatBot::new(config, token);

    if let Err(e) = bot.start().await {
        error!("Bot stopped with an error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
