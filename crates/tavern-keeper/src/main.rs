//! Tavern Keeper - dice roller bot
//!
//! `/roll formula:2d6+3` rolls dice; `!sync` (owner only) registers the
//! slash commands with Discord.

use anyhow::{Context, Result};
use serenity::Client;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod application;
mod config;
mod handler;
mod storage;

use application::RollService;
use config::KeeperConfig;
use handler::{KeeperContext, KeeperHandler};
use tavern_integration_discord::DiscordClient;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tavern_keeper=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = KeeperConfig::from_env().context("Invalid dice bot configuration")?;
    info!(config = ?config, "🎲 Starting dice bot");

    let pool = storage::connect(&config.database_url)
        .await
        .context("Failed to prepare the database")?;

    let discord = DiscordClient::new(config.discord.clone());
    let intents = config.discord.intents();
    let token = config.discord.token.clone();

    let handler = KeeperHandler::new(KeeperContext {
        config,
        pool: pool.clone(),
        discord,
        rolls: RollService::new(),
    });

    let mut client = Client::builder(&token, intents)
        .event_handler(handler)
        .await
        .context("Failed to create Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 Shutting down");
            shard_manager.shutdown_all().await;
        }
    });

    client
        .start()
        .await
        .context("Discord client stopped with an error")?;

    pool.close().await;
    Ok(())
}
