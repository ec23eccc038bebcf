//! Tavern Relay - forwards questions from Discord to a chat-completion API
//!
//! Answers messages that mention the bot or start with the command prefix
//! (`!ai` by default).
//!
//! Required environment variables:
//! - DISCORD_BOT_TOKEN: Discord bot token
//! - DEEPSEEK_API_KEY: DeepSeek API key

use anyhow::{Context, Result};
use serenity::Client;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod adapters;
mod application;
mod config;
mod handler;

use adapters::DeepSeekProvider;
use application::{RelayService, RelaySettings};
use config::RelayConfig;
use handler::RelayHandler;
use tavern_integration_discord::DiscordClient;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,tavern_relay=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = RelayConfig::from_env()
        .context("Copy .env.example to .env and fill in your credentials")?;

    info!(config = ?config, "🔄 Starting relay bot");

    let provider = Arc::new(
        DeepSeekProvider::new(&config.api_key)
            .with_base_url(&config.base_url)
            .with_model(&config.model),
    );
    let service = RelayService::new(
        provider,
        RelaySettings {
            prefix: config.prefix.clone(),
            system_prompt: config.system_prompt.clone(),
            max_tokens: config.max_tokens,
            max_message_length: config.max_message_length,
        },
    );
    let discord = DiscordClient::new(config.discord.clone());
    let handler = RelayHandler::new(service, discord, &config.prefix);

    let mut client = Client::builder(&config.discord.token, config.discord.intents())
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

    Ok(())
}
