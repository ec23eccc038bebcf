//! Discord Integration for the Tavern bots
//!
//! Thin layer over serenity shared by the relay and dice bots: connection
//! settings, an HTTP client wrapper for replies, conversion of gateway
//! messages into domain messages, and slash command definitions.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tavern_integration_discord::{DiscordClient, DiscordConfig};
//!
//! let client = DiscordClient::new(DiscordConfig::new("your-bot-token"));
//! client.reply_in_parts(channel_id, message_id, &parts).await?;
//! ```

mod client;
mod commands;
mod config;
mod inbound;

pub use client::DiscordClient;
pub use commands::{
    dice_commands, roll_command, string_option, PrefixCommand, FORMULA_OPTION, ROLL_COMMAND,
};
pub use config::{mask_token, DiscordConfig};
pub use inbound::{display_name, to_inbound};
