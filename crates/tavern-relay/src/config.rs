//! Relay bot configuration
//!
//! Read from the environment (a `.env` file is loaded first by `main`).

use tavern::{DomainError, MAX_MESSAGE_LENGTH};
use tavern_integration_discord::{mask_token, DiscordConfig};

use crate::adapters::{DEFAULT_BASE_URL, DEFAULT_MODEL};

pub const DISCORD_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";
pub const API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

const DEFAULT_PREFIX: &str = "!ai";
const DEFAULT_SYSTEM_PROMPT: &str =
    "You are an AI assistant on a Discord server. Be concise and helpful.";
const DEFAULT_MAX_TOKENS: u32 = 2000;

/// Relay bot settings
#[derive(Clone)]
pub struct RelayConfig {
    pub discord: DiscordConfig,
    /// Completion API key
    pub api_key: String,
    /// Completion API base URL
    pub base_url: String,
    /// Completion model
    pub model: String,
    /// Command prefix that addresses the bot (`!ai question`)
    pub prefix: String,
    /// System instruction sent with every question
    pub system_prompt: String,
    /// Output token limit per answer
    pub max_tokens: u32,
    /// Platform message length limit
    pub max_message_length: usize,
}

impl RelayConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    ///
    /// Both secrets are checked before failing so the error names every
    /// missing variable at once.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let token = get(DISCORD_TOKEN_VAR);
        let api_key = get(API_KEY_VAR);

        let (token, api_key) = match (token, api_key) {
            (Some(token), Some(api_key)) => (token, api_key),
            (token, api_key) => {
                let mut missing = Vec::new();
                if token.is_none() {
                    missing.push(DISCORD_TOKEN_VAR);
                }
                if api_key.is_none() {
                    missing.push(API_KEY_VAR);
                }
                return Err(DomainError::missing_config(&missing[..]));
            }
        };

        Ok(Self {
            discord: DiscordConfig::new(token),
            api_key,
            base_url: get("DEEPSEEK_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model: get("DEEPSEEK_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            prefix: get("RELAY_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            max_message_length: MAX_MESSAGE_LENGTH,
        })
    }
}

impl std::fmt::Debug for RelayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelayConfig")
            .field("discord", &self.discord)
            .field("api_key", &mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("prefix", &self.prefix)
            .field("max_tokens", &self.max_tokens)
            .finish_non_exhaustive()
    }
}
