//! Dice bot configuration

use tavern::DomainError;
use tavern_integration_discord::DiscordConfig;

pub const DISCORD_TOKEN_VAR: &str = "DISCORD_BOT_TOKEN";

/// Value shipped in `.env.example`; refused at startup
pub const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

const DEFAULT_DATABASE_URL: &str = "sqlite://tavern_keeper.db";

/// Dice bot settings
#[derive(Debug, Clone)]
pub struct KeeperConfig {
    pub discord: DiscordConfig,
    /// SQLite database, created on first start
    pub database_url: String,
}

impl KeeperConfig {
    /// Load from process environment
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load using an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let token = get(DISCORD_TOKEN_VAR).unwrap_or_else(|| TOKEN_PLACEHOLDER.to_string());
        if token == TOKEN_PLACEHOLDER {
            return Err(DomainError::Configuration(format!(
                "{} is not set. Put your bot token in the environment or in .env",
                DISCORD_TOKEN_VAR
            )));
        }

        let mut discord = DiscordConfig::new(token);
        if let Some(guild_id) = parse_id(get("DISCORD_GUILD_ID"), "DISCORD_GUILD_ID")? {
            discord = discord.with_guild_id(guild_id);
        }
        if let Some(owner_id) = parse_id(get("DISCORD_OWNER_ID"), "DISCORD_OWNER_ID")? {
            discord = discord.with_owner_id(owner_id);
        }

        Ok(Self {
            discord,
            database_url: get("TAVERN_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        })
    }
}

fn parse_id(value: Option<String>, name: &str) -> Result<Option<u64>, DomainError> {
    value
        .map(|raw| {
            raw.parse::<u64>().map_err(|_| {
                DomainError::Configuration(format!("{} must be a numeric Discord ID, got {:?}", name, raw))
            })
        })
        .transpose()
}
