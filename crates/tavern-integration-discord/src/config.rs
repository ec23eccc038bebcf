//! Discord configuration

use serenity::model::gateway::GatewayIntents;

/// Configuration for a Discord bot connection
#[derive(Clone, Default)]
pub struct DiscordConfig {
    /// Discord bot token
    pub token: String,
    /// Guild for guild-scoped slash commands (global when unset)
    pub guild_id: Option<u64>,
    /// Owner override for owner-only commands
    pub owner_id: Option<u64>,
}

impl DiscordConfig {
    /// Create a new Discord configuration with just a token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            guild_id: None,
            owner_id: None,
        }
    }

    /// Set the guild ID
    pub fn with_guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = Some(guild_id);
        self
    }

    /// Set the owner ID
    pub fn with_owner_id(mut self, owner_id: u64) -> Self {
        self.owner_id = Some(owner_id);
        self
    }

    /// Gateway intents needed to read message content in guilds and DMs
    pub fn intents(&self) -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }
}

impl std::fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &mask_token(&self.token))
            .field("guild_id", &self.guild_id)
            .field("owner_id", &self.owner_id)
            .finish()
    }
}

/// Mask a secret for logging: first 7 chars + "***" + last 4 chars,
/// or just "***" when the secret is too short to show any part of it.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}
