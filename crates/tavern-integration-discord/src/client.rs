//! Discord API client wrapper

use serenity::builder::{CreateAllowedMentions, CreateCommand, CreateMessage};
use serenity::http::{Http, Typing};
use serenity::model::application::Command;
use serenity::model::channel::Message as SerenityMessage;
use serenity::model::id::{ChannelId, GuildId, MessageId};
use std::sync::Arc;
use tracing::{debug, error};

use crate::config::DiscordConfig;

/// Discord API client
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
    config: DiscordConfig,
}

impl DiscordClient {
    /// Create a new Discord client
    pub fn new(config: DiscordConfig) -> Self {
        let http = Arc::new(Http::new(&config.token));
        Self { http, config }
    }

    /// Send a message to a channel
    pub async fn send_message(
        &self,
        channel_id: u64,
        content: &str,
    ) -> Result<SerenityMessage, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(channel_id = %channel_id, content_len = %content.len(), "Sending message to Discord");

        let message = channel
            .say(&self.http, content)
            .await
            .inspect_err(|e| error!(error = %e, "Failed to send Discord message"))?;

        Ok(message)
    }

    /// Reply to a message without pinging its author
    pub async fn reply(
        &self,
        channel_id: u64,
        message_id: u64,
        content: &str,
    ) -> Result<SerenityMessage, serenity::Error> {
        let channel = ChannelId::new(channel_id);
        debug!(
            channel_id = %channel_id,
            message_id = %message_id,
            content_len = %content.len(),
            "Replying to Discord message"
        );

        let message = channel
            .send_message(
                &self.http,
                CreateMessage::new()
                    .content(content)
                    .reference_message((channel, MessageId::new(message_id)))
                    .allowed_mentions(CreateAllowedMentions::new().replied_user(false)),
            )
            .await
            .inspect_err(|e| error!(error = %e, "Failed to reply to Discord message"))?;

        Ok(message)
    }

    /// Deliver a multi-part reply in order
    ///
    /// The first part is sent as a reply to `message_id`; later parts are
    /// plain messages in the same channel. Each send completes before the
    /// next one starts.
    pub async fn reply_in_parts(
        &self,
        channel_id: u64,
        message_id: u64,
        parts: &[String],
    ) -> Result<(), serenity::Error> {
        let Some((first, rest)) = parts.split_first() else {
            return Ok(());
        };

        self.reply(channel_id, message_id, first).await?;
        for part in rest {
            self.send_message(channel_id, part).await?;
        }

        Ok(())
    }

    /// Show the typing indicator until the returned guard is dropped
    pub fn start_typing(&self, channel_id: u64) -> Typing {
        ChannelId::new(channel_id).start_typing(&self.http)
    }

    /// Owner of the bot's application, if it is owned by a single user
    pub async fn application_owner(&self) -> Result<Option<u64>, serenity::Error> {
        let info = self.http.get_current_application_info().await?;
        Ok(info.owner.map(|owner| owner.id.get()))
    }

    /// Replace the registered slash commands
    ///
    /// Registers in the configured guild when one is set, otherwise globally.
    pub async fn register_commands(
        &self,
        commands: Vec<CreateCommand>,
    ) -> Result<Vec<Command>, serenity::Error> {
        match self.config.guild_id {
            Some(guild_id) => {
                debug!(guild_id = %guild_id, "Registering guild slash commands");
                GuildId::new(guild_id).set_commands(&self.http, commands).await
            }
            None => {
                debug!("Registering global slash commands");
                Command::set_global_commands(&self.http, commands).await
            }
        }
    }
}
