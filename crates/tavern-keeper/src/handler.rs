//! Discord event handler for the dice bot

use serenity::async_trait;
use serenity::builder::CreateInteractionResponseFollowup;
use serenity::model::application::{CommandInteraction, Interaction};
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use sqlx::SqlitePool;
use tracing::{debug, error, info, warn};

use tavern::DomainError;
use tavern_integration_discord::{
    dice_commands, display_name, string_option, DiscordClient, PrefixCommand, FORMULA_OPTION,
    ROLL_COMMAND,
};

use crate::application::RollService;
use crate::config::KeeperConfig;

const COMMAND_PREFIX: char = '!';

const SYNC_DONE_REPLY: &str = "Slash commands synced!";
const SYNC_DENIED_REPLY: &str = "You don't have permission to use this command.";
const SYNC_FAILED_REPLY: &str = "Failed to sync slash commands. Check the logs for details.";
const UNKNOWN_COMMAND_REPLY: &str = "Command not found. Try `/roll` to roll dice.";
const MISSING_FORMULA_REPLY: &str = "Missing argument. Usage: `/roll formula:1d20+5`";
const ROLL_FAILED_REPLY: &str =
    "An error occurred while processing your roll. Check the formula and try again.";

/// Text shown to the requester when a roll fails
fn roll_error_reply(err: &DomainError) -> String {
    match err {
        DomainError::InvalidFormula(e) => e.user_message(),
        _ => ROLL_FAILED_REPLY.to_string(),
    }
}

/// Everything the handler needs, built once in `main`
pub struct KeeperContext {
    pub config: KeeperConfig,
    /// Holds the (currently unused) characters table
    pub pool: SqlitePool,
    pub discord: DiscordClient,
    pub rolls: RollService,
}

pub struct KeeperHandler {
    context: KeeperContext,
}

impl KeeperHandler {
    pub fn new(context: KeeperContext) -> Self {
        Self { context }
    }

    async fn handle_roll(&self, ctx: &Context, command: &CommandInteraction) {
        // Acknowledge first; the follow-up may arrive after the 3s window.
        if let Err(e) = command.defer(ctx).await {
            error!(error = %e, "Failed to defer /roll");
            return;
        }

        let name = command
            .member
            .as_ref()
            .map(|member| member.display_name().to_string())
            .unwrap_or_else(|| display_name(&command.user));

        let reply = match string_option(command, FORMULA_OPTION) {
            Some(formula) => self
                .context
                .rolls
                .roll_reply(&name, formula)
                .unwrap_or_else(|e| {
                    debug!(user = %name, error = %e, "Roll rejected");
                    roll_error_reply(&e)
                }),
            None => MISSING_FORMULA_REPLY.to_string(),
        };

        if let Err(e) = command
            .create_followup(ctx, CreateInteractionResponseFollowup::new().content(reply))
            .await
        {
            error!(error = %e, user = %name, "Failed to send /roll result");
        }
    }

    async fn handle_sync(&self, msg: &Message) -> &'static str {
        let author_id = msg.author.id.get();

        let owner_id = match self.context.config.discord.owner_id {
            Some(owner_id) => Some(owner_id),
            None => match self.context.discord.application_owner().await {
                Ok(owner_id) => owner_id,
                Err(e) => {
                    error!(error = %e, "Failed to look up application owner");
                    None
                }
            },
        };

        if owner_id != Some(author_id) {
            warn!(user_id = %author_id, "Unauthorized !sync attempt");
            return SYNC_DENIED_REPLY;
        }

        match self.context.discord.register_commands(dice_commands()).await {
            Ok(commands) => {
                info!(count = commands.len(), "✅ Slash commands synced");
                SYNC_DONE_REPLY
            }
            Err(e) => {
                error!(error = %e, "Failed to sync slash commands");
                SYNC_FAILED_REPLY
            }
        }
    }
}

#[async_trait]
impl EventHandler for KeeperHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            user = %ready.user.name,
            user_id = %ready.user.id,
            guilds = ready.guilds.len(),
            db_connections = self.context.pool.size(),
            "✅ Bot connected, ready to roll"
        );
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };

        match command.data.name.as_str() {
            ROLL_COMMAND => self.handle_roll(&ctx, &command).await,
            other => debug!(command = %other, "Ignoring unknown slash command"),
        }
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }

        let Some(command) = PrefixCommand::parse(&msg.content, COMMAND_PREFIX) else {
            return;
        };

        let reply = match command {
            PrefixCommand::Sync => self.handle_sync(&msg).await,
            PrefixCommand::Unknown(name) => {
                debug!(command = %name, "Unknown prefix command");
                UNKNOWN_COMMAND_REPLY
            }
        };

        if let Err(e) = self
            .context
            .discord
            .send_message(msg.channel_id.get(), reply)
            .await
        {
            error!(error = %e, "Failed to answer prefix command");
        }
    }
}
