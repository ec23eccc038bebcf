//! Discord event handler for the relay bot

use serenity::async_trait;
use serenity::gateway::ActivityData;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use std::sync::OnceLock;
use tracing::{debug, error, info};

use tavern::CompletionProvider;
use tavern_integration_discord::{to_inbound, DiscordClient};

use crate::application::RelayService;

/// Reply sent when the answer could not be delivered
const DELIVERY_FAILURE_REPLY: &str = "❌ An error occurred while sending the reply.";

pub struct RelayHandler<P: CompletionProvider> {
    service: RelayService<P>,
    discord: DiscordClient,
    prefix: String,
    /// Set once the gateway reports who we are
    bot_id: OnceLock<u64>,
}

impl<P: CompletionProvider> RelayHandler<P> {
    pub fn new(service: RelayService<P>, discord: DiscordClient, prefix: impl Into<String>) -> Self {
        Self {
            service,
            discord,
            prefix: prefix.into(),
            bot_id: OnceLock::new(),
        }
    }
}

#[async_trait]
impl<P: CompletionProvider + 'static> EventHandler for RelayHandler<P> {
    async fn ready(&self, ctx: Context, ready: Ready) {
        if self.bot_id.set(ready.user.id.get()).is_err() {
            debug!("Gateway reconnected");
        }
        info!(user = %ready.user.name, user_id = %ready.user.id, "✅ Bot connected");

        ctx.set_activity(Some(ActivityData::listening(format!(
            "{} or @mention",
            self.prefix
        ))));
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let Some(&bot_id) = self.bot_id.get() else {
            debug!("Message received before ready, skipping");
            return;
        };

        let inbound = to_inbound(&msg);

        let Some(replies) = self
            .service
            .handle(&inbound, bot_id, || self.discord.start_typing(inbound.channel_id))
            .await
        else {
            return;
        };

        if let Err(e) = self
            .discord
            .reply_in_parts(inbound.channel_id, inbound.id, &replies)
            .await
        {
            error!(
                error = %e,
                channel_id = inbound.channel_id,
                parts = replies.len(),
                "Failed to deliver reply"
            );
            if let Err(e) = self
                .discord
                .reply(inbound.channel_id, inbound.id, DELIVERY_FAILURE_REPLY)
                .await
            {
                error!(error = %e, "Failed to report delivery failure");
            }
        }
    }
}
