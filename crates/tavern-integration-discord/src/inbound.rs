//! Conversion from serenity events to domain types

use serenity::model::channel::Message as SerenityMessage;
use serenity::model::user::User;
use tavern::InboundMessage;

/// Name to show for a user: global display name, falling back to the username
pub fn display_name(user: &User) -> String {
    user.global_name
        .clone()
        .unwrap_or_else(|| user.name.clone())
}

/// Convert a serenity message to a domain message
pub fn to_inbound(msg: &SerenityMessage) -> InboundMessage {
    InboundMessage::new(
        msg.id.get(),
        msg.channel_id.get(),
        msg.author.id.get(),
        display_name(&msg.author),
        msg.content.clone(),
    )
    .from_bot(msg.author.bot)
    .with_mentions(msg.mentions.iter().map(|user| user.id.get()).collect())
}
