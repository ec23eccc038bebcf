//! Addressing - decides whether a message is directed at the bot
//! and extracts the question from it.

use crate::domain::entities::InboundMessage;

/// Prompt sent back when a directed message carries no question.
pub const EMPTY_QUERY_PROMPT: &str =
    "Hi! How can I help? Please ask your question after the mention or command.";

/// How an inbound message relates to the bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addressing {
    /// Not directed at the bot, or sent by a bot
    Ignored,
    /// Directed at the bot without any question text
    EmptyQuery,
    /// Directed at the bot with the extracted question
    Query(String),
}

/// Resolve addressing for `message`.
///
/// A mention of `bot_id` takes precedence over the command prefix. Both the
/// plain (`<@id>`) and nickname (`<@!id>`) mention forms are stripped.
pub fn resolve_addressing(message: &InboundMessage, bot_id: u64, prefix: &str) -> Addressing {
    if message.author_is_bot || message.author_id == bot_id {
        return Addressing::Ignored;
    }

    let query = if message.mentions_user(bot_id) {
        strip_mentions(&message.content, bot_id)
    } else if let Some(rest) = strip_command(&message.content, prefix) {
        rest.trim().to_string()
    } else {
        return Addressing::Ignored;
    };

    if query.is_empty() {
        Addressing::EmptyQuery
    } else {
        Addressing::Query(query)
    }
}

fn strip_mentions(content: &str, bot_id: u64) -> String {
    content
        .replace(&format!("<@!{}>", bot_id), "")
        .replace(&format!("<@{}>", bot_id), "")
        .trim()
        .to_string()
}

/// Text after `prefix` when the message is the bare prefix or the prefix
/// followed by whitespace.
fn strip_command<'a>(content: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = content.strip_prefix(prefix)?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: u64 = 42;
    const PREFIX: &str = "!ai";

    fn message(content: &str) -> InboundMessage {
        InboundMessage::new(1, 10, 7, "ana", content)
    }

    #[test]
    fn test_mention_extracts_query() {
        let msg = message("<@42> what is a kobold?").with_mentions(vec![BOT]);
        assert_eq!(
            resolve_addressing(&msg, BOT, PREFIX),
            Addressing::Query("what is a kobold?".to_string())
        );
    }

    #[test]
    fn test_mention_anywhere_and_nickname_form() {
        let msg = message("hey <@!42> tell me a joke <@42>").with_mentions(vec![BOT]);
        assert_eq!(
            resolve_addressing(&msg, BOT, PREFIX),
            Addressing::Query("hey  tell me a joke".to_string())
        );
    }

    #[test]
    fn test_mention_only_is_empty_query() {
        let msg = message("<@42>").with_mentions(vec![BOT]);
        assert_eq!(resolve_addressing(&msg, BOT, PREFIX), Addressing::EmptyQuery);
    }

    #[test]
    fn test_prefix_extracts_query() {
        assert_eq!(
            resolve_addressing(&message("!ai   explain initiative  "), BOT, PREFIX),
            Addressing::Query("explain initiative".to_string())
        );
    }

    #[test]
    fn test_bare_prefix_is_empty_query() {
        assert_eq!(resolve_addressing(&message("!ai"), BOT, PREFIX), Addressing::EmptyQuery);
        assert_eq!(resolve_addressing(&message("!ai   "), BOT, PREFIX), Addressing::EmptyQuery);
    }

    #[test]
    fn test_prefix_must_be_a_whole_word() {
        assert_eq!(resolve_addressing(&message("!aim high"), BOT, PREFIX), Addressing::Ignored);
        assert_eq!(
            resolve_addressing(&message("say !ai hello"), BOT, PREFIX),
            Addressing::Ignored
        );
    }

    #[test]
    fn test_prefix_must_open_the_message() {
        assert_eq!(resolve_addressing(&message("   !ai hi"), BOT, PREFIX), Addressing::Ignored);
        assert_eq!(resolve_addressing(&message("\n!ai hi"), BOT, PREFIX), Addressing::Ignored);
    }

    #[test]
    fn test_other_mentions_are_ignored() {
        let msg = message("<@99> hello").with_mentions(vec![99]);
        assert_eq!(resolve_addressing(&msg, BOT, PREFIX), Addressing::Ignored);
    }

    #[test]
    fn test_bots_are_ignored() {
        let from_bot = message("!ai hello").from_bot(true);
        assert_eq!(resolve_addressing(&from_bot, BOT, PREFIX), Addressing::Ignored);

        let mut from_self = message("!ai hello");
        from_self.author_id = BOT;
        assert_eq!(resolve_addressing(&from_self, BOT, PREFIX), Addressing::Ignored);
    }
}
