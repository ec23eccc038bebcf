//! Message Entity
//!
//! Represents a message received from a chat platform.

use serde::{Deserialize, Serialize};

/// A message received from a chat platform (Discord)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InboundMessage {
    /// Platform-specific message ID
    pub id: u64,
    /// Channel the message was posted in
    pub channel_id: u64,
    /// Author's platform-specific ID
    pub author_id: u64,
    /// Author's display name
    pub author_name: String,
    /// Whether the author is a bot account
    pub author_is_bot: bool,
    /// Message content
    pub content: String,
    /// IDs of users mentioned in the message
    #[serde(default)]
    pub mentions: Vec<u64>,
}

impl InboundMessage {
    /// Create a new message from a human author with no mentions
    pub fn new(
        id: u64,
        channel_id: u64,
        author_id: u64,
        author_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            channel_id,
            author_id,
            author_name: author_name.into(),
            author_is_bot: false,
            content: content.into(),
            mentions: Vec::new(),
        }
    }

    /// Set the mentioned user IDs
    pub fn with_mentions(mut self, mentions: Vec<u64>) -> Self {
        self.mentions = mentions;
        self
    }

    /// Mark the author as a bot account
    pub fn from_bot(mut self, is_bot: bool) -> Self {
        self.author_is_bot = is_bot;
        self
    }

    /// Whether the given user is mentioned
    pub fn mentions_user(&self, user_id: u64) -> bool {
        self.mentions.contains(&user_id)
    }
}
