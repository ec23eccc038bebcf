//! Relay Application Service (Use Case)
//!
//! Turns a directed chat message into the reply messages to send back.

use std::sync::Arc;
use tracing::{info, warn};

use tavern::{
    compose_reply, resolve_addressing, Addressing, CompletionOptions, CompletionProvider,
    DomainError, InboundMessage, EMPTY_QUERY_PROMPT,
};

/// Reply sent when the completion API call fails
pub const API_FAILURE_REPLY: &str =
    "❌ An error occurred while processing your request with the API.";

/// Settings the relay needs per message
#[derive(Debug, Clone)]
pub struct RelaySettings {
    pub prefix: String,
    pub system_prompt: String,
    pub max_tokens: u32,
    pub max_message_length: usize,
}

/// Application service relaying questions to a completion provider
pub struct RelayService<P: CompletionProvider> {
    provider: Arc<P>,
    settings: RelaySettings,
}

impl<P: CompletionProvider> RelayService<P> {
    pub fn new(provider: Arc<P>, settings: RelaySettings) -> Self {
        Self { provider, settings }
    }

    /// Produce the reply messages for `message`
    ///
    /// Returns `None` for messages not directed at the bot. The first entry
    /// is meant as a reply to the triggering message, the rest as follow-ups.
    /// `on_query` runs only when a provider call is about to be made; its
    /// result (e.g. a typing indicator) is held until the answer is ready.
    pub async fn handle<G>(
        &self,
        message: &InboundMessage,
        bot_id: u64,
        on_query: impl FnOnce() -> G,
    ) -> Option<Vec<String>> {
        match resolve_addressing(message, bot_id, &self.settings.prefix) {
            Addressing::Ignored => None,
            Addressing::EmptyQuery => Some(vec![EMPTY_QUERY_PROMPT.to_string()]),
            Addressing::Query(question) => {
                let _guard = on_query();
                Some(self.answer(message, &question).await)
            }
        }
    }

    async fn answer(&self, message: &InboundMessage, question: &str) -> Vec<String> {
        info!(
            author = %message.author_name,
            channel_id = message.channel_id,
            question = %preview(question),
            "Question received"
        );

        match self.ask(question).await {
            Ok(answer) => {
                info!(answer = %preview(&answer), "Answer generated");
                compose_reply(&answer, self.settings.max_message_length)
            }
            Err(e) => {
                warn!(
                    error = %e,
                    provider = self.provider.provider_name(),
                    model = self.provider.model_id(),
                    "Completion request failed"
                );
                vec![API_FAILURE_REPLY.to_string()]
            }
        }
    }

    async fn ask(&self, question: &str) -> Result<String, DomainError> {
        let options = CompletionOptions {
            max_tokens: Some(self.settings.max_tokens),
        };

        let answer = self
            .provider
            .ask(&self.settings.system_prompt, question, &options)
            .await?;

        if answer.trim().is_empty() {
            return Err(DomainError::ExternalService(
                "completion returned an empty answer".to_string(),
            ));
        }

        Ok(answer)
    }
}

/// First 50 characters, for logs
fn preview(text: &str) -> String {
    match text.char_indices().nth(50) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
