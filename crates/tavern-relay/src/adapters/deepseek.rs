//! DeepSeek chat-completion provider
//!
//! Talks to the OpenAI-compatible `/chat/completions` endpoint.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use tavern::{
    ChatMessage, CompletionOptions, CompletionProvider, CompletionResponse, DomainError,
    TokenUsage,
};

pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
pub const DEFAULT_MODEL: &str = "deepseek-chat";

const SERVICE: &str = "DeepSeek";

/// Completion provider backed by the DeepSeek API
#[derive(Clone)]
pub struct DeepSeekProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl DeepSeekProvider {
    /// Create a provider with the default endpoint and model
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Override the API base URL (proxies, compatible endpoints, tests)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionProvider for DeepSeekProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<CompletionResponse, DomainError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            max_tokens: options.max_tokens,
            stream: false,
        };

        debug!(
            model = %self.model,
            message_count = messages.len(),
            max_tokens = ?options.max_tokens,
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::external(SERVICE, format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| DomainError::external(SERVICE, format!("invalid response: {}", e)))?;

        let choice = payload
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::external(SERVICE, "response has no choices"))?;

        let usage = payload.usage.unwrap_or_default();
        debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            finish_reason = ?choice.finish_reason,
            "Chat completion received"
        );

        Ok(CompletionResponse {
            content: choice.message.content.unwrap_or_default(),
            model: payload.model.unwrap_or_else(|| self.model.clone()),
            usage,
            finish_reason: choice.finish_reason,
        })
    }

    fn provider_name(&self) -> &str {
        "deepseek"
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// ============================================
// Request/Response Types
// ============================================

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    stream: bool,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    model: Option<String>,
    choices: Vec<Choice>,
    usage: Option<TokenUsage>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

fn map_http_error(status: StatusCode, body: &str) -> DomainError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string());

    DomainError::external(
        SERVICE,
        format!("API error ({}): {}", status.as_u16(), message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    fn question() -> Vec<ChatMessage> {
        vec![
            ChatMessage::system("Be concise."),
            ChatMessage::user("What is a d20?"),
        ]
    }

    #[tokio::test]
    async fn test_complete_parses_first_choice() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(Matcher::PartialJson(json!({
                "model": "deepseek-chat",
                "max_tokens": 2000,
                "stream": false,
                "messages": [
                    {"role": "system", "content": "Be concise."},
                    {"role": "user", "content": "What is a d20?"}
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "model": "deepseek-chat",
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "A twenty-sided die."},
                        "finish_reason": "stop"
                    }],
                    "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
                })
                .to_string(),
            )
            .create_async()
            .await;

        let provider = DeepSeekProvider::new("sk-test").with_base_url(format!("{}/", server.url()));
        let response = provider
            .complete(&question(), &CompletionOptions::default())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(response.content, "A twenty-sided die.");
        assert_eq!(response.usage.total_tokens, 17);
        assert_eq!(response.finish_reason.as_deref(), Some("stop"));
    }

    #[tokio::test]
    async fn test_api_error_message_is_surfaced() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Authentication Fails","type":"authentication_error"}}"#)
            .create_async()
            .await;

        let provider = DeepSeekProvider::new("sk-bad").with_base_url(server.url());
        let err = provider
            .complete(&question(), &CompletionOptions::default())
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::ExternalService(_)));
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("Authentication Fails"));
    }

    #[tokio::test]
    async fn test_empty_choices_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = DeepSeekProvider::new("sk-test").with_base_url(server.url());
        let err = provider
            .complete(&question(), &CompletionOptions::default())
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no choices"));
    }

    #[test]
    fn test_request_body_carries_only_supported_fields() {
        let messages = question();
        let request = ChatCompletionRequest {
            model: "deepseek-chat",
            messages: &messages,
            max_tokens: None,
            stream: false,
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "deepseek-chat",
                "messages": [
                    {"role": "system", "content": "Be concise."},
                    {"role": "user", "content": "What is a d20?"}
                ],
                "stream": false
            })
        );
    }

    #[test]
    fn test_plain_text_error_body() {
        let err = map_http_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(
            err.to_string(),
            "External service error: DeepSeek error: API error (502): upstream down"
        );
    }
}
