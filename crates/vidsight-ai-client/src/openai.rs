//! OpenAI chat-completions provider.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{CompletionError, CompletionResult};
use crate::provider::CompletionProvider;
use crate::types::{ApiErrorBody, ChatRequest, ChatResponse, ChatTurn};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Marker the API puts at the start of context-length error messages.
const CONTEXT_LENGTH_MARKER: &str = "This model's maximum context";

/// Sent in place of a completion when the API returns an empty choice set.
const NO_COMPLETION_CHOICE_FALLBACK: &str = "A?";

/// Extra attempts after a 429, so two requests in total.
const RATE_LIMIT_RETRIES: u32 = 1;

/// Configuration for the OpenAI provider.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key
    pub api_key: String,
    /// Base URL of the completions API
    pub base_url: String,
    /// Model name
    pub model: String,
    /// Request timeout
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> CompletionResult<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            CompletionError::MissingCredentials("OPENAI_API_KEY is not set".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENAI_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Some(secs) = std::env::var("OPENAI_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Completion provider backed by the OpenAI chat-completions API.
pub struct OpenAiProvider {
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> CompletionResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(CompletionError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> CompletionResult<Self> {
        Self::new(OpenAiConfig::from_env()?)
    }

    async fn send_chat(&self, request: &ChatRequest) -> CompletionResult<String> {
        let url = format!("{}/chat/completions", self.config.base_url);

        let mut attempt = 0;
        loop {
            debug!(model = %request.model, attempt, "sending chat completion request");

            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.config.api_key)
                .json(request)
                .send()
                .await?;

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                if attempt < RATE_LIMIT_RETRIES {
                    warn!(attempt, "rate limited, retrying once");
                    attempt += 1;
                    continue;
                }
                return Err(CompletionError::RateLimited);
            }

            if status == StatusCode::BAD_REQUEST {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<ApiErrorBody>(&body)
                    .ok()
                    .and_then(|b| b.error)
                    .map(|e| e.message)
                    .unwrap_or(body);
                if message.starts_with(CONTEXT_LENGTH_MARKER) {
                    warn!("prompt exceeded the model context window");
                    return Err(CompletionError::ContextTooLong);
                }
                return Err(CompletionError::InvalidRequest(message));
            }

            if status == StatusCode::UNAUTHORIZED {
                let body = response.text().await.unwrap_or_default();
                return Err(CompletionError::Unauthorized(body));
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(CompletionError::Api {
                    status: status.as_u16(),
                    body,
                });
            }

            let chat: ChatResponse = response.json().await?;
            return Ok(Self::pick_choice(chat));
        }
    }

    fn pick_choice(response: ChatResponse) -> String {
        match response.choices.into_iter().next() {
            Some(choice) => choice
                .message
                .content
                .unwrap_or_else(|| NO_COMPLETION_CHOICE_FALLBACK.to_string()),
            None => {
                warn!("no completion choices returned, sending placeholder");
                NO_COMPLETION_CHOICE_FALLBACK.to_string()
            }
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, goal: &str, turns: &[ChatTurn]) -> CompletionResult<String> {
        let mut messages = Vec::with_capacity(turns.len() + 1);
        messages.push(ChatTurn::system(goal));
        messages.extend_from_slice(turns);

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages,
            n: 1,
        };

        self.send_chat(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenAiConfig::new("sk-test");
        assert_eq!(config.base_url, OPENAI_API_URL);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.timeout, Duration::from_secs(60));
    }

    #[test]
    fn empty_choice_set_maps_to_placeholder() {
        let response = ChatResponse { choices: vec![] };
        assert_eq!(OpenAiProvider::pick_choice(response), "A?");
    }
}
