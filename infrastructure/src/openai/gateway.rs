//! OpenAI-compatible implementation of the CompletionGateway port

use super::protocol::{ChatCompletionRequest, ChatCompletionResponse, Message, fold_error_body};
use async_trait::async_trait;
use imaginario_application::{CompletionGateway, CompletionRequest, GatewayError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Sends single-message chat completions over HTTPS with bearer auth.
pub struct OpenAiChatGateway {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl OpenAiChatGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the whole-request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

impl Default for OpenAiChatGateway {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() || e.is_request() {
        GatewayError::ConnectionError(e.to_string())
    } else {
        GatewayError::Other(e.to_string())
    }
}

#[async_trait]
impl CompletionGateway for OpenAiChatGateway {
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, GatewayError> {
        let body = ChatCompletionRequest {
            model: &request.model,
            messages: vec![Message::user(&request.prompt)],
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        };

        debug!("POST {} (model: {})", self.endpoint(), request.model);
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&request.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = fold_error_body(status.as_u16(), &text);
            warn!("Chat completion failed ({}): {}", status, message);
            return Err(GatewayError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))?;
        Ok(parsed.first_content())
    }
}
