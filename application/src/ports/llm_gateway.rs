//! Completion gateway port
//!
//! Defines the interface for sending a prompt to a chat-completion service.

use async_trait::async_trait;
use imaginario_domain::ServiceFailure;
use thiserror::Error;

/// Errors that can occur during gateway operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request timed out")]
    Timeout,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl GatewayError {
    /// Reduce to the status + message pair used for retry and classification
    pub fn failure(&self) -> ServiceFailure {
        match self {
            GatewayError::Api { status, message } => ServiceFailure::new(Some(*status), message),
            other => ServiceFailure::transport(other.to_string()),
        }
    }
}

/// A single-message chat completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    /// Sent as the one user-role message
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub api_key: String,
}

/// Gateway for chat completions
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionGateway: Send + Sync {
    /// Send the request and return the content of the first choice.
    ///
    /// `Ok(None)` means the service answered but produced no content.
    async fn complete(&self, request: &CompletionRequest) -> Result<Option<String>, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_keeps_status() {
        let err = GatewayError::Api {
            status: 429,
            message: "Rate limit reached".to_string(),
        };
        let failure = err.failure();
        assert_eq!(failure.status, Some(429));
        assert_eq!(failure.message, "Rate limit reached");
    }

    #[test]
    fn test_transport_errors_have_no_status() {
        let failure = GatewayError::Timeout.failure();
        assert_eq!(failure.status, None);
        assert!(failure.message.contains("timed out"));

        let failure = GatewayError::ConnectionError("dns lookup failed".into()).failure();
        assert!(failure.message.starts_with("Connection error"));
    }
}
