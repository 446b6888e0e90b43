//! ServiceFailure value object

use serde::{Deserialize, Serialize};

/// HTTP status used by the service for rate limiting and quota exhaustion
pub const TOO_MANY_REQUESTS: u16 = 429;

/// A failed call to the remote service, reduced to what retry and error
/// classification need: an optional status code and a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceFailure {
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceFailure {
    pub fn new(status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// A failure without an HTTP status (transport level)
    pub fn transport(message: impl Into<String>) -> Self {
        Self::new(None, message)
    }

    /// Status 429
    pub fn is_rate_limited(&self) -> bool {
        self.status == Some(TOO_MANY_REQUESTS)
    }

    /// Status 5xx or above
    pub fn is_server_error(&self) -> bool {
        self.status.is_some_and(|s| s >= 500)
    }

    /// Whether the message blames the account allowance rather than load
    pub fn mentions_quota(&self) -> bool {
        let lower = self.message.to_lowercase();
        lower.contains("quota") || lower.contains("billing")
    }

    /// 429 caused by quota/billing exhaustion: retrying cannot help
    pub fn is_quota_exhausted(&self) -> bool {
        self.is_rate_limited() && self.mentions_quota()
    }

    /// Rate limiting or server-side failure
    pub fn is_transient(&self) -> bool {
        self.is_rate_limited() || self.is_server_error()
    }
}

impl std::fmt::Display for ServiceFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.message, status),
            None => write!(f, "{}", self.message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_requires_429() {
        let quota = ServiceFailure::new(Some(429), "You exceeded your current quota");
        assert!(quota.is_quota_exhausted());
        assert!(quota.is_transient());

        let not_429 = ServiceFailure::new(Some(400), "quota");
        assert!(!not_429.is_quota_exhausted());
    }

    #[test]
    fn test_billing_counts_as_quota() {
        let failure = ServiceFailure::new(Some(429), "Check your plan and BILLING details");
        assert!(failure.is_quota_exhausted());
    }

    #[test]
    fn test_server_error_range() {
        assert!(ServiceFailure::new(Some(500), "x").is_server_error());
        assert!(ServiceFailure::new(Some(503), "x").is_server_error());
        assert!(!ServiceFailure::new(Some(499), "x").is_server_error());
        assert!(!ServiceFailure::transport("connection refused").is_transient());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ServiceFailure::new(Some(500), "boom").to_string(),
            "boom (status 500)"
        );
        assert_eq!(ServiceFailure::transport("dns").to_string(), "dns");
    }
}
