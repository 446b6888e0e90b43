//! Exponential backoff policy

use super::ServiceFailure;
use std::time::Duration;

/// Outcome of [`RetryPolicy::decide`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Give up and propagate the last error
    Stop,
    /// Wait for the given delay, then try again
    RetryAfter(Duration),
}

/// Bounded exponential backoff without jitter.
///
/// Attempt `i` (zero-based) that fails transiently is followed by a wait of
/// `base_delay * 2^i`, for at most `max_retries` retries, so the operation
/// runs at most `max_retries + 1` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_delay: Duration) -> Self {
        Self {
            max_retries,
            base_delay,
        }
    }

    /// Policy used for word generation calls: 3 retries, 2 s base delay
    pub fn for_generation() -> Self {
        Self::new(3, Duration::from_millis(2000))
    }

    /// Upper bound on invocations of the operation
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Backoff before the attempt following `attempt`
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.checked_pow(attempt).unwrap_or(u32::MAX);
        self.base_delay.saturating_mul(factor)
    }

    /// Decide what to do after `attempt` (zero-based) failed with `failure`.
    pub fn decide(&self, failure: &ServiceFailure, attempt: u32) -> RetryDecision {
        if failure.is_quota_exhausted() {
            return RetryDecision::Stop;
        }
        if attempt < self.max_retries && failure.is_transient() {
            return RetryDecision::RetryAfter(self.delay_for(attempt));
        }
        RetryDecision::Stop
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server_error() -> ServiceFailure {
        ServiceFailure::new(Some(500), "Internal server error")
    }

    #[test]
    fn test_defaults() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_retries, 3);
        assert_eq!(policy.base_delay, Duration::from_millis(1000));
        assert_eq!(policy.max_attempts(), 4);
    }

    #[test]
    fn test_delay_doubles() {
        let policy = RetryPolicy::for_generation();
        assert_eq!(policy.delay_for(0), Duration::from_millis(2000));
        assert_eq!(policy.delay_for(1), Duration::from_millis(4000));
        assert_eq!(policy.delay_for(2), Duration::from_millis(8000));
    }

    #[test]
    fn test_delay_saturates() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(64), Duration::from_millis(1000).saturating_mul(u32::MAX));
    }

    #[test]
    fn test_transient_failures_retry_until_exhausted() {
        let policy = RetryPolicy::default();
        let failure = server_error();
        assert_eq!(
            policy.decide(&failure, 0),
            RetryDecision::RetryAfter(Duration::from_millis(1000))
        );
        assert_eq!(
            policy.decide(&failure, 2),
            RetryDecision::RetryAfter(Duration::from_millis(4000))
        );
        assert_eq!(policy.decide(&failure, 3), RetryDecision::Stop);
    }

    #[test]
    fn test_quota_stops_immediately() {
        let policy = RetryPolicy::default();
        let failure = ServiceFailure::new(Some(429), "You exceeded your current quota");
        assert_eq!(policy.decide(&failure, 0), RetryDecision::Stop);
    }

    #[test]
    fn test_plain_rate_limit_retries() {
        let policy = RetryPolicy::default();
        let failure = ServiceFailure::new(Some(429), "Rate limit reached for requests");
        assert!(matches!(policy.decide(&failure, 0), RetryDecision::RetryAfter(_)));
    }

    #[test]
    fn test_client_errors_do_not_retry() {
        let policy = RetryPolicy::default();
        assert_eq!(
            policy.decide(&ServiceFailure::new(Some(400), "bad request"), 0),
            RetryDecision::Stop
        );
        assert_eq!(
            policy.decide(&ServiceFailure::transport("connection refused"), 0),
            RetryDecision::Stop
        );
    }

    #[test]
    fn test_zero_retries_never_retries() {
        let policy = RetryPolicy::new(0, Duration::from_millis(10));
        assert_eq!(policy.decide(&server_error(), 0), RetryDecision::Stop);
        assert_eq!(policy.max_attempts(), 1);
    }
}
