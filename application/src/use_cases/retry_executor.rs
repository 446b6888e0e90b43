//! Retry-wrapped request executor
//!
//! Runs an async operation, retrying with exponential backoff while
//! [`RetryPolicy::decide`] says so. The waiting is a `tokio::time::sleep`,
//! so callers on a paused test clock do not actually wait.

use crate::ports::llm_gateway::GatewayError;
use crate::ports::progress::{NoProgress, ProgressNotifier, RetryAttempt};
use imaginario_domain::{RetryDecision, RetryPolicy, ServiceFailure};
use std::future::Future;
use tracing::{debug, warn};

/// Errors the executor can classify
pub trait RetryableError {
    fn service_failure(&self) -> ServiceFailure;
}

impl RetryableError for GatewayError {
    fn service_failure(&self) -> ServiceFailure {
        self.failure()
    }
}

impl RetryableError for ServiceFailure {
    fn service_failure(&self) -> ServiceFailure {
        self.clone()
    }
}

/// Run `operation` under `policy` without progress reporting
pub async fn execute_with_retry<T, E, F, Fut>(policy: &RetryPolicy, operation: F) -> Result<T, E>
where
    E: RetryableError,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    execute_with_retry_and_progress(policy, &NoProgress, operation).await
}

/// Run `operation` under `policy`, reporting each scheduled retry.
///
/// The operation runs at most `policy.max_attempts()` times. The last error
/// is returned unchanged when the policy stops.
pub async fn execute_with_retry_and_progress<T, E, F, Fut>(
    policy: &RetryPolicy,
    progress: &dyn ProgressNotifier,
    mut operation: F,
) -> Result<T, E>
where
    E: RetryableError,
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
{
    let mut attempt: u32 = 0;
    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(e) => e,
        };

        let failure = error.service_failure();
        match policy.decide(&failure, attempt) {
            RetryDecision::Stop => {
                if failure.is_quota_exhausted() {
                    debug!("Quota exhausted, not retrying: {}", failure);
                }
                return Err(error);
            }
            RetryDecision::RetryAfter(delay) => {
                warn!(
                    "Attempt {} of {} failed ({}), retrying in {}ms",
                    attempt + 1,
                    policy.max_attempts(),
                    failure,
                    delay.as_millis()
                );
                progress.on_retry(&RetryAttempt {
                    attempt,
                    max_retries: policy.max_retries,
                    delay,
                    last_error: failure,
                });
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
        }
    }
}
