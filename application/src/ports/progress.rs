//! Progress notification port
//!
//! Defines the interface for reporting progress during a generation call.

use imaginario_domain::{ServiceFailure, ValidWords};
use std::time::Duration;

/// State of a request attempt that is about to be retried
#[derive(Debug, Clone, PartialEq)]
pub struct RetryAttempt {
    /// Zero-based index of the attempt that failed
    pub attempt: u32,
    pub max_retries: u32,
    /// Wait before the next attempt
    pub delay: Duration,
    pub last_error: ServiceFailure,
}

impl RetryAttempt {
    /// One-based number of the upcoming retry
    pub fn retry_number(&self) -> u32 {
        self.attempt + 1
    }
}

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, TUI status line, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called once before the first attempt
    fn on_request_start(&self, words: &ValidWords);

    /// Called before waiting for a retry
    fn on_retry(&self, attempt: &RetryAttempt);

    /// Called when the call finished, successfully or not
    fn on_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_request_start(&self, _words: &ValidWords) {}
    fn on_retry(&self, _attempt: &RetryAttempt) {}
    fn on_complete(&self, _success: bool) {}
}
