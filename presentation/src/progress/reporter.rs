//! Progress reporting for a generation call

use colored::Colorize;
use imaginario_application::ports::progress::{ProgressNotifier, RetryAttempt};
use imaginario_domain::ValidWords;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Spinner shown while the model names the feeling
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn retry_message(attempt: &RetryAttempt) -> String {
        format!(
            "Reintentando ({}/{}) en {}s...",
            attempt.retry_number(),
            attempt.max_retries,
            attempt.delay.as_secs_f32()
        )
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_request_start(&self, words: &ValidWords) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(words.as_slice().join(" · "));
        pb.set_message("Nombrándolo...");
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_retry(&self, attempt: &RetryAttempt) {
        if let Ok(slot) = self.bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::retry_message(attempt).yellow().to_string());
        }
    }

    fn on_complete(&self, _success: bool) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }
}

/// Plain line-based progress on stderr (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_request_start(&self, words: &ValidWords) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            "Nombrándolo...".bold(),
            words.as_slice().join(", ")
        );
    }

    fn on_retry(&self, attempt: &RetryAttempt) {
        eprintln!("  {} {}", "!".yellow(), ProgressReporter::retry_message(attempt));
    }

    fn on_complete(&self, success: bool) {
        if success {
            eprintln!("  {} listo", "v".green());
        } else {
            eprintln!("  {} sin respuesta", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imaginario_domain::ServiceFailure;

    #[test]
    fn test_retry_message() {
        let attempt = RetryAttempt {
            attempt: 0,
            max_retries: 3,
            delay: Duration::from_secs(2),
            last_error: ServiceFailure::new(Some(503), "unavailable"),
        };
        assert_eq!(
            ProgressReporter::retry_message(&attempt),
            "Reintentando (1/3) en 2s..."
        );
    }

    #[test]
    fn test_complete_without_start_is_noop() {
        let reporter = ProgressReporter::new();
        reporter.on_complete(false);
        assert!(reporter.bar.lock().unwrap().is_none());
    }
}
