//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod logging;
mod prompt;
mod provider;
mod retry;
mod share;
mod ui;

pub use logging::FileLoggingConfig;
pub use prompt::FilePromptConfig;
pub use provider::FileProviderConfig;
pub use retry::FileRetryConfig;
pub use share::FileShareConfig;
pub use ui::FileUiConfig;

use imaginario_application::{GenerationParams, ShareSettings};
use imaginario_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound on retries before validation warns about very long waits
const MAX_SENSIBLE_RETRIES: u32 = 6;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Chat completion endpoint and sampling
    pub provider: FileProviderConfig,
    /// Backoff for failed requests
    pub retry: FileRetryConfig,
    /// Prompt template selection
    pub prompt: FilePromptConfig,
    /// Share texts
    pub share: FileShareConfig,
    /// TUI timings
    pub ui: FileUiConfig,
    /// Log destinations
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        let provider = &self.provider;

        if provider.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyModel,
                "provider.model: must not be empty",
            ));
        }
        if provider.base_url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyBaseUrl,
                "provider.base_url: must not be empty",
            ));
        }
        if provider.max_tokens == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroMaxTokens,
                "provider.max_tokens: must be greater than 0",
            ));
        }
        if !(0.0..=2.0).contains(&provider.temperature) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::TemperatureOutOfRange,
                format!(
                    "provider.temperature: {} is outside 0.0..=2.0 and will likely be rejected",
                    provider.temperature
                ),
            ));
        }
        if provider.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroTimeout,
                "provider.timeout_secs: must be greater than 0",
            ));
        }

        if self.retry.max_retries > 0 && self.retry.base_delay_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ZeroBaseDelay,
                "retry.base_delay_ms: 0 retries immediately without backoff",
            ));
        }
        if self.retry.max_retries > MAX_SENSIBLE_RETRIES {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::ExcessiveRetries,
                format!(
                    "retry.max_retries: {} retries can wait {}s in total",
                    self.retry.max_retries,
                    total_backoff_secs(&self.retry)
                ),
            ));
        }

        issues.extend(self.prompt.parse_variant().1);
        issues
    }

    /// Generation parameters with the given resolved credential
    pub fn to_generation_params(&self, api_key: Option<String>) -> GenerationParams {
        let mut params = GenerationParams::default()
            .with_model(self.provider.model.clone())
            .with_max_tokens(self.provider.max_tokens)
            .with_temperature(self.provider.temperature)
            .with_retry(self.retry.to_policy())
            .with_prompt_variant(self.prompt.parse_variant().0);
        params.api_key = api_key;
        params
    }

    pub fn to_share_settings(&self) -> ShareSettings {
        ShareSettings {
            app_url: self.share.app_url.clone(),
            hashtags: self.share.hashtags.clone(),
            card_dir: self
                .share
                .card_dir
                .clone()
                .unwrap_or_else(|| PathBuf::from(".")),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.provider.timeout_secs)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.ui.transition_ms)
    }

    pub fn copy_feedback(&self) -> Duration {
        Duration::from_secs(self.ui.copy_feedback_secs)
    }

    /// Render the effective configuration as TOML with the API key masked
    pub fn to_redacted_toml(&self) -> Result<String, toml::ser::Error> {
        let mut shown = self.clone();
        if shown.provider.api_key.is_some() {
            shown.provider.api_key = Some("********".to_string());
        }
        toml::to_string_pretty(&shown)
    }
}

/// Delays stop growing once the doubling factor saturates at attempt 32
const SATURATED_ATTEMPT: u32 = 32;

fn total_backoff_secs(retry: &FileRetryConfig) -> u64 {
    let policy = retry.to_policy();
    let growing = policy.max_retries.min(SATURATED_ATTEMPT);
    let head = (0..growing)
        .map(|i| policy.delay_for(i).as_secs())
        .fold(0u64, u64::saturating_add);
    let tail = u64::from(policy.max_retries - growing)
        .saturating_mul(policy.delay_for(SATURATED_ATTEMPT).as_secs());
    head.saturating_add(tail)
}
