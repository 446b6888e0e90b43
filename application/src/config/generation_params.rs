//! Generation parameters: use case call control.
//!
//! [`GenerationParams`] groups what
//! [`GenerateWordUseCase`](crate::use_cases::generate_word::GenerateWordUseCase)
//! needs for each request. The credential is resolved by the caller; the
//! use case only checks that one is present.

use imaginario_domain::{PromptVariant, RetryPolicy};

/// Default chat model
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_MAX_TOKENS: u32 = 500;
pub const DEFAULT_TEMPERATURE: f32 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationParams {
    /// Resolved API credential; `None` fails every request up front
    pub api_key: Option<String>,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
    pub retry: RetryPolicy,
    pub prompt_variant: PromptVariant,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            retry: RetryPolicy::for_generation(),
            prompt_variant: PromptVariant::default(),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn with_prompt_variant(mut self, variant: PromptVariant) -> Self {
        self.prompt_variant = variant;
        self
    }

    /// The credential, ignoring blank values
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
    }
}
