//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible chat completion endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; requests go to `{base_url}/v1/chat/completions`.
    pub base_url: String,
    /// Chat model identifier.
    pub model: String,
    /// Environment variable holding the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the environment variable).
    pub api_key: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            model: "gpt-3.5-turbo".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            max_tokens: 500,
            temperature: 0.8,
            timeout_secs: 60,
        }
    }
}
