//! Prompt configuration from TOML (`[prompt]` section)

use imaginario_domain::{ConfigIssue, ConfigIssueCode, PromptVariant};
use serde::{Deserialize, Serialize};

/// Raw prompt configuration. The variant is kept as a string so an unknown
/// value is reported by validation instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePromptConfig {
    /// "basic", "neutral" or "condensed"
    pub variant: String,
}

impl Default for FilePromptConfig {
    fn default() -> Self {
        Self {
            variant: PromptVariant::default().as_str().to_string(),
        }
    }
}

impl FilePromptConfig {
    /// Parse the variant, falling back to the default with an issue
    pub fn parse_variant(&self) -> (PromptVariant, Option<ConfigIssue>) {
        match self.variant.parse::<PromptVariant>() {
            Ok(variant) => (variant, None),
            Err(_) => (
                PromptVariant::default(),
                Some(ConfigIssue::warning(
                    ConfigIssueCode::UnknownPromptVariant,
                    format!(
                        "prompt.variant: unknown value '{}', falling back to '{}'",
                        self.variant,
                        PromptVariant::default()
                    ),
                )),
            ),
        }
    }
}
