//! Share configuration from TOML (`[share]` section)

use imaginario_domain::share::{DEFAULT_APP_URL, DEFAULT_HASHTAGS};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareConfig {
    /// Link appended to shared posts
    pub app_url: String,
    pub hashtags: String,
    /// Directory share cards are written to from the TUI
    pub card_dir: Option<PathBuf>,
}

impl Default for FileShareConfig {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            hashtags: DEFAULT_HASHTAGS.to_string(),
            card_dir: None,
        }
    }
}
