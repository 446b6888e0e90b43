//! Share settings

use imaginario_domain::share::{DEFAULT_APP_URL, DEFAULT_HASHTAGS};
use std::path::PathBuf;

/// How results are shared: what the posts link to and which hashtags they carry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareSettings {
    pub app_url: String,
    pub hashtags: String,
    /// Where share cards land when no directory is given
    pub card_dir: PathBuf,
}

impl Default for ShareSettings {
    fn default() -> Self {
        Self {
            app_url: DEFAULT_APP_URL.to_string(),
            hashtags: DEFAULT_HASHTAGS.to_string(),
            card_dir: PathBuf::from("."),
        }
    }
}
