//! TUI configuration from TOML (`[ui]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileUiConfig {
    /// Length of the view change between express and reflection
    pub transition_ms: u64,
    /// How long the "copied" confirmation stays visible
    pub copy_feedback_secs: u64,
}

impl Default for FileUiConfig {
    fn default() -> Self {
        Self {
            transition_ms: 150,
            copy_feedback_secs: 3,
        }
    }
}
