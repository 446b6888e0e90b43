//! Logging configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL transcript of prompts and replies; disabled when unset
    pub conversation_log: Option<PathBuf>,
    /// Diagnostic log file; defaults to the data dir in TUI mode
    pub log_file: Option<PathBuf>,
}
