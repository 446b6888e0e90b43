//! Clipboard port

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Places text on the system clipboard
pub trait ClipboardPort: Send + Sync {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard that always reports itself as unavailable
pub struct NoClipboard;

impl ClipboardPort for NoClipboard {
    fn copy_text(&self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable("clipboard disabled".to_string()))
    }
}
