//! URL opener port

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenUrlError {
    #[error("No program available to open URLs")]
    NoOpener,

    #[error("Failed to open {url}: {message}")]
    LaunchFailed { url: String, message: String },
}

/// Opens a URL in the user's browser.
///
/// Opening is fire-and-forget: success means the opener was launched, not
/// that the page loaded.
pub trait UrlOpenerPort: Send + Sync {
    fn open(&self, url: &str) -> Result<(), OpenUrlError>;
}
