//! Infrastructure layer for El Imaginario
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod openai;
pub mod share;

// Re-export commonly used types
pub use config::{
    ConfigLoader, CredentialSource, FileConfig, FileLoggingConfig, FilePromptConfig,
    FileProviderConfig, FileRetryConfig, FileShareConfig, FileUiConfig, resolve_api_key,
};
pub use logging::JsonlConversationLogger;
pub use openai::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiChatGateway};
pub use share::{ArboardClipboard, FileCardExporter, SystemUrlOpener};
