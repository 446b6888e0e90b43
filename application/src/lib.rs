//! Application layer for El Imaginario
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationParams, ShareSettings};
pub use ports::{
    card_exporter::CardExporterPort,
    clipboard::{ClipboardError, ClipboardPort, NoClipboard},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    llm_gateway::{CompletionGateway, CompletionRequest, GatewayError},
    progress::{NoProgress, ProgressNotifier, RetryAttempt},
    ui_event::UiEvent,
    url_opener::{OpenUrlError, UrlOpenerPort},
};
pub use use_cases::generate_word::{GenerateWordError, GenerateWordUseCase};
pub use use_cases::reflection_controller::{
    ControllerSnapshot, DEFAULT_TRANSITION, ReflectionController,
};
pub use use_cases::retry_executor::{
    RetryableError, execute_with_retry, execute_with_retry_and_progress,
};
pub use use_cases::share_result::{CopyOutcome, ShareError, ShareOutcome, ShareResultUseCase};
