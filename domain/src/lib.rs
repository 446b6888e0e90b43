//! Domain layer for El Imaginario
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Words and results
//!
//! A user names a feeling with three words ([`WordTriple`]). A language model
//! answers with an invented word, a neutral definition and a supportive
//! reflection ([`GenerationResult`]).
//!
//! ## Retry
//!
//! Calls to the model are retried with exponential backoff on rate limits and
//! server errors, except when the provider reports an exhausted quota
//! ([`RetryPolicy`], [`ServiceFailure`]).
//!
//! ## Sharing
//!
//! A result can be turned into share text, platform links and a text card
//! ([`ShareMessage`], [`ShareTarget`], [`ShareCard`]).

pub mod config;
pub mod core;
pub mod flow;
pub mod generation;
pub mod prompt;
pub mod retry;
pub mod share;
pub mod words;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use core::error::DomainError;
pub use flow::ViewState;
pub use generation::{
    GenerationErrorKind, GenerationResult, ResponseParseError, classify_failure,
    parse_generation_response,
};
pub use prompt::{PromptTemplate, PromptVariant};
pub use retry::{RetryDecision, RetryPolicy, ServiceFailure};
pub use share::{ShareCard, ShareMessage, ShareTarget};
pub use words::{ValidWords, WORD_COUNT, WordTriple};
