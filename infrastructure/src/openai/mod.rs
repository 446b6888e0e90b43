//! OpenAI-compatible chat completion adapter
//!
//! Implements [`CompletionGateway`](imaginario_application::CompletionGateway)
//! against `POST {base_url}/v1/chat/completions`.

mod gateway;
pub mod protocol;

pub use gateway::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, OpenAiChatGateway};
