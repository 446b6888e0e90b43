//! Prompt domain
//!
//! Templates for the single generation prompt. The wording is a replaceable
//! template; what matters is that each variant embeds the three words
//! verbatim and asks for a strict JSON object with `word`, `definition`
//! and `advice`.

mod template;

pub use template::{PromptTemplate, PromptVariant};
