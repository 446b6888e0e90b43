//! Generation domain.
//!
//! - [`GenerationResult`]: the invented word, its definition and the reflection
//! - [`parsing`]: turning a model reply into a [`GenerationResult`]
//! - [`GenerationErrorKind`]: user-facing error taxonomy

mod error_kind;
pub mod parsing;
mod result;

pub use error_kind::{GenerationErrorKind, classify_failure};
pub use parsing::{ResponseParseError, parse_generation_response};
pub use result::GenerationResult;
