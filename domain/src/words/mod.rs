//! Word collection domain.
//!
//! - [`WordTriple`]: the three words the user is editing
//! - [`ValidWords`]: a triple that passed submission checks
//! - [`validation`]: per-word predicates

mod triple;
pub mod validation;

pub use triple::{ValidWords, WORD_COUNT, WordTriple};
