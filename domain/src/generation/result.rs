//! GenerationResult value object

use serde::Serialize;

/// An invented emotional word with its definition and reflection (Value Object)
///
/// Only built through [`parse_generation_response`](super::parse_generation_response)
/// or [`GenerationResult::new`], both of which guarantee that every field is
/// non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationResult {
    word: String,
    definition: String,
    advice: String,
}

impl GenerationResult {
    /// Create a result, returning `None` if any field is blank.
    ///
    /// Fields are stored trimmed.
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        advice: impl Into<String>,
    ) -> Option<Self> {
        let word = word.into().trim().to_string();
        let definition = definition.into().trim().to_string();
        let advice = advice.into().trim().to_string();
        if word.is_empty() || definition.is_empty() || advice.is_empty() {
            return None;
        }
        Some(Self {
            word,
            definition,
            advice,
        })
    }

    /// The invented word (headline)
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Neutral description of the emotional state
    pub fn definition(&self) -> &str {
        &self.definition
    }

    /// Supportive reflection
    pub fn advice(&self) -> &str {
        &self.advice
    }

    /// Whether the definition mentions the invented word (case-insensitive).
    ///
    /// Prompt variants disagree on whether it should; this is reported, not
    /// enforced.
    pub fn definition_mentions_word(&self) -> bool {
        self.definition
            .to_lowercase()
            .contains(&self.word.to_lowercase())
    }

    /// Whether the reflection mentions the invented word (case-insensitive)
    pub fn advice_mentions_word(&self) -> bool {
        self.advice.to_lowercase().contains(&self.word.to_lowercase())
    }
}
