//! WordTriple value object

use super::validation::{MAX_WORD_LENGTH, is_valid_word};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Number of words the user describes their state with.
pub const WORD_COUNT: usize = 3;

/// The three words being edited (Value Object)
///
/// Individual slots may be blank while the user is typing; the triple only
/// has to be complete at submission time, see [`WordTriple::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTriple {
    words: [String; WORD_COUNT],
}

impl WordTriple {
    /// Create a triple from three words
    pub fn new(first: impl Into<String>, second: impl Into<String>, third: impl Into<String>) -> Self {
        Self {
            words: [first.into(), second.into(), third.into()],
        }
    }

    /// An empty triple (initial and post-reset state)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a triple from an arbitrary list, failing unless it has exactly
    /// three entries.
    pub fn try_from_vec(words: Vec<String>) -> Result<Self, DomainError> {
        let count = words.len();
        let words: [String; WORD_COUNT] = words
            .try_into()
            .map_err(|_| DomainError::WrongWordCount(count))?;
        Ok(Self { words })
    }

    /// Get all three words in order
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    /// Get the word at `index`, if in range
    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    /// Return a new triple with the slot at `index` replaced.
    ///
    /// Out-of-range indexes leave the triple unchanged.
    pub fn with_word(&self, index: usize, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.words.get_mut(index) {
            *slot = value.into();
        }
        next
    }

    /// Whether all three words have content after trimming
    pub fn is_complete(&self) -> bool {
        self.words.iter().all(|w| is_valid_word(w))
    }

    /// Whether all slots are blank
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|w| w.is_empty())
    }

    /// Check the triple for submission.
    ///
    /// Positions in errors are 1-based, matching what the user sees.
    pub fn validate(&self) -> Result<ValidWords, DomainError> {
        for (i, word) in self.words.iter().enumerate() {
            if !is_valid_word(word) {
                return Err(DomainError::EmptyWord { position: i + 1 });
            }
            if word.chars().count() > MAX_WORD_LENGTH {
                return Err(DomainError::WordTooLong {
                    position: i + 1,
                    max: MAX_WORD_LENGTH,
                });
            }
        }
        Ok(ValidWords {
            words: self.words.clone(),
        })
    }
}

impl From<[&str; WORD_COUNT]> for WordTriple {
    fn from(words: [&str; WORD_COUNT]) -> Self {
        Self::new(words[0], words[1], words[2])
    }
}

/// A triple that passed [`WordTriple::validate`].
///
/// Words are kept verbatim (not trimmed) because the prompt embeds exactly
/// what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidWords {
    words: [String; WORD_COUNT],
}

impl ValidWords {
    pub fn as_slice(&self) -> &[String] {
        &self.words
    }

    pub fn first(&self) -> &str {
        &self.words[0]
    }

    pub fn second(&self) -> &str {
        &self.words[1]
    }

    pub fn third(&self) -> &str {
        &self.words[2]
    }
}

impl std::fmt::Display for ValidWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.words[0], self.words[1], self.words[2])
    }
}
