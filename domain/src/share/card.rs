//! Share card
//!
//! A compact rendering of a result meant to be saved or pasted as an image
//! caption: the word, a shortened definition and the hashtags.

use super::message::DEFAULT_HASHTAGS;
use crate::core::string::{slugify, truncate};
use crate::generation::GenerationResult;

/// Maximum characters of the definition shown on a card
pub const CARD_DEFINITION_LIMIT: usize = 120;

const FILE_PREFIX: &str = "mi-palabra-emocional";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    word: String,
    definition: String,
    hashtags: String,
}

impl ShareCard {
    pub fn new(result: &GenerationResult, hashtags: impl Into<String>) -> Self {
        Self {
            word: result.word().to_string(),
            definition: truncate(result.definition(), CARD_DEFINITION_LIMIT),
            hashtags: hashtags.into(),
        }
    }

    pub fn with_defaults(result: &GenerationResult) -> Self {
        Self::new(result, DEFAULT_HASHTAGS)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// The definition, already shortened to the card limit
    pub fn definition(&self) -> &str {
        &self.definition
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n\n{}\n", self.word, self.definition);
        if !self.hashtags.is_empty() {
            out.push('\n');
            out.push_str(&self.hashtags);
            out.push('\n');
        }
        out
    }

    /// File name used when exporting, e.g. `mi-palabra-emocional-vaciesper.txt`
    pub fn file_name(&self) -> String {
        format!("{}-{}.txt", FILE_PREFIX, slugify(&self.word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_definition_is_truncated() {
        let definition = "a".repeat(200);
        let result = GenerationResult::new("w", &definition, "adv").unwrap();
        let card = ShareCard::with_defaults(&result);
        assert_eq!(card.definition().chars().count(), CARD_DEFINITION_LIMIT);
        assert!(card.definition().ends_with("..."));
        assert_eq!(&card.definition()[..117], &definition[..117]);
    }

    #[test]
    fn test_short_definition_is_kept() {
        let result = GenerationResult::new("w", "breve", "adv").unwrap();
        assert_eq!(ShareCard::with_defaults(&result).definition(), "breve");
    }

    #[test]
    fn test_file_name_slug() {
        let result = GenerationResult::new("Vacío Esper", "d", "a").unwrap();
        let card = ShareCard::with_defaults(&result);
        assert_eq!(card.file_name(), "mi-palabra-emocional-vac-o-esper.txt");
    }

    #[test]
    fn test_render_contains_sections() {
        let result = GenerationResult::new("vaciesper", "un hueco", "a").unwrap();
        let rendered = ShareCard::new(&result, "#A").render();
        assert_eq!(rendered, "vaciesper\n\nun hueco\n\n#A\n");
    }
}
