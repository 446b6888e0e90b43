//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Expected exactly three words, got {0}")]
    WrongWordCount(usize),

    #[error("Word {position} is empty")]
    EmptyWord { position: usize },

    #[error("Word {position} is longer than {max} characters")]
    WordTooLong { position: usize, max: usize },

    #[error("Unknown prompt variant: {0}")]
    UnknownPromptVariant(String),

    #[error("Unknown share target: {0}")]
    UnknownShareTarget(String),
}

impl DomainError {
    /// Whether this error comes from user input (as opposed to configuration)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            DomainError::WrongWordCount(_)
                | DomainError::EmptyWord { .. }
                | DomainError::WordTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_word_display() {
        let error = DomainError::EmptyWord { position: 2 };
        assert_eq!(error.to_string(), "Word 2 is empty");
    }

    #[test]
    fn test_is_input_error() {
        assert!(DomainError::WrongWordCount(2).is_input_error());
        assert!(DomainError::EmptyWord { position: 1 }.is_input_error());
        assert!(!DomainError::UnknownPromptVariant("x".into()).is_input_error());
        assert!(!DomainError::UnknownShareTarget("myspace".into()).is_input_error());
    }
}
