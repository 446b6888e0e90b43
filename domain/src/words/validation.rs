//! Per-word validation helpers.

/// Maximum characters accepted per word field.
pub const MAX_WORD_LENGTH: usize = 50;

/// A word is valid when it has content after trimming.
pub fn is_valid_word(word: &str) -> bool {
    !word.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_word() {
        assert!(is_valid_word("vacío"));
        assert!(is_valid_word("  calma "));
        assert!(!is_valid_word(""));
        assert!(!is_valid_word("   \t"));
    }
}
