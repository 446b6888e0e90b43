//! String utilities for the domain layer.

/// Truncate a string to a maximum number of characters, appending `...`
/// when something was cut.
///
/// Counts `char`s rather than bytes so accented words ("vacío", "corazón")
/// are never split in the middle of a code point.
pub fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let keep = max_chars.saturating_sub(3);
        let head: String = s.chars().take(keep).collect();
        format!("{}...", head)
    }
}

/// Lowercase `s` and replace every character outside `[a-z0-9]` with `-`.
///
/// Used to build file names for exported share cards.
pub fn slugify(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() { c } else { '-' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_accented() {
        assert_eq!(truncate("vacío", 5), "vacío");
        assert_eq!(truncate("esperanzación", 8), "esper...");
    }

    #[test]
    fn test_truncate_exact_length() {
        let s = "a".repeat(120);
        assert_eq!(truncate(&s, 120), s);
        let longer = "a".repeat(121);
        let cut = truncate(&longer, 120);
        assert_eq!(cut.chars().count(), 120);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Vaciesper"), "vaciesper");
        assert_eq!(slugify("Nostal gia"), "nostal-gia");
        assert_eq!(slugify("añoranza"), "a-oranza");
    }
}
