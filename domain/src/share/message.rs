//! Share text composition

use crate::generation::GenerationResult;

/// Campaign hashtags appended to every shared text
pub const DEFAULT_HASHTAGS: &str = "#TodosSomosAliens #HablemosdeSaludMental";

/// Address of the public app, linked from shared posts
pub const DEFAULT_APP_URL: &str = "https://elimaginario.app";

/// Text that accompanies a shared word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMessage {
    word: String,
    definition: String,
    hashtags: String,
    app_url: String,
}

impl ShareMessage {
    pub fn new(
        result: &GenerationResult,
        hashtags: impl Into<String>,
        app_url: impl Into<String>,
    ) -> Self {
        Self {
            word: result.word().to_string(),
            definition: result.definition().to_string(),
            hashtags: hashtags.into(),
            app_url: app_url.into(),
        }
    }

    /// Message with the campaign hashtags and public app URL
    pub fn with_defaults(result: &GenerationResult) -> Self {
        Self::new(result, DEFAULT_HASHTAGS, DEFAULT_APP_URL)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn app_url(&self) -> &str {
        &self.app_url
    }

    pub fn hashtags(&self) -> &str {
        &self.hashtags
    }

    /// Text posted to social networks
    pub fn share_text(&self) -> String {
        let mut text = format!(
            "Mi palabra emocional es: {}\nSignificado: {}",
            self.word, self.definition
        );
        let tail = [self.hashtags.as_str(), self.app_url.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !tail.is_empty() {
            text.push_str("\n\n");
            text.push_str(&tail);
        }
        text
    }

    /// Text placed on the clipboard: share text followed by the app URL
    pub fn clipboard_text(&self) -> String {
        if self.app_url.is_empty() {
            return self.share_text();
        }
        format!("{}\n\n{}", self.share_text(), self.app_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result() -> GenerationResult {
        GenerationResult::new(
            "vaciesper",
            "vaciesper nombra un hueco que todavía espera.",
            "Quizá vaciesper solo pide ser mirado.",
        )
        .unwrap()
    }

    #[test]
    fn test_share_text_layout() {
        let msg = ShareMessage::new(&result(), "#A #B", "https://example.org");
        assert_eq!(
            msg.share_text(),
            "Mi palabra emocional es: vaciesper\n\
             Significado: vaciesper nombra un hueco que todavía espera.\n\n\
             #A #B https://example.org"
        );
    }

    #[test]
    fn test_clipboard_text_appends_url() {
        let msg = ShareMessage::new(&result(), "#A", "https://example.org");
        assert!(msg.clipboard_text().ends_with("#A https://example.org\n\nhttps://example.org"));
    }

    #[test]
    fn test_defaults_carry_campaign_hashtags() {
        let msg = ShareMessage::with_defaults(&result());
        assert!(msg.share_text().contains(DEFAULT_HASHTAGS));
        assert_eq!(msg.app_url(), DEFAULT_APP_URL);
    }

    #[test]
    fn test_empty_url_and_hashtags() {
        let msg = ShareMessage::new(&result(), "", "");
        assert!(!msg.share_text().contains("\n\n"));
        assert_eq!(msg.clipboard_text(), msg.share_text());
    }
}
