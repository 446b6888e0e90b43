//! Share Result use case.
//!
//! Copies a result to the clipboard, opens platform share links and exports
//! the share card. A missing clipboard never blocks sharing: the text is
//! handed back so the caller can print it instead.

use crate::config::ShareSettings;
use crate::ports::card_exporter::CardExporterPort;
use crate::ports::clipboard::ClipboardPort;
use crate::ports::url_opener::{OpenUrlError, UrlOpenerPort};
use imaginario_domain::{GenerationResult, ShareCard, ShareMessage, ShareTarget};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum ShareError {
    #[error(transparent)]
    OpenUrl(#[from] OpenUrlError),

    #[error("Failed to export share card: {0}")]
    Export(#[from] std::io::Error),
}

/// What happened to a clipboard copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    /// No clipboard; show `text` to the user instead
    Fallback { text: String, reason: String },
}

/// Result of sharing to a platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareOutcome {
    pub target: ShareTarget,
    pub url: String,
    /// Set for platforms that get the text through the clipboard
    pub copy: Option<CopyOutcome>,
}

pub struct ShareResultUseCase {
    clipboard: Arc<dyn ClipboardPort>,
    opener: Arc<dyn UrlOpenerPort>,
    exporter: Arc<dyn CardExporterPort>,
    settings: ShareSettings,
}

impl ShareResultUseCase {
    pub fn new(
        clipboard: Arc<dyn ClipboardPort>,
        opener: Arc<dyn UrlOpenerPort>,
        exporter: Arc<dyn CardExporterPort>,
        settings: ShareSettings,
    ) -> Self {
        Self {
            clipboard,
            opener,
            exporter,
            settings,
        }
    }

    pub fn settings(&self) -> &ShareSettings {
        &self.settings
    }

    pub fn message(&self, result: &GenerationResult) -> ShareMessage {
        ShareMessage::new(result, &self.settings.hashtags, &self.settings.app_url)
    }

    pub fn card(&self, result: &GenerationResult) -> ShareCard {
        ShareCard::new(result, &self.settings.hashtags)
    }

    /// Copy the clipboard text for `result`
    pub fn copy(&self, result: &GenerationResult) -> CopyOutcome {
        let text = self.message(result).clipboard_text();
        match self.clipboard.copy_text(&text) {
            Ok(()) => {
                debug!("Copied {} bytes to clipboard", text.len());
                CopyOutcome::Copied
            }
            Err(e) => {
                warn!("Clipboard copy failed: {}", e);
                CopyOutcome::Fallback {
                    text,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Open the share flow of `target`.
    ///
    /// Instagram and TikTok have no prefilled-post link, so the text is
    /// copied first and the home page is opened whatever the copy outcome.
    pub fn share(
        &self,
        result: &GenerationResult,
        target: ShareTarget,
    ) -> Result<ShareOutcome, ShareError> {
        let copy = target.copies_text_first().then(|| self.copy(result));
        let url = target.url(&self.message(result));
        self.opener.open(&url)?;
        info!("Opened {} share link", target.display_name());
        Ok(ShareOutcome { target, url, copy })
    }

    /// Export the share card into the configured directory
    pub fn export_card(&self, result: &GenerationResult) -> Result<PathBuf, ShareError> {
        let dir = self.settings.card_dir.clone();
        self.export_card_to(result, &dir)
    }

    /// Export the share card into `dir`
    pub fn export_card_to(
        &self,
        result: &GenerationResult,
        dir: &Path,
    ) -> Result<PathBuf, ShareError> {
        let path = self.exporter.export(&self.card(result), dir)?;
        info!("Exported share card to {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clipboard::{ClipboardError, NoClipboard};
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        text: Mutex<Option<String>>,
    }

    impl ClipboardPort for MemoryClipboard {
        fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
            *self.text.lock().unwrap() = Some(text.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        urls: Mutex<Vec<String>>,
    }

    impl UrlOpenerPort for RecordingOpener {
        fn open(&self, url: &str) -> Result<(), OpenUrlError> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct FailingOpener;

    impl UrlOpenerPort for FailingOpener {
        fn open(&self, _url: &str) -> Result<(), OpenUrlError> {
            Err(OpenUrlError::NoOpener)
        }
    }

    #[derive(Default)]
    struct RecordingExporter {
        cards: Mutex<Vec<(String, PathBuf)>>,
    }

    impl CardExporterPort for RecordingExporter {
        fn export(&self, card: &ShareCard, dir: &Path) -> std::io::Result<PathBuf> {
            self.cards
                .lock()
                .unwrap()
                .push((card.render(), dir.to_path_buf()));
            Ok(dir.join(card.file_name()))
        }
    }

    fn result() -> GenerationResult {
        GenerationResult::new("vaciesper", "un hueco que espera", "respira").unwrap()
    }

    fn settings() -> ShareSettings {
        ShareSettings {
            app_url: "https://example.org".to_string(),
            hashtags: "#A".to_string(),
            card_dir: PathBuf::from("/tmp/cards"),
        }
    }

    #[test]
    fn test_copy_places_clipboard_text() {
        let clipboard = Arc::new(MemoryClipboard::default());
        let use_case = ShareResultUseCase::new(
            clipboard.clone(),
            Arc::new(RecordingOpener::default()),
            Arc::new(RecordingExporter::default()),
            settings(),
        );
        assert_eq!(use_case.copy(&result()), CopyOutcome::Copied);
        let text = clipboard.text.lock().unwrap().clone().unwrap();
        assert!(text.starts_with("Mi palabra emocional es: vaciesper"));
        assert!(text.ends_with("\n\nhttps://example.org"));
    }

    #[test]
    fn test_copy_falls_back_without_clipboard() {
        let use_case = ShareResultUseCase::new(
            Arc::new(NoClipboard),
            Arc::new(RecordingOpener::default()),
            Arc::new(RecordingExporter::default()),
            settings(),
        );
        match use_case.copy(&result()) {
            CopyOutcome::Fallback { text, .. } => assert!(text.contains("vaciesper")),
            other => panic!("expected fallback, got {:?}", other),
        }
    }

    #[test]
    fn test_share_link_target_does_not_copy() {
        let opener = Arc::new(RecordingOpener::default());
        let use_case = ShareResultUseCase::new(
            Arc::new(MemoryClipboard::default()),
            opener.clone(),
            Arc::new(RecordingExporter::default()),
            settings(),
        );
        let outcome = use_case.share(&result(), ShareTarget::WhatsApp).unwrap();
        assert!(outcome.copy.is_none());
        assert!(outcome.url.starts_with("https://wa.me/?text="));
        assert_eq!(*opener.urls.lock().unwrap(), vec![outcome.url]);
    }

    #[test]
    fn test_instagram_opens_even_when_copy_fails() {
        let opener = Arc::new(RecordingOpener::default());
        let use_case = ShareResultUseCase::new(
            Arc::new(NoClipboard),
            opener.clone(),
            Arc::new(RecordingExporter::default()),
            settings(),
        );
        let outcome = use_case.share(&result(), ShareTarget::Instagram).unwrap();
        assert!(matches!(outcome.copy, Some(CopyOutcome::Fallback { .. })));
        assert_eq!(
            *opener.urls.lock().unwrap(),
            vec!["https://www.instagram.com/".to_string()]
        );
    }

    #[test]
    fn test_share_reports_opener_failure() {
        let use_case = ShareResultUseCase::new(
            Arc::new(MemoryClipboard::default()),
            Arc::new(FailingOpener),
            Arc::new(RecordingExporter::default()),
            settings(),
        );
        let err = use_case.share(&result(), ShareTarget::Facebook).unwrap_err();
        assert!(matches!(err, ShareError::OpenUrl(OpenUrlError::NoOpener)));
    }

    #[test]
    fn test_export_uses_configured_dir() {
        let exporter = Arc::new(RecordingExporter::default());
        let use_case = ShareResultUseCase::new(
            Arc::new(MemoryClipboard::default()),
            Arc::new(RecordingOpener::default()),
            exporter.clone(),
            settings(),
        );
        let path = use_case.export_card(&result()).unwrap();
        assert_eq!(
            path,
            PathBuf::from("/tmp/cards/mi-palabra-emocional-vaciesper.txt")
        );
        let cards = exporter.cards.lock().unwrap();
        assert_eq!(cards[0].0, "vaciesper\n\nun hueco que espera\n\n#A\n");
    }
}
