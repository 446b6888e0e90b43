//! Reflection Controller
//!
//! Owns the two-view state machine (express, reflection), sequences word
//! generation and sharing, and emits [`UiEvent`] messages to a channel for
//! the presentation layer to render.
//!
//! ```text
//! Express --submit(ok)--> [transition] --> Reflection
//!    ^  \--submit(err)--> Express + error       |
//!    \----------- [transition] <---reset--------/
//! ```

use crate::ports::progress::{ProgressNotifier, RetryAttempt};
use crate::ports::ui_event::UiEvent;
use crate::use_cases::generate_word::GenerateWordUseCase;
use crate::use_cases::share_result::{CopyOutcome, ShareResultUseCase};
use imaginario_domain::{
    GenerationErrorKind, GenerationResult, ShareTarget, ValidWords, ViewState, WordTriple,
};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Default length of a view change
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(150);

/// Point-in-time copy of the controller state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerSnapshot {
    pub view: ViewState,
    pub words: WordTriple,
    pub result: Option<GenerationResult>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub is_transitioning: bool,
}

/// Reports retries as [`UiEvent::RetryScheduled`]
struct RetryEventBridge {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ProgressNotifier for RetryEventBridge {
    fn on_request_start(&self, _words: &ValidWords) {}

    fn on_retry(&self, attempt: &RetryAttempt) {
        let _ = self.tx.send(UiEvent::RetryScheduled {
            retry: attempt.retry_number(),
            max_retries: attempt.max_retries,
            delay: attempt.delay,
        });
    }

    fn on_complete(&self, _success: bool) {}
}

pub struct ReflectionController {
    generate: GenerateWordUseCase,
    share: ShareResultUseCase,
    state: ControllerSnapshot,
    transition: Duration,
    /// Cancellation token for graceful shutdown
    cancellation_token: Option<CancellationToken>,
    /// Channel sender for UI events
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl ReflectionController {
    pub fn new(
        generate: GenerateWordUseCase,
        share: ShareResultUseCase,
        tx: mpsc::UnboundedSender<UiEvent>,
    ) -> Self {
        Self {
            generate,
            share,
            state: ControllerSnapshot::default(),
            transition: DEFAULT_TRANSITION,
            cancellation_token: None,
            tx,
        }
    }

    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition = transition;
        self
    }

    /// Set cancellation token for graceful shutdown
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    pub fn snapshot(&self) -> ControllerSnapshot {
        self.state.clone()
    }

    pub fn view(&self) -> ViewState {
        self.state.view
    }

    pub fn result(&self) -> Option<&GenerationResult> {
        self.state.result.as_ref()
    }

    fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }

    // ==================== Editing ====================

    /// Replace all three words. Any change dismisses the current error.
    pub fn update_words(&mut self, words: WordTriple) {
        if words == self.state.words {
            return;
        }
        self.state.words = words;
        if self.state.error.take().is_some() {
            self.emit(UiEvent::ErrorCleared);
        }
    }

    /// Replace the word at `index` (0-based)
    pub fn set_word(&mut self, index: usize, value: impl Into<String>) {
        let words = self.state.words.with_word(index, value);
        self.update_words(words);
    }

    // ==================== Generation ====================

    /// Generate a word from the current triple.
    ///
    /// Ignored while a request or a transition is in progress, and outside
    /// the express view. Blank words produce an inline error without calling
    /// the service.
    pub async fn submit(&mut self) {
        if self.state.is_loading || self.state.is_transitioning {
            debug!("Submit ignored: busy");
            return;
        }
        if !self.state.view.is_express() {
            debug!("Submit ignored: already reflecting");
            return;
        }
        if !self.state.words.is_complete() {
            self.fail(
                GenerationErrorKind::Validation,
                GenerationErrorKind::Validation.user_message(),
            );
            return;
        }

        self.state.is_loading = true;
        self.state.error = None;
        self.emit(UiEvent::GenerationStarted);

        let words = self.state.words.as_slice().to_vec();
        let progress = RetryEventBridge {
            tx: self.tx.clone(),
        };
        let outcome = match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => None,
                    r = self.generate.execute_with_progress(&words, &progress) => Some(r),
                }
            }
            None => Some(self.generate.execute_with_progress(&words, &progress).await),
        };
        self.state.is_loading = false;

        match outcome {
            None => info!("Generation cancelled"),
            Some(Ok(result)) => self.show_reflection(result).await,
            Some(Err(e)) => self.fail(e.kind(), e.user_message()),
        }
    }

    fn fail(&mut self, kind: GenerationErrorKind, message: String) {
        debug!("Showing error ({:?}): {}", kind, message);
        self.state.error = Some(message.clone());
        self.emit(UiEvent::GenerationFailed { kind, message });
    }

    async fn show_reflection(&mut self, result: GenerationResult) {
        self.state.result = Some(result.clone());
        self.begin_transition(ViewState::Reflection).await;
        self.state.view = ViewState::Reflection;
        self.state.is_transitioning = false;
        self.emit(UiEvent::ReflectionShown(result));
    }

    async fn begin_transition(&mut self, to: ViewState) {
        self.state.is_transitioning = true;
        self.emit(UiEvent::TransitionStarted {
            to,
            duration: self.transition,
        });
        tokio::time::sleep(self.transition).await;
    }

    /// Go back to an empty express view. Accepted from any state.
    pub async fn reset(&mut self) {
        self.begin_transition(ViewState::Express).await;
        self.state = ControllerSnapshot::default();
        self.emit(UiEvent::ExpressShown);
    }

    // ==================== Sharing ====================

    /// Copy the current result to the clipboard
    pub fn copy_result(&self) {
        let Some(result) = self.result() else {
            self.emit(UiEvent::NothingToShare);
            return;
        };
        self.emit_copy(self.share.copy(result));
    }

    fn emit_copy(&self, outcome: CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => self.emit(UiEvent::Copied),
            CopyOutcome::Fallback { text, reason } => {
                self.emit(UiEvent::CopyFallback { text, reason })
            }
        }
    }

    /// Open the share flow for `target`
    pub fn share_to(&self, target: ShareTarget) {
        let Some(result) = self.result() else {
            self.emit(UiEvent::NothingToShare);
            return;
        };
        match self.share.share(result, target) {
            Ok(outcome) => {
                if let Some(copy) = outcome.copy {
                    self.emit_copy(copy);
                }
                self.emit(UiEvent::ShareOpened {
                    target,
                    url: outcome.url,
                });
            }
            Err(e) => self.emit(UiEvent::ShareFailed {
                target,
                message: e.to_string(),
            }),
        }
    }

    /// Write the share card into the configured directory
    pub fn export_card(&self) {
        let Some(result) = self.result() else {
            self.emit(UiEvent::NothingToShare);
            return;
        };
        match self.share.export_card(result) {
            Ok(path) => self.emit(UiEvent::CardExported {
                path: path.display().to_string(),
            }),
            Err(e) => self.emit(UiEvent::CardExportFailed {
                message: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GenerationParams, ShareSettings};
    use crate::ports::card_exporter::CardExporterPort;
    use crate::ports::clipboard::NoClipboard;
    use crate::ports::llm_gateway::{CompletionGateway, CompletionRequest, GatewayError};
    use crate::ports::url_opener::{OpenUrlError, UrlOpenerPort};
    use async_trait::async_trait;
    use imaginario_domain::ShareCard;
    use std::collections::VecDeque;
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use tokio::time::Instant;

    // === Mock implementations ===

    struct MockGateway {
        replies: Mutex<VecDeque<Result<Option<String>, GatewayError>>>,
        calls: Mutex<usize>,
    }

    impl MockGateway {
        fn new(replies: Vec<Result<Option<String>, GatewayError>>) -> Self {
            Self {
                replies: Mutex::new(VecDeque::from(replies)),
                calls: Mutex::new(0),
            }
        }

        fn call_count(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl CompletionGateway for MockGateway {
        async fn complete(
            &self,
            _request: &CompletionRequest,
        ) -> Result<Option<String>, GatewayError> {
            *self.calls.lock().unwrap() += 1;
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(GatewayError::Other("No more replies".to_string())))
        }
    }

    struct NullOpener;

    impl UrlOpenerPort for NullOpener {
        fn open(&self, _url: &str) -> Result<(), OpenUrlError> {
            Ok(())
        }
    }

    struct NullExporter;

    impl CardExporterPort for NullExporter {
        fn export(&self, card: &ShareCard, dir: &Path) -> std::io::Result<PathBuf> {
            Ok(dir.join(card.file_name()))
        }
    }

    const EXAMPLE_REPLY: &str = r#"{"word":"vaciesper","definition":"vaciesper nombra un hueco que todavía espera.","advice":"Quizá vaciesper solo pide ser mirado."}"#;

    fn controller(
        gateway: Arc<MockGateway>,
    ) -> (ReflectionController, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let generate =
            GenerateWordUseCase::new(gateway, GenerationParams::default().with_api_key("sk-test"));
        let share = ShareResultUseCase::new(
            Arc::new(NoClipboard),
            Arc::new(NullOpener),
            Arc::new(NullExporter),
            ShareSettings::default(),
        );
        (ReflectionController::new(generate, share, tx), rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<UiEvent>) -> Vec<UiEvent> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    fn example_words() -> WordTriple {
        WordTriple::new("vacío", "esperanza", "cansancio")
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state() {
        let (controller, _rx) = controller(Arc::new(MockGateway::new(vec![])));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.view, ViewState::Express);
        assert!(snapshot.words.is_empty());
        assert!(snapshot.result.is_none());
        assert!(!snapshot.is_loading && !snapshot.is_transitioning);
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_word_sets_error_without_call() {
        let gateway = Arc::new(MockGateway::new(vec![]));
        let (mut controller, mut rx) = controller(gateway.clone());
        controller.update_words(WordTriple::new("vacío", "", "cansancio"));

        controller.submit().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.view, ViewState::Express);
        assert_eq!(
            snapshot.error.as_deref(),
            Some("Por favor, completa las tres palabras antes de generar.")
        );
        assert!(!snapshot.is_loading);
        assert_eq!(gateway.call_count(), 0);
        assert!(matches!(
            drain(&mut rx).as_slice(),
            [UiEvent::GenerationFailed {
                kind: GenerationErrorKind::Validation,
                ..
            }]
        ));
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submit_reaches_reflection_after_transition() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(Some(EXAMPLE_REPLY.to_string()))]));
        let (mut controller, mut rx) = controller(gateway);
        controller.update_words(example_words());
        let start = Instant::now();

        controller.submit().await;

        assert!(start.elapsed() >= DEFAULT_TRANSITION);
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.view, ViewState::Reflection);
        assert_eq!(snapshot.result.as_ref().unwrap().word(), "vaciesper");
        assert!(snapshot.error.is_none());
        assert!(!snapshot.is_loading && !snapshot.is_transitioning);

        let events = drain(&mut rx);
        assert_eq!(events[0], UiEvent::GenerationStarted);
        assert_eq!(
            events[1],
            UiEvent::TransitionStarted {
                to: ViewState::Reflection,
                duration: DEFAULT_TRANSITION,
            }
        );
        assert!(matches!(&events[2], UiEvent::ReflectionShown(r) if r.word() == "vaciesper"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_second_submit_in_reflection_is_ignored() {
        let gateway = Arc::new(MockGateway::new(vec![
            Ok(Some(EXAMPLE_REPLY.to_string())),
            Ok(Some(EXAMPLE_REPLY.to_string())),
        ]));
        let (mut controller, mut rx) = controller(gateway.clone());
        controller.update_words(example_words());

        controller.submit().await;
        drain(&mut rx);
        controller.submit().await;

        assert_eq!(gateway.call_count(), 1);
        assert_eq!(controller.view(), ViewState::Reflection);
        assert!(drain(&mut rx).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_submit_stays_in_express() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Api {
            status: 401,
            message: "Incorrect API key provided".to_string(),
        })]));
        let (mut controller, _rx) = controller(gateway);
        controller.update_words(example_words());

        controller.submit().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.view, ViewState::Express);
        assert!(snapshot.result.is_none());
        assert_eq!(
            snapshot.error,
            Some(GenerationErrorKind::InvalidCredential.user_message())
        );
        assert!(!snapshot.is_loading);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_are_reported() {
        let gateway = Arc::new(MockGateway::new(vec![
            Err(GatewayError::Api {
                status: 503,
                message: "overloaded".to_string(),
            }),
            Ok(Some(EXAMPLE_REPLY.to_string())),
        ]));
        let (mut controller, mut rx) = controller(gateway);
        controller.update_words(example_words());

        controller.submit().await;

        let events = drain(&mut rx);
        assert!(events.contains(&UiEvent::RetryScheduled {
            retry: 1,
            max_retries: 3,
            delay: Duration::from_millis(2000),
        }));
        assert_eq!(controller.view(), ViewState::Reflection);
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_clears_error() {
        let (mut controller, mut rx) = controller(Arc::new(MockGateway::new(vec![])));
        controller.submit().await;
        assert!(controller.snapshot().error.is_some());
        drain(&mut rx);

        controller.set_word(0, "v");

        assert!(controller.snapshot().error.is_none());
        assert_eq!(drain(&mut rx), vec![UiEvent::ErrorCleared]);
        assert_eq!(controller.snapshot().words.get(0), Some("v"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_from_reflection_clears_everything() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(Some(EXAMPLE_REPLY.to_string()))]));
        let (mut controller, mut rx) = controller(gateway);
        controller.update_words(example_words());
        controller.submit().await;
        drain(&mut rx);

        controller.reset().await;

        assert_eq!(controller.snapshot(), ControllerSnapshot::default());
        let events = drain(&mut rx);
        assert_eq!(events.last(), Some(&UiEvent::ExpressShown));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_from_express_with_error() {
        let (mut controller, _rx) = controller(Arc::new(MockGateway::new(vec![])));
        controller.update_words(WordTriple::new("a", "", ""));
        controller.submit().await;

        controller.reset().await;

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.view, ViewState::Express);
        assert!(snapshot.error.is_none());
        assert!(snapshot.words.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sharing_without_result() {
        let (controller, mut rx) = controller(Arc::new(MockGateway::new(vec![])));
        controller.copy_result();
        controller.share_to(ShareTarget::Facebook);
        assert_eq!(
            drain(&mut rx),
            vec![UiEvent::NothingToShare, UiEvent::NothingToShare]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_tiktok_share_falls_back_and_opens() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(Some(EXAMPLE_REPLY.to_string()))]));
        let (mut controller, mut rx) = controller(gateway);
        controller.update_words(example_words());
        controller.submit().await;
        drain(&mut rx);

        controller.share_to(ShareTarget::TikTok);

        let events = drain(&mut rx);
        assert!(matches!(&events[0], UiEvent::CopyFallback { text, .. } if text.contains("vaciesper")));
        assert_eq!(
            events[1],
            UiEvent::ShareOpened {
                target: ShareTarget::TikTok,
                url: "https://www.tiktok.com/".to_string(),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_submit_returns_to_idle() {
        let gateway = Arc::new(MockGateway::new(vec![Ok(Some(EXAMPLE_REPLY.to_string()))]));
        let token = CancellationToken::new();
        token.cancel();
        let (controller, _rx) = controller(gateway);
        let mut controller = controller.with_cancellation(token);
        controller.update_words(example_words());

        controller.submit().await;

        let snapshot = controller.snapshot();
        assert!(!snapshot.is_loading);
        assert_eq!(snapshot.view, ViewState::Express);
    }
}
