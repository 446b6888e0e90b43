//! UI event types emitted by ReflectionController for presentation layer rendering
//!
//! These events form the output port from the application layer to the
//! presentation layer. The TUI applies them to its own state; the one-shot
//! CLI ignores most of them and reads the returned result instead.

use imaginario_domain::{GenerationErrorKind, GenerationResult, ShareTarget, ViewState};
use std::time::Duration;

/// Events emitted by ReflectionController for the presentation layer to render
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // === Editing ===
    /// The inline error was dismissed because the words changed
    ErrorCleared,

    // === Generation ===
    /// A request is in flight
    GenerationStarted,
    /// A failed attempt will be retried after `delay`
    RetryScheduled {
        retry: u32,
        max_retries: u32,
        delay: Duration,
    },
    /// Generation failed; the express view shows `message`
    GenerationFailed {
        kind: GenerationErrorKind,
        message: String,
    },

    // === View transitions ===
    /// A view change has begun and lands after `duration`
    TransitionStarted { to: ViewState, duration: Duration },
    /// The reflection view is showing `result`
    ReflectionShown(GenerationResult),
    /// Back at an empty express view
    ExpressShown,

    // === Sharing ===
    /// Text placed on the clipboard
    Copied,
    /// Clipboard unavailable; `text` should be shown to the user instead
    CopyFallback { text: String, reason: String },
    /// Browser launched for a share target
    ShareOpened { target: ShareTarget, url: String },
    /// Share link could not be opened
    ShareFailed { target: ShareTarget, message: String },
    /// Share card written to disk
    CardExported { path: String },
    /// Share card could not be written
    CardExportFailed { message: String },

    // === Control ===
    /// An action needs a result but none is showing
    NothingToShare,
}
