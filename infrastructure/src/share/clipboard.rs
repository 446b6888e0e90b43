//! System clipboard backed by arboard

use imaginario_application::ports::clipboard::{ClipboardError, ClipboardPort};
use std::sync::Mutex;
use tracing::debug;

/// Clipboard adapter over [`arboard::Clipboard`].
///
/// The handle is opened lazily and kept for the life of the adapter. On X11
/// and Wayland the owning process serves the clipboard contents, so dropping
/// the handle right after writing can lose them.
#[derive(Default)]
pub struct ArboardClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardPort for ArboardClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not initialized".to_string()));
        };

        match clipboard.set_text(text.to_string()) {
            Ok(()) => {
                debug!("Copied {} bytes to clipboard", text.len());
                Ok(())
            }
            Err(e) => {
                // Force a fresh handle next time; the display connection may be gone.
                *guard = None;
                Err(ClipboardError::WriteFailed(e.to_string()))
            }
        }
    }
}
