//! TUI Presenter - applies application events to TUI state
//!
//! ```text
//! ReflectionController (UiEvent)
//!         ↓
//!   TuiPresenter (this module)
//!         ↓
//!   TuiState → widgets
//! ```

use super::state::TuiState;
use imaginario_application::UiEvent;
use imaginario_domain::ViewState;

pub struct TuiPresenter;

impl TuiPresenter {
    /// Update `state` to reflect `event`
    pub fn apply(state: &mut TuiState, event: &UiEvent) {
        match event {
            UiEvent::ErrorCleared => state.error = None,

            UiEvent::GenerationStarted => {
                state.is_loading = true;
                state.error = None;
                state.retry_status = None;
            }
            UiEvent::RetryScheduled {
                retry,
                max_retries,
                delay,
            } => {
                state.retry_status = Some(format!(
                    "Reintentando ({}/{}) en {}s...",
                    retry,
                    max_retries,
                    delay.as_secs_f32()
                ));
            }
            UiEvent::GenerationFailed { message, .. } => {
                state.is_loading = false;
                state.retry_status = None;
                state.error = Some(message.clone());
            }

            UiEvent::TransitionStarted { .. } => {
                state.is_loading = false;
                state.retry_status = None;
                state.is_transitioning = true;
            }
            UiEvent::ReflectionShown(result) => {
                state.view = ViewState::Reflection;
                state.result = Some(result.clone());
                state.is_transitioning = false;
                state.fallback_text = None;
            }
            UiEvent::ExpressShown => {
                state.view = ViewState::Express;
                state.result = None;
                state.error = None;
                state.fallback_text = None;
                state.is_transitioning = false;
                state.clear_words();
            }

            UiEvent::Copied => state.set_flash("¡Copiado!"),
            UiEvent::CopyFallback { text, reason } => {
                state.fallback_text = Some(text.clone());
                state.set_flash(format!("Portapapeles no disponible: {}", reason));
            }
            UiEvent::ShareOpened { target, .. } => {
                state.set_flash(format!("Abriendo {}...", target.display_name()));
            }
            UiEvent::ShareFailed { target, message } => {
                state.set_flash(format!(
                    "No se pudo abrir {}: {}",
                    target.display_name(),
                    message
                ));
            }
            UiEvent::CardExported { path } => {
                state.set_flash(format!("Tarjeta guardada en {}", path));
            }
            UiEvent::CardExportFailed { message } => {
                state.set_flash(format!("No se pudo guardar la tarjeta: {}", message));
            }
            UiEvent::NothingToShare => state.set_flash("Aún no hay nada para compartir"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imaginario_domain::{GenerationErrorKind, GenerationResult, ShareTarget};
    use std::time::Duration;

    fn result() -> GenerationResult {
        GenerationResult::new("vaciesper", "Un hueco cansado.", "Descansa.").unwrap()
    }

    fn flash(state: &TuiState) -> &str {
        state.flash_message.as_ref().map(|(m, _)| m.as_str()).unwrap_or("")
    }

    #[test]
    fn test_generation_lifecycle() {
        let mut state = TuiState::new();
        state.error = Some("viejo".into());

        TuiPresenter::apply(&mut state, &UiEvent::GenerationStarted);
        assert!(state.is_loading);
        assert!(state.error.is_none());

        TuiPresenter::apply(
            &mut state,
            &UiEvent::RetryScheduled {
                retry: 1,
                max_retries: 3,
                delay: Duration::from_secs(2),
            },
        );
        assert_eq!(state.retry_status.as_deref(), Some("Reintentando (1/3) en 2s..."));

        TuiPresenter::apply(
            &mut state,
            &UiEvent::TransitionStarted {
                to: ViewState::Reflection,
                duration: Duration::from_millis(150),
            },
        );
        assert!(!state.is_loading);
        assert!(state.is_transitioning);
        assert!(state.retry_status.is_none());

        TuiPresenter::apply(&mut state, &UiEvent::ReflectionShown(result()));
        assert_eq!(state.view, ViewState::Reflection);
        assert!(!state.is_transitioning);
        assert_eq!(state.result.as_ref().map(|r| r.word()), Some("vaciesper"));
    }

    #[test]
    fn test_failure_stays_in_express_with_message() {
        let mut state = TuiState::new();
        TuiPresenter::apply(&mut state, &UiEvent::GenerationStarted);
        TuiPresenter::apply(
            &mut state,
            &UiEvent::GenerationFailed {
                kind: GenerationErrorKind::Network,
                message: "Error de conexión.".into(),
            },
        );
        assert_eq!(state.view, ViewState::Express);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("Error de conexión."));

        TuiPresenter::apply(&mut state, &UiEvent::ErrorCleared);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_express_shown_clears_everything() {
        let mut state = TuiState::new();
        state.insert_char('a');
        state.fallback_text = Some("texto".into());
        TuiPresenter::apply(&mut state, &UiEvent::ReflectionShown(result()));

        TuiPresenter::apply(&mut state, &UiEvent::ExpressShown);

        assert_eq!(state.view, ViewState::Express);
        assert!(state.result.is_none());
        assert!(state.fallback_text.is_none());
        assert_eq!(state.words(), vec!["", "", ""]);
    }

    #[test]
    fn test_share_feedback_flashes() {
        let mut state = TuiState::new();

        TuiPresenter::apply(&mut state, &UiEvent::Copied);
        assert_eq!(flash(&state), "¡Copiado!");

        TuiPresenter::apply(
            &mut state,
            &UiEvent::ShareOpened {
                target: ShareTarget::WhatsApp,
                url: "https://wa.me/?text=x".into(),
            },
        );
        assert!(flash(&state).contains("WhatsApp"));

        TuiPresenter::apply(
            &mut state,
            &UiEvent::CardExported {
                path: "/tmp/mi-palabra-emocional-vaciesper.txt".into(),
            },
        );
        assert!(flash(&state).contains("mi-palabra-emocional-vaciesper.txt"));

        TuiPresenter::apply(&mut state, &UiEvent::NothingToShare);
        assert_eq!(flash(&state), "Aún no hay nada para compartir");
    }

    #[test]
    fn test_copy_fallback_keeps_text() {
        let mut state = TuiState::new();
        TuiPresenter::apply(
            &mut state,
            &UiEvent::CopyFallback {
                text: "Mi palabra emocional es: vaciesper".into(),
                reason: "no display".into(),
            },
        );
        assert_eq!(
            state.fallback_text.as_deref(),
            Some("Mi palabra emocional es: vaciesper")
        );
        assert!(flash(&state).contains("no display"));
    }
}
