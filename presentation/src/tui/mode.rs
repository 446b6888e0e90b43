//! Key handling for the two screens
//!
//! - Express: typing goes to the focused word; Tab/arrows move focus;
//!   Enter advances or submits
//! - Reflection: single-key shortcuts for sharing and reset

use super::state::Focus;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use imaginario_domain::{ShareTarget, ViewState};

/// User action derived from key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,

    // -- Express --
    InsertChar(char),
    DeleteChar,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    FocusNext,
    FocusPrev,
    Submit,

    // -- Reflection --
    Reset,
    Copy,
    Share(ShareTarget),
    ExportCard,

    // -- Overlay --
    ToggleHelp,
}

/// Map a key event to an action for the current screen
pub fn handle_key_event(view: ViewState, focus: Focus, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::None;
    }

    // Global
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::CONTROL) => {
            return KeyAction::Quit;
        }
        (KeyCode::F(1), _) => return KeyAction::ToggleHelp,
        _ => {}
    }

    match view {
        ViewState::Express => handle_express(focus, key),
        ViewState::Reflection => handle_reflection(key),
    }
}

fn handle_express(focus: Focus, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Tab | KeyCode::Down => KeyAction::FocusNext,
        KeyCode::BackTab | KeyCode::Up => KeyAction::FocusPrev,
        KeyCode::Enter => match focus {
            Focus::Word(i) if i + 1 < imaginario_domain::WORD_COUNT => KeyAction::FocusNext,
            _ => KeyAction::Submit,
        },
        KeyCode::Char(' ') if focus == Focus::Button => KeyAction::Submit,
        KeyCode::Char(c)
            if focus != Focus::Button
                && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::InsertChar(c)
        }
        KeyCode::Backspace => KeyAction::DeleteChar,
        KeyCode::Left => KeyAction::CursorLeft,
        KeyCode::Right => KeyAction::CursorRight,
        KeyCode::Home => KeyAction::CursorHome,
        KeyCode::End => KeyAction::CursorEnd,
        _ => KeyAction::None,
    }
}

fn handle_reflection(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r') | KeyCode::Char('n') => KeyAction::Reset,
        KeyCode::Char('c') => KeyAction::Copy,
        KeyCode::Char('e') => KeyAction::ExportCard,
        KeyCode::Char('?') => KeyAction::ToggleHelp,
        KeyCode::Char(c) => ShareTarget::from_shortcut(c)
            .map(KeyAction::Share)
            .unwrap_or(KeyAction::None),
        _ => KeyAction::None,
    }
}
