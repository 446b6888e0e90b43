//! TUI (Text User Interface) module for El Imaginario
//!
//! A two-screen terminal UI built on ratatui: an express screen that
//! collects three words and a reflection screen that shows the result
//! and its share actions.

mod app;
mod app_controller;
mod event;
mod mode;
mod presenter;
mod state;
mod widgets;

pub use app::{TuiApp, TuiOptions};
pub use event::TuiCommand;
pub use mode::KeyAction;
pub use presenter::TuiPresenter;
pub use state::{Focus, TuiState, WordField};
