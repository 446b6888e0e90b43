//! Presentation layer for El Imaginario
//!
//! This crate contains the CLI definition, the console formatter,
//! progress reporters, and the interactive terminal UI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat, RunMode};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use tui::{TuiApp, TuiOptions};
