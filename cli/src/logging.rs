//! Tracing subscriber setup
//!
//! Verbosity picks the default level (`-v` info, `-vv` debug, `-vvv` trace);
//! `RUST_LOG` overrides it. With a log file the output goes through a
//! non-blocking appender so the TUI screen stays clean.

use anyhow::{Context, Result, anyhow};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "imaginario.log";

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbosity)))
}

/// `$XDG_DATA_HOME/imaginario/logs/imaginario.log` (or the platform equivalent)
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join("imaginario").join("logs").join(LOG_FILE_NAME))
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the file.
pub fn init(verbosity: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = filter_for(verbosity);

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| anyhow!(e))?;
        return Ok(None);
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_owned())
        .unwrap_or_else(|| LOG_FILE_NAME.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_file(verbosity >= 3)
        .with_line_number(verbosity >= 3)
        .try_init()
        .map_err(|e| anyhow!(e))?;

    Ok(Some(guard))
}
