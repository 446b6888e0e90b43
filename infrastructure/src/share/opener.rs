//! Opens share links with the platform's URL handler

use imaginario_application::ports::url_opener::{OpenUrlError, UrlOpenerPort};
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// A resolved launcher program plus the arguments placed before the URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// Launches the desktop URL handler (`xdg-open`, `open` or `cmd /C start`).
///
/// The launcher is spawned and detached; a successful `open` means the
/// process started, not that the page loaded.
#[derive(Debug, Clone)]
pub struct SystemUrlOpener {
    command: Option<OpenerCommand>,
}

impl SystemUrlOpener {
    /// Detect the launcher for the current platform
    pub fn detect() -> Self {
        let command = opener_for(std::env::consts::OS, |name| which::which(name).ok());
        match &command {
            Some(cmd) => debug!("Using URL opener {}", cmd.program.display()),
            None => warn!("No URL opener found; share links will only be printed"),
        }
        Self { command }
    }

    pub fn with_command(command: OpenerCommand) -> Self {
        Self {
            command: Some(command),
        }
    }

    pub fn command(&self) -> Option<&OpenerCommand> {
        self.command.as_ref()
    }
}

impl UrlOpenerPort for SystemUrlOpener {
    fn open(&self, url: &str) -> Result<(), OpenUrlError> {
        let command = self.command.as_ref().ok_or(OpenUrlError::NoOpener)?;

        let target = if is_cmd(&command.program) {
            escape_for_cmd(url)
        } else {
            url.to_string()
        };

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .arg(target)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| OpenUrlError::LaunchFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        // Reap the launcher in the background so it never lingers as a zombie.
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        debug!("Opened {}", url);
        Ok(())
    }
}

/// Pick the launcher for `os`, resolving program names through `lookup`
pub fn opener_for(
    os: &str,
    lookup: impl Fn(&str) -> Option<PathBuf>,
) -> Option<OpenerCommand> {
    let candidates: &[(&str, &[&str])] = match os {
        "macos" => &[("open", &[])],
        "windows" => &[("cmd", &["/C", "start", ""])],
        _ => &[("xdg-open", &[]), ("gio", &["open"]), ("wslview", &[])],
    };

    candidates.iter().find_map(|(name, args)| {
        lookup(name).map(|program| OpenerCommand {
            program,
            args: args.iter().map(|a| a.to_string()).collect(),
        })
    })
}

fn is_cmd(program: &std::path::Path) -> bool {
    program
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.eq_ignore_ascii_case("cmd"))
}

/// Escape a URL for the `cmd /C start` command line.
///
/// Operators get a caret. `%` is followed by a caret so `%VAR%` never
/// matches a variable name; cmd drops the caret afterwards.
fn escape_for_cmd(url: &str) -> String {
    let mut escaped = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '^' | '&' | '|' | '<' | '>' => {
                escaped.push('^');
                escaped.push(c);
            }
            '%' => escaped.push_str("%^"),
            _ => escaped.push(c),
        }
    }
    escaped
}
