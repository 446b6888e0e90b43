//! Configuration file loading for El Imaginario
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `IMAGINARIO_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./imaginario.toml` or `./.imaginario.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/imaginario/config.toml`
//!    (fallback `~/.config/imaginario/config.toml`)
//! 5. Default values

mod credentials;
mod file_config;
mod loader;

pub use credentials::{CredentialSource, resolve_api_key};
pub use file_config::{
    FileConfig, FileLoggingConfig, FilePromptConfig, FileProviderConfig, FileRetryConfig,
    FileShareConfig, FileUiConfig,
};
pub use loader::ConfigLoader;
