//! API credential resolution
//!
//! The credential is read once at startup and handed to the generation use
//! case inside its parameters.

use super::file_config::FileProviderConfig;

/// Where the resolved credential came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSource {
    CommandLine,
    ConfigFile,
    Environment,
}

/// Resolve the API key: command line, then `provider.api_key`, then the
/// environment variable named by `provider.api_key_env`.
pub fn resolve_api_key(
    cli_override: Option<&str>,
    provider: &FileProviderConfig,
) -> Option<(String, CredentialSource)> {
    resolve_api_key_with(cli_override, provider, |name| std::env::var(name).ok())
}

fn resolve_api_key_with(
    cli_override: Option<&str>,
    provider: &FileProviderConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Option<(String, CredentialSource)> {
    let non_blank = |s: &str| {
        let s = s.trim();
        (!s.is_empty()).then(|| s.to_string())
    };

    if let Some(key) = cli_override.and_then(non_blank) {
        return Some((key, CredentialSource::CommandLine));
    }
    if let Some(key) = provider.api_key.as_deref().and_then(non_blank) {
        return Some((key, CredentialSource::ConfigFile));
    }
    env(&provider.api_key_env)
        .as_deref()
        .and_then(non_blank)
        .map(|key| (key, CredentialSource::Environment))
}
