//! CLI entrypoint for El Imaginario
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod logging;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, error::ErrorKind};
use imaginario_application::{
    CopyOutcome, GenerateWordUseCase, NoProgress, ProgressNotifier, ShareResultUseCase,
};
use imaginario_domain::GenerationResult;
use imaginario_infrastructure::{
    ArboardClipboard, ConfigLoader, FileCardExporter, FileConfig, JsonlConversationLogger,
    OpenAiChatGateway, SystemUrlOpener, resolve_api_key,
};
use imaginario_presentation::{
    Cli, ConsoleFormatter, ProgressReporter, RunMode, SimpleProgress, TuiApp, TuiOptions,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mode = match cli.run_mode() {
        Ok(mode) => mode,
        Err(message) => Cli::command()
            .error(ErrorKind::WrongNumberOfValues, message)
            .exit(),
    };

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    apply_overrides(&cli, &mut config);

    if cli.show_config {
        for line in ConfigLoader::describe_sources(cli.config.as_ref()) {
            println!("{}", line);
        }
        println!();
        println!("{}", config.to_redacted_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    // === Logging ===
    // The TUI owns the terminal, so its logs always go to a file.
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.log_file.clone())
        .or_else(|| match mode {
            RunMode::Interactive => logging::default_log_path(),
            RunMode::OneShot(_) => None,
        });
    let _log_guard = logging::init(cli.verbose, log_file.as_deref())?;

    info!("Starting El Imaginario");

    let issues = config.validate();
    let has_errors = issues.iter().any(|i| i.is_error());
    if has_errors || (!issues.is_empty() && !cli.quiet) {
        eprintln!("{}", ConsoleFormatter::format_config_issues(&issues));
    }
    if has_errors {
        return Ok(ExitCode::FAILURE);
    }

    // === Dependency Injection ===
    let api_key = match resolve_api_key(cli.api_key.as_deref(), &config.provider) {
        Some((key, source)) => {
            info!("Using API key from {:?}", source);
            Some(key)
        }
        None => {
            warn!(
                "No API key found (--api-key, provider.api_key or ${})",
                config.provider.api_key_env
            );
            None
        }
    };

    let gateway = Arc::new(
        OpenAiChatGateway::new(config.provider.base_url.clone())
            .with_timeout(config.request_timeout()),
    );
    let mut generate = GenerateWordUseCase::new(gateway, config.to_generation_params(api_key));
    if let Some(path) = &config.logging.conversation_log {
        match JsonlConversationLogger::new(path) {
            Some(logger) => generate = generate.with_conversation_logger(Arc::new(logger)),
            None => warn!("Conversation log {} could not be opened", path.display()),
        }
    }

    let share = ShareResultUseCase::new(
        Arc::new(ArboardClipboard::new()),
        Arc::new(SystemUrlOpener::detect()),
        Arc::new(FileCardExporter::new()),
        config.to_share_settings(),
    );

    match mode {
        RunMode::Interactive => {
            if cli.has_result_actions() {
                eprintln!("--copy, --share and --export-card only apply to one-shot mode");
            }
            let options = TuiOptions {
                transition: config.transition(),
                copy_feedback: config.copy_feedback(),
                model_name: config.provider.model.clone(),
            };
            let mut app = TuiApp::new(generate, share, options);
            app.run().await?;
            Ok(ExitCode::SUCCESS)
        }
        RunMode::OneShot(words) => run_once(&cli, words, &generate, &share).await,
    }
}

/// Command-line flags win over every config source
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(model) = &cli.model {
        config.provider.model = model.clone();
    }
    if let Some(variant) = cli.prompt {
        config.prompt.variant = variant.as_str().to_string();
    }
}

async fn run_once(
    cli: &Cli,
    words: &[String],
    generate: &GenerateWordUseCase,
    share: &ShareResultUseCase,
) -> Result<ExitCode> {
    let progress: Box<dyn ProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let result = match generate.execute_with_progress(words, progress.as_ref()).await {
        Ok(result) => result,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e.user_message()));
            return Ok(ExitCode::FAILURE);
        }
    };

    println!("{}", ConsoleFormatter::render(&result, cli.output.into()));
    share_result(cli, &result, share);
    Ok(ExitCode::SUCCESS)
}

/// Run the share flags; failures are reported but do not change the exit code
fn share_result(cli: &Cli, result: &GenerationResult, share: &ShareResultUseCase) {
    if cli.copy {
        report_copy(share.copy(result));
    }

    if let Some(target) = cli.share {
        match share.share(result, target) {
            Ok(outcome) => {
                if let Some(copy) = outcome.copy {
                    report_copy(copy);
                }
                eprintln!(
                    "{}",
                    ConsoleFormatter::format_share_opened(outcome.target, &outcome.url)
                );
            }
            Err(e) => {
                let url = target.url(&share.message(result));
                eprintln!("{}", ConsoleFormatter::format_error(&e.to_string()));
                eprintln!("  {}", url);
            }
        }
    }

    if let Some(dir) = &cli.export_card {
        match share.export_card_to(result, dir) {
            Ok(path) => eprintln!("Tarjeta guardada en {}", path.display()),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e.to_string())),
        }
    }
}

fn report_copy(outcome: CopyOutcome) {
    match outcome {
        CopyOutcome::Copied => eprintln!("¡Copiado al portapapeles!"),
        CopyOutcome::Fallback { text, reason } => {
            eprintln!("{}", ConsoleFormatter::format_copy_fallback(&text, &reason))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use imaginario_domain::PromptVariant;

    #[test]
    fn test_overrides_replace_config_values() {
        let cli = Cli::parse_from(["imaginario", "--model", "gpt-4o", "--prompt", "basic"]);
        let mut config = FileConfig::default();

        apply_overrides(&cli, &mut config);

        assert_eq!(config.provider.model, "gpt-4o");
        assert_eq!(config.prompt.parse_variant().0, PromptVariant::Basic);
    }

    #[test]
    fn test_no_overrides_keep_config() {
        let cli = Cli::parse_from(["imaginario"]);
        let mut config = FileConfig::default();
        config.provider.model = "from-file".to_string();

        apply_overrides(&cli, &mut config);

        assert_eq!(config.provider.model, "from-file");
    }
}
