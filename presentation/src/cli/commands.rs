//! CLI command definitions

use clap::{Parser, ValueEnum};
use imaginario_domain::{PromptVariant, ShareTarget, WORD_COUNT};
use std::path::PathBuf;

/// Output format for one-shot results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Sectioned text with colors
    Text,
    /// The result as a JSON object
    Json,
}

impl From<OutputFormat> for imaginario_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for El Imaginario
#[derive(Parser, Debug)]
#[command(name = "imaginario")]
#[command(author, version, about = "Tres palabras. Un estado emocional.")]
#[command(long_about = r#"
El Imaginario turns three words about how you feel into an invented word,
a short definition and a reflection to keep you company.

Run without words to open the interactive screen, or pass exactly three
words for a one-shot answer.

The API key is read from (in priority order):
1. --api-key <KEY>
2. provider.api_key in a config file
3. the environment variable named by provider.api_key_env (OPENAI_API_KEY)

Configuration files are loaded from (lowest to highest priority):
1. ~/.config/imaginario/config.toml       Global config
2. ./imaginario.toml or ./.imaginario.toml  Project-level config
3. --config <path>                          Explicit config file
4. IMAGINARIO_* environment variables       (e.g. IMAGINARIO_PROVIDER__MODEL)

Example:
  imaginario
  imaginario vacío esperanza cansancio
  imaginario --output json --copy nostalgia calma lluvia
  imaginario --share whatsapp miedo ilusión cambio
"#)]
pub struct Cli {
    /// Three words describing how you feel (omit to open the interactive screen)
    #[arg(value_name = "WORD")]
    pub words: Vec<String>,

    /// Output format for one-shot results
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Copy the share text to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Open a share link (facebook, twitter, whatsapp, instagram, tiktok)
    #[arg(long, value_name = "TARGET")]
    pub share: Option<ShareTarget>,

    /// Write a share card text file into DIR
    #[arg(long, value_name = "DIR")]
    pub export_card: Option<PathBuf>,

    /// OpenAI API key (overrides config and environment)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Chat model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Prompt template (basic, neutral, condensed)
    #[arg(long, value_name = "VARIANT")]
    pub prompt: Option<PromptVariant>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

/// What the binary should do with the given words
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode<'a> {
    /// No words: open the TUI
    Interactive,
    /// Exactly three words: generate once and print
    OneShot(&'a [String]),
}

impl Cli {
    /// Decide between TUI and one-shot mode from the positional words
    pub fn run_mode(&self) -> Result<RunMode<'_>, String> {
        match self.words.len() {
            0 => Ok(RunMode::Interactive),
            WORD_COUNT => Ok(RunMode::OneShot(&self.words)),
            n => Err(format!(
                "se esperaban {} palabras, se recibieron {}",
                WORD_COUNT, n
            )),
        }
    }

    /// Whether any flag only makes sense with a generated result
    pub fn has_result_actions(&self) -> bool {
        self.copy || self.share.is_some() || self.export_card.is_some()
    }
}
