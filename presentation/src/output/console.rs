//! Console output formatter for generation results

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use imaginario_domain::{ConfigIssue, GenerationResult, OutputFormat, Severity, ShareTarget};

const WIDTH: usize = 60;

/// Formats generation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the result in the requested output format
    pub fn render(result: &GenerationResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => Self::format(result),
            OutputFormat::Json => Self::format_json(result),
        }
    }

    /// Headline word followed by the "QUÉ ES" and "PARA ACOMPAÑARTE" sections
    pub fn format(result: &GenerationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(result.word()));
        output.push('\n');

        output.push_str(&Self::section_header("QUÉ ES"));
        output.push_str(&Self::wrap(result.definition(), WIDTH));
        output.push('\n');

        output.push_str(&Self::section_header("PARA ACOMPAÑARTE"));
        output.push_str(&Self::wrap(result.advice(), WIDTH));
        output.push('\n');

        output.push_str(&Self::footer());
        output
    }

    /// Format as JSON
    pub fn format_json(result: &GenerationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Inline error line for a failed generation
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Confirmation after a share link was opened
    pub fn format_share_opened(target: ShareTarget, url: &str) -> String {
        format!(
            "{} {}\n  {}",
            "Compartido en".green(),
            target.display_name().bold(),
            url.dimmed()
        )
    }

    /// Text the user has to copy by hand because the clipboard failed
    pub fn format_copy_fallback(text: &str, reason: &str) -> String {
        format!(
            "{} ({})\n\n{}\n",
            "No se pudo copiar al portapapeles; copia el texto manualmente".yellow(),
            reason.dimmed(),
            Self::indent(text, "  ")
        )
    }

    /// One line per configuration issue, errors in red and warnings in yellow
    pub fn format_config_issues(issues: &[ConfigIssue]) -> String {
        issues
            .iter()
            .map(|issue| match issue.severity {
                Severity::Error => format!("{} {}", "config error:".red().bold(), issue.message),
                Severity::Warning => {
                    format!("{} {}", "config warning:".yellow().bold(), issue.message)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn header(word: &str) -> String {
        let line = "=".repeat(WIDTH);
        format!(
            "{}\n{:^width$}\n{}",
            line.cyan(),
            word.bold(),
            line.cyan(),
            width = WIDTH
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(WIDTH).cyan())
    }

    /// Greedy word wrap at `width` characters
    fn wrap(text: &str, width: usize) -> String {
        let mut lines = Vec::new();
        let mut current = String::new();
        for word in text.split_whitespace() {
            let needed = if current.is_empty() {
                word.chars().count()
            } else {
                current.chars().count() + 1 + word.chars().count()
            };
            if needed > width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines.join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &GenerationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &GenerationResult) -> String {
        Self::format_json(result)
    }
}
