//! Output formatter trait

use imaginario_domain::GenerationResult;

/// Trait for formatting generation results
pub trait OutputFormatter {
    /// Format the result as sectioned text
    fn format(&self, result: &GenerationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &GenerationResult) -> String;
}
