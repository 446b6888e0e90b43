//! Commands sent from the TUI event loop to the controller task (Actor inbox)

use imaginario_domain::ShareTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiCommand {
    /// The word at `index` now reads `value`
    SetWord { index: usize, value: String },
    Submit,
    /// "Nombrar otra"
    Reset,
    Copy,
    Share(ShareTarget),
    ExportCard,
    /// Graceful shutdown
    Quit,
}
