//! Background controller task (Actor pattern)
//!
//! Owns the ReflectionController and processes commands from the TUI event
//! loop one at a time, so at most one generation is ever in flight.

use super::event::TuiCommand;
use imaginario_application::ReflectionController;
use tokio::sync::mpsc;
use tracing::debug;

pub(super) async fn controller_task(
    mut controller: ReflectionController,
    mut cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
) {
    while let Some(cmd) = cmd_rx.recv().await {
        match cmd {
            TuiCommand::SetWord { index, value } => controller.set_word(index, value),
            TuiCommand::Submit => controller.submit().await,
            TuiCommand::Reset => controller.reset().await,
            TuiCommand::Copy => controller.copy_result(),
            TuiCommand::Share(target) => controller.share_to(target),
            TuiCommand::ExportCard => controller.export_card(),
            TuiCommand::Quit => break,
        }
    }
    debug!("Controller task finished");
}
