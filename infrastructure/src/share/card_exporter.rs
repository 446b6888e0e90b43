//! Writes share cards as plain-text files

use imaginario_application::ports::card_exporter::CardExporterPort;
use imaginario_domain::ShareCard;
use std::path::{Path, PathBuf};
use tracing::info;

/// Exports a card as `<dir>/mi-palabra-emocional-<word>.txt`, creating `dir`
/// if needed and overwriting an earlier export of the same word.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileCardExporter;

impl FileCardExporter {
    pub fn new() -> Self {
        Self
    }
}

impl CardExporterPort for FileCardExporter {
    fn export(&self, card: &ShareCard, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(card.file_name());
        std::fs::write(&path, card.render())?;
        info!("Exported share card to {}", path.display());
        Ok(path)
    }
}
