//! Share card export port

use imaginario_domain::ShareCard;
use std::path::{Path, PathBuf};

/// Writes a rendered share card somewhere the user can pick it up
pub trait CardExporterPort: Send + Sync {
    /// Write `card` into `dir`, returning the created file's path
    fn export(&self, card: &ShareCard, dir: &Path) -> std::io::Result<PathBuf>;
}
