//! Desktop adapters for sharing a result: clipboard, browser and card files

pub mod card_exporter;
pub mod clipboard;
pub mod opener;

pub use card_exporter::FileCardExporter;
pub use clipboard::ArboardClipboard;
pub use opener::SystemUrlOpener;
