//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod card_exporter;
pub mod clipboard;
pub mod conversation_logger;
pub mod llm_gateway;
pub mod progress;
pub mod ui_event;
pub mod url_opener;
