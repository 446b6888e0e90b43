//! Use cases (application services)

pub mod generate_word;
pub mod reflection_controller;
pub mod retry_executor;
pub mod share_result;
