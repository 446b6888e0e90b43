//! Progress display for one-shot generation

pub mod reporter;
