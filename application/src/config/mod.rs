//! Application-level configuration.
//!
//! - [`GenerationParams`]: model, sampling, retry and prompt settings per request
//! - [`ShareSettings`]: app URL, hashtags and card directory for sharing

pub mod generation_params;
pub mod share_settings;

pub use generation_params::GenerationParams;
pub use share_settings::ShareSettings;
