//! Screen flow
//!
//! The app has exactly two views. The express view collects the three words;
//! the reflection view shows a generated result.

use serde::{Deserialize, Serialize};

/// Which of the two views is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    /// Word entry
    #[default]
    Express,
    /// Result display
    Reflection,
}

impl ViewState {
    pub fn is_express(&self) -> bool {
        matches!(self, Self::Express)
    }

    pub fn is_reflection(&self) -> bool {
        matches!(self, Self::Reflection)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Express => "Expresa",
            Self::Reflection => "Reflexión",
        }
    }
}
