//! Share domain
//!
//! Everything needed to pass a generated word on to someone else: the share
//! text, the clipboard text, platform share links and the text card that can
//! be exported to a file. Nothing here performs I/O.

mod card;
mod message;
mod target;

pub use card::{CARD_DEFINITION_LIMIT, ShareCard};
pub use message::{DEFAULT_APP_URL, DEFAULT_HASHTAGS, ShareMessage};
pub use target::ShareTarget;
