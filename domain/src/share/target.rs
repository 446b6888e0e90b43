//! Share targets and their links

use super::message::ShareMessage;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A social platform a word can be shared to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareTarget {
    Facebook,
    Twitter,
    WhatsApp,
    Instagram,
    TikTok,
}

impl ShareTarget {
    pub fn all() -> [ShareTarget; 5] {
        [
            Self::Facebook,
            Self::Twitter,
            Self::WhatsApp,
            Self::Instagram,
            Self::TikTok,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::WhatsApp => "whatsapp",
            Self::Instagram => "instagram",
            Self::TikTok => "tiktok",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "X",
            Self::WhatsApp => "WhatsApp",
            Self::Instagram => "Instagram",
            Self::TikTok => "TikTok",
        }
    }

    /// Key used in the TUI reflection screen
    pub fn shortcut(&self) -> char {
        match self {
            Self::Facebook => 'f',
            Self::Twitter => 'x',
            Self::WhatsApp => 'w',
            Self::Instagram => 'i',
            Self::TikTok => 't',
        }
    }

    pub fn from_shortcut(c: char) -> Option<Self> {
        Self::all().into_iter().find(|t| t.shortcut() == c)
    }

    /// Platforms without a prefilled-post link: the text is copied to the
    /// clipboard and the home page is opened instead.
    pub fn copies_text_first(&self) -> bool {
        matches!(self, Self::Instagram | Self::TikTok)
    }

    /// Link that opens the platform's share flow
    pub fn url(&self, message: &ShareMessage) -> String {
        let text = message.share_text();
        let app_url = urlencoding::encode(message.app_url());
        match self {
            Self::Facebook => format!(
                "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
                app_url,
                urlencoding::encode(&text)
            ),
            Self::Twitter => format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(&text),
                app_url
            ),
            Self::WhatsApp => format!(
                "https://wa.me/?text={}",
                urlencoding::encode(&format!("{} {}", text, message.app_url()))
            ),
            Self::Instagram => "https://www.instagram.com/".to_string(),
            Self::TikTok => "https://www.tiktok.com/".to_string(),
        }
    }
}

impl std::fmt::Display for ShareTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShareTarget {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "facebook" | "fb" => Ok(Self::Facebook),
            "twitter" | "x" => Ok(Self::Twitter),
            "whatsapp" => Ok(Self::WhatsApp),
            "instagram" => Ok(Self::Instagram),
            "tiktok" => Ok(Self::TikTok),
            other => Err(DomainError::UnknownShareTarget(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::GenerationResult;

    fn message() -> ShareMessage {
        let result = GenerationResult::new("vaciesper", "un hueco & algo", "respira").unwrap();
        ShareMessage::new(&result, "#A", "https://example.org")
    }

    #[test]
    fn test_facebook_url_encodes_components() {
        let url = ShareTarget::Facebook.url(&message());
        assert!(url.starts_with(
            "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fexample.org&quote="
        ));
        assert!(url.contains("hueco%20%26%20algo"));
        assert!(!url.contains('\n'));
    }

    #[test]
    fn test_twitter_url_puts_url_last() {
        let url = ShareTarget::Twitter.url(&message());
        assert!(url.starts_with("https://twitter.com/intent/tweet?text=Mi%20palabra"));
        assert!(url.ends_with("&url=https%3A%2F%2Fexample.org"));
    }

    #[test]
    fn test_whatsapp_url_appends_app_url_to_text() {
        let url = ShareTarget::WhatsApp.url(&message());
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.ends_with("%20https%3A%2F%2Fexample.org"));
    }

    #[test]
    fn test_copy_first_targets_open_home_pages() {
        assert!(ShareTarget::Instagram.copies_text_first());
        assert!(ShareTarget::TikTok.copies_text_first());
        assert!(!ShareTarget::WhatsApp.copies_text_first());
        assert_eq!(ShareTarget::TikTok.url(&message()), "https://www.tiktok.com/");
    }

    #[test]
    fn test_parse_targets() {
        assert_eq!("X".parse::<ShareTarget>().unwrap(), ShareTarget::Twitter);
        assert_eq!("whatsapp".parse::<ShareTarget>().unwrap(), ShareTarget::WhatsApp);
        assert!(matches!(
            "myspace".parse::<ShareTarget>(),
            Err(DomainError::UnknownShareTarget(_))
        ));
    }

    #[test]
    fn test_shortcuts_are_unique() {
        for target in ShareTarget::all() {
            assert_eq!(ShareTarget::from_shortcut(target.shortcut()), Some(target));
        }
        assert_eq!(ShareTarget::from_shortcut('r'), None);
    }
}
