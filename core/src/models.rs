//! Domain models shared by the registration forms.
//!
//! # Categories
//!
//! - **Vocabularies** - fixed option lists (genres, positions, instruments, experience)
//! - **Social Links** - optional profile links attached to a draft
//! - **Notices** - blocking user-facing messages (success or failure)

use serde::{Deserialize, Serialize};

// =============================================================================
// Vocabularies
// =============================================================================

/// Musical genres offered by both forms.
pub const GENRES: &[&str] = &[
    "Rock",
    "Jazz",
    "Blues",
    "Classical",
    "Pop",
    "R&B",
    "Hip Hop",
    "Electronic",
    "Country",
    "Folk",
    "Metal",
];

/// Positions a band can be looking for.
pub const BAND_POSITIONS: &[&str] = &[
    "Lead Vocalist",
    "Backing Vocals",
    "Lead Guitar",
    "Rhythm Guitar",
    "Bass Guitar",
    "Drums",
    "Keyboard",
    "Piano",
    "Saxophone",
    "Trumpet",
    "Violin",
    "Other",
];

/// Primary instruments a musician can pick (single select).
pub const INSTRUMENTS: &[&str] = &[
    "Guitar",
    "Bass",
    "Drums",
    "Vocals",
    "Piano/Keyboard",
    "Saxophone",
    "Trumpet",
    "Violin",
    "Other",
];

/// Experience buckets as `(value, label)` pairs.
pub const EXPERIENCE_LEVELS: &[(&str, &str)] = &[
    ("0-2", "0-2 years"),
    ("3-5", "3-5 years"),
    ("5-10", "5-10 years"),
    ("10+", "10+ years"),
];

// =============================================================================
// Social Links
// =============================================================================

/// A social or web presence a profile can link to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SocialNetwork {
    Instagram,
    Youtube,
    Spotify,
    Website,
}

impl SocialNetwork {
    /// Label shown before the input.
    pub fn label(&self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "Instagram:",
            SocialNetwork::Youtube => "YouTube:",
            SocialNetwork::Spotify => "Spotify:",
            SocialNetwork::Website => "Website:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "@username",
            SocialNetwork::Youtube => "Channel URL",
            SocialNetwork::Spotify => "Artist URL",
            SocialNetwork::Website => "Your band's website",
        }
    }
}

/// Optional social links of a draft.
///
/// `website` is `None` for forms that do not offer it, and is then left
/// out of the encoded payload entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub instagram: String,
    pub youtube: String,
    pub spotify: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Links with a website slot.
    pub fn with_website() -> Self {
        Self {
            website: Some(String::new()),
            ..Self::default()
        }
    }

    pub fn get(&self, network: SocialNetwork) -> Option<&str> {
        match network {
            SocialNetwork::Instagram => Some(&self.instagram),
            SocialNetwork::Youtube => Some(&self.youtube),
            SocialNetwork::Spotify => Some(&self.spotify),
            SocialNetwork::Website => self.website.as_deref(),
        }
    }

    /// Set a link. Returns `false` if this draft has no slot for `network`.
    pub fn set(&mut self, network: SocialNetwork, value: String) -> bool {
        match network {
            SocialNetwork::Instagram => self.instagram = value,
            SocialNetwork::Youtube => self.youtube = value,
            SocialNetwork::Spotify => self.spotify = value,
            SocialNetwork::Website => match self.website.as_mut() {
                Some(slot) => *slot = value,
                None => return false,
            },
        }
        true
    }
}

// =============================================================================
// Notices
// =============================================================================

/// Severity of a user-facing notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    /// Registration went through.
    Success,
    /// Upload policy or submission failure.
    Error,
}

impl NoticeLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "notice-success",
            NoticeLevel::Error => "notice-error",
        }
    }

    /// Get emoji prefix for display.
    pub fn emoji(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Error => "❌",
        }
    }
}

/// A blocking message the user has to dismiss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(GENRES.len(), 11);
        assert_eq!(BAND_POSITIONS.len(), 12);
        assert_eq!(INSTRUMENTS.len(), 9);
        assert_eq!(EXPERIENCE_LEVELS.len(), 4);
    }

    #[test]
    fn test_website_slot_only_when_offered() {
        let mut musician = SocialLinks::default();
        assert!(!musician.set(SocialNetwork::Website, "https://x.io".into()));
        assert_eq!(musician.get(SocialNetwork::Website), None);

        let mut band = SocialLinks::with_website();
        assert!(band.set(SocialNetwork::Website, "https://x.io".into()));
        assert_eq!(band.get(SocialNetwork::Website), Some("https://x.io"));
    }

    #[test]
    fn test_social_links_serialization() {
        let mut links = SocialLinks::default();
        links.set(SocialNetwork::Instagram, "@ana".into());
        let json = serde_json::to_value(&links).unwrap();
        assert_eq!(json["instagram"], "@ana");
        assert_eq!(json["youtube"], "");
        assert!(json.get("website").is_none());

        let json = serde_json::to_value(SocialLinks::with_website()).unwrap();
        assert_eq!(json["website"], "");
    }
}
