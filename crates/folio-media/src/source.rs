//! Media sources
//!
//! Locator classification. A pure function of the locator string.

/// Locators with this prefix are handed to the hosted embed player
pub const EMBED_PREFIX: &str = "https://www.youtube.com/embed/";

/// Which playback strategy a locator selects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    HostedEmbed,
    DirectMedia,
}

impl MediaKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::HostedEmbed => "hosted-embed",
            Self::DirectMedia => "direct-media",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classified media locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Delegated to the third-party embeddable player
    HostedEmbed(String),
    /// Played by a native element. May be empty ("nothing to play").
    DirectMedia(String),
}

impl MediaSource {
    /// Classify a locator.
    ///
    /// The prefix check is case-sensitive with no normalization: watch URLs,
    /// short links or a different scheme all fall through to direct media.
    /// A missing locator is an empty direct source.
    pub fn classify(locator: Option<&str>) -> Self {
        match locator {
            Some(l) if l.starts_with(EMBED_PREFIX) => Self::HostedEmbed(l.to_string()),
            Some(l) => Self::DirectMedia(l.to_string()),
            None => Self::DirectMedia(String::new()),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::HostedEmbed(_) => MediaKind::HostedEmbed,
            Self::DirectMedia(_) => MediaKind::DirectMedia,
        }
    }

    /// The locator exactly as given
    pub fn locator(&self) -> &str {
        match self {
            Self::HostedEmbed(l) | Self::DirectMedia(l) => l,
        }
    }

    /// False for an empty direct source
    pub fn has_media(&self) -> bool {
        !self.locator().is_empty()
    }
}

impl From<&str> for MediaSource {
    fn from(locator: &str) -> Self {
        Self::classify(Some(locator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_prefix_selects_hosted_embed() {
        for locator in [
            "https://www.youtube.com/embed/abc123",
            "https://www.youtube.com/embed/owW5fdBvuxc?si=Ejmi82nN5dLJmP84",
            "https://www.youtube.com/embed/",
        ] {
            assert_eq!(MediaSource::from(locator).kind(), MediaKind::HostedEmbed, "{locator}");
        }
    }

    #[test]
    fn test_everything_else_is_direct_media() {
        for locator in [
            "",
            "https://cdn.example.com/video.mp4",
            "https://www.youtube.com/watch?v=abc123",
            "https://youtu.be/abc123",
            "http://www.youtube.com/embed/abc123",
            "HTTPS://WWW.YOUTUBE.COM/EMBED/abc123",
            " https://www.youtube.com/embed/abc123",
            "https://youtube.com/embed/abc123",
            "https://www.youtube.com/embed",
        ] {
            assert_eq!(MediaSource::from(locator).kind(), MediaKind::DirectMedia, "{locator}");
        }
    }

    #[test]
    fn test_missing_locator_is_empty_direct_media() {
        let source = MediaSource::classify(None);

        assert_eq!(source, MediaSource::DirectMedia(String::new()));
        assert!(!source.has_media());
    }

    #[test]
    fn test_locator_is_kept_verbatim() {
        let locator = "https://www.youtube.com/embed/WvezKtp8z_w?si=HkaClZuhqfxFI_V5";
        assert_eq!(MediaSource::from(locator).locator(), locator);
    }
}
