//! Hosted embed frame
//!
//! What the page hands to the third-party player. Fullscreen for embeds is
//! the embedded player's business; no local state is kept.

/// Capabilities granted to the embedded player (`allow` attribute)
pub const EMBED_PERMISSIONS: [&str; 7] = [
    "accelerometer",
    "autoplay",
    "clipboard-write",
    "encrypted-media",
    "gyroscope",
    "picture-in-picture",
    "web-share",
];

/// Title used when the caller gives none
pub const DEFAULT_EMBED_TITLE: &str = "YouTube video player";

/// Referrer policy for requests to the embed host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferrerPolicy {
    NoReferrer,
    Origin,
    #[default]
    StrictOriginWhenCrossOrigin,
}

impl ReferrerPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NoReferrer => "no-referrer",
            Self::Origin => "origin",
            Self::StrictOriginWhenCrossOrigin => "strict-origin-when-cross-origin",
        }
    }
}

/// Fixed frame aspect ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AspectRatio {
    pub width: u32,
    pub height: u32,
}

impl AspectRatio {
    pub const VIDEO: AspectRatio = AspectRatio { width: 16, height: 9 };

    /// CSS `aspect-ratio` value
    pub fn css(self) -> String {
        format!("{} / {}", self.width, self.height)
    }
}

/// Responsive frame hosting the external player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedFrame {
    pub src: String,
    pub title: String,
    pub aspect_ratio: AspectRatio,
    pub permissions: &'static [&'static str],
    pub allow_fullscreen: bool,
    pub referrer_policy: ReferrerPolicy,
}

impl EmbedFrame {
    /// Frame for an embed locator. An empty title falls back to the default.
    pub fn new(src: &str, title: Option<&str>) -> Self {
        Self {
            src: src.to_string(),
            title: title
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_EMBED_TITLE)
                .to_string(),
            aspect_ratio: AspectRatio::VIDEO,
            permissions: &EMBED_PERMISSIONS,
            allow_fullscreen: true,
            referrer_policy: ReferrerPolicy::StrictOriginWhenCrossOrigin,
        }
    }

    /// `allow` attribute value
    pub fn allow_attribute(&self) -> String {
        self.permissions.join("; ")
    }
}
