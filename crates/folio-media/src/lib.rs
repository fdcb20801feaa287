//! folio Media
//!
//! Media playback for the portfolio page.
//!
//! Features:
//! - Media source classification (hosted embed vs. direct media)
//! - Hosted embed frame description
//! - Vendor fullscreen capability table
//! - Playback surface with observed fullscreen state
//! - Adaptive media player tying it together

pub mod source;
pub mod embed;
pub mod vendor;
pub mod fullscreen;
pub mod surface;
pub mod player;

pub use source::{MediaKind, MediaSource, EMBED_PREFIX};
pub use embed::{AspectRatio, EmbedFrame, ReferrerPolicy, EMBED_PERMISSIONS};
pub use vendor::{FullscreenCapabilities, FullscreenFeature, VendorApi};
pub use fullscreen::{FullscreenError, FullscreenHost, FullscreenManager, FullscreenState};
pub use surface::{PlaybackSurface, ToggleRequest};
pub use player::{AdaptiveMediaPlayer, DirectView, MediaView};
