//! Adaptive media player
//!
//! Picks a playback strategy from the locator: hosted embed (nothing local
//! to manage) or direct media on a [`PlaybackSurface`].

use std::rc::Rc;

use folio_dom::NodeId;

use crate::embed::EmbedFrame;
use crate::fullscreen::FullscreenHost;
use crate::source::{MediaKind, MediaSource};
use crate::surface::{PlaybackSurface, ToggleRequest};

/// Label used when the caller gives none
pub const DEFAULT_VIDEO_LABEL: &str = "Video";

/// Native playback element description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectView {
    /// `None` when there is nothing to play
    pub src: Option<String>,
    pub label: String,
    pub controls: bool,
}

/// What to render for a locator. Pure; no host involved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaView {
    Embed(EmbedFrame),
    Direct(DirectView),
}

impl MediaView {
    pub fn new(source: Option<&str>, title: Option<&str>) -> Self {
        Self::from_source(&MediaSource::classify(source), title)
    }

    pub fn from_source(source: &MediaSource, title: Option<&str>) -> Self {
        match source {
            MediaSource::HostedEmbed(locator) => Self::Embed(EmbedFrame::new(locator, title)),
            MediaSource::DirectMedia(locator) => Self::Direct(DirectView {
                src: Some(locator.clone()).filter(|l| !l.is_empty()),
                label: title
                    .filter(|t| !t.is_empty())
                    .unwrap_or(DEFAULT_VIDEO_LABEL)
                    .to_string(),
                controls: true,
            }),
        }
    }

    pub fn kind(&self) -> MediaKind {
        match self {
            Self::Embed(_) => MediaKind::HostedEmbed,
            Self::Direct(_) => MediaKind::DirectMedia,
        }
    }
}

enum Mode<H: FullscreenHost + 'static> {
    Embed(EmbedFrame),
    Direct {
        view: DirectView,
        surface: PlaybackSurface<H>,
    },
}

/// Mounted player bound to a container node
pub struct AdaptiveMediaPlayer<H: FullscreenHost + 'static> {
    host: Rc<H>,
    container: NodeId,
    mode: Mode<H>,
}

impl<H: FullscreenHost + 'static> AdaptiveMediaPlayer<H> {
    /// Mount a player. Direct media gets a playback surface on `container`.
    pub fn mount(host: &Rc<H>, container: NodeId, source: Option<&str>, title: Option<&str>) -> Self {
        let mode = Self::build(host, container, MediaView::new(source, title));
        tracing::debug!(%container, kind = %mode_kind(&mode), "media player mounted");
        Self {
            host: Rc::clone(host),
            container,
            mode,
        }
    }

    fn build(host: &Rc<H>, container: NodeId, view: MediaView) -> Mode<H> {
        match view {
            MediaView::Embed(frame) => Mode::Embed(frame),
            MediaView::Direct(view) => Mode::Direct {
                view,
                surface: PlaybackSurface::mount(host, container),
            },
        }
    }

    /// Re-classify after a locator change.
    ///
    /// Staying on direct media keeps the surface and its observed state;
    /// switching strategy replaces it and releases its listeners.
    pub fn set_source(&mut self, source: Option<&str>, title: Option<&str>) {
        match MediaView::new(source, title) {
            MediaView::Direct(next) if matches!(self.mode, Mode::Direct { .. }) => {
                if let Mode::Direct { view, .. } = &mut self.mode {
                    *view = next;
                }
            }
            next => self.mode = Self::build(&self.host, self.container, next),
        }
        tracing::debug!(container = %self.container, kind = %self.kind(), "media source changed");
    }

    pub fn kind(&self) -> MediaKind {
        mode_kind(&self.mode)
    }

    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Current render description
    pub fn view(&self) -> MediaView {
        match &self.mode {
            Mode::Embed(frame) => MediaView::Embed(frame.clone()),
            Mode::Direct { view, .. } => MediaView::Direct(view.clone()),
        }
    }

    /// Observed fullscreen state. `None` for embeds, which keep no state.
    pub fn is_fullscreen(&self) -> Option<bool> {
        self.surface().map(PlaybackSurface::is_fullscreen)
    }

    pub fn surface(&self) -> Option<&PlaybackSurface<H>> {
        match &self.mode {
            Mode::Embed(_) => None,
            Mode::Direct { surface, .. } => Some(surface),
        }
    }

    /// Toggle fullscreen on the direct media container
    pub fn toggle_fullscreen(&self) -> ToggleRequest {
        match &self.mode {
            Mode::Embed(_) => ToggleRequest::Delegated,
            Mode::Direct { surface, .. } => surface.toggle_fullscreen(),
        }
    }

    /// Release the player and any listeners it holds
    pub fn unmount(self) {
        tracing::debug!(container = %self.container, "media player unmounted");
    }
}

fn mode_kind<H: FullscreenHost + 'static>(mode: &Mode<H>) -> MediaKind {
    match mode {
        Mode::Embed(_) => MediaKind::HostedEmbed,
        Mode::Direct { .. } => MediaKind::DirectMedia,
    }
}

impl<H: FullscreenHost + 'static> std::fmt::Debug for AdaptiveMediaPlayer<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdaptiveMediaPlayer")
            .field("container", &self.container)
            .field("view", &self.view())
            .field("surface", &self.surface())
            .finish()
    }
}
