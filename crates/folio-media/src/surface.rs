//! Playback surface
//!
//! Native playback region for direct media. Owns a cached observation of the
//! host's fullscreen state, never the state itself.

use std::cell::Cell;
use std::rc::{Rc, Weak};

use folio_dom::{Event, EventType, ListenerId, NodeId};

use crate::fullscreen::FullscreenHost;
use crate::vendor::{FullscreenCapabilities, VendorApi};

/// What a toggle asked the host for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRequest {
    /// Entering fullscreen on the container with this spelling
    Enter(VendorApi),
    /// Leaving fullscreen on the document with this spelling
    Exit(VendorApi),
    /// No usable spelling; nothing was done
    Unsupported,
    /// Fullscreen belongs to an embedded player
    Delegated,
}

/// Container region of a native player.
///
/// Listens to every fullscreen change spelling from mount until drop.
pub struct PlaybackSurface<H: FullscreenHost + 'static> {
    host: Rc<H>,
    container: NodeId,
    capabilities: FullscreenCapabilities,
    is_fullscreen: Rc<Cell<bool>>,
    listeners: Vec<ListenerId>,
}

impl<H: FullscreenHost + 'static> PlaybackSurface<H> {
    /// Mount on `container`: probe capabilities and register the change
    /// listeners. The flag starts false.
    pub fn mount(host: &Rc<H>, container: NodeId) -> Self {
        let capabilities = FullscreenCapabilities::probe(|feature| host.supports(feature));
        let is_fullscreen = Rc::new(Cell::new(false));

        let listeners = EventType::FULLSCREEN_CHANGES
            .into_iter()
            .map(|event_type| {
                let weak: Weak<H> = Rc::downgrade(host);
                let flag = Rc::clone(&is_fullscreen);
                host.add_event_listener(
                    event_type,
                    Rc::new(move |event: &Event| {
                        let Some(host) = weak.upgrade() else {
                            return;
                        };
                        let observed = host.any_fullscreen_element();
                        flag.set(observed);
                        tracing::debug!(%container, event = %event.event_type, observed, "fullscreen change observed");
                    }),
                )
            })
            .collect();

        tracing::debug!(%container, "playback surface mounted");
        Self {
            host: Rc::clone(host),
            container,
            capabilities,
            is_fullscreen,
            listeners,
        }
    }

    /// Fullscreen target
    pub fn container(&self) -> NodeId {
        self.container
    }

    /// Last observed fullscreen state
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen.get()
    }

    pub fn capabilities(&self) -> FullscreenCapabilities {
        self.capabilities
    }

    /// Ask the host to enter or leave fullscreen.
    ///
    /// Fire-and-forget: the flag only moves when a change notification
    /// arrives. Host refusals are logged and dropped.
    pub fn toggle_fullscreen(&self) -> ToggleRequest {
        if !self.is_fullscreen.get() {
            let Some(api) = self.capabilities.request else {
                return ToggleRequest::Unsupported;
            };
            if let Err(err) = self.host.request_fullscreen(api, self.container) {
                tracing::debug!(container = %self.container, %err, "fullscreen request failed");
            }
            ToggleRequest::Enter(api)
        } else {
            let Some(api) = self.capabilities.exit else {
                return ToggleRequest::Unsupported;
            };
            if let Err(err) = self.host.exit_fullscreen(api) {
                tracing::debug!(container = %self.container, %err, "fullscreen exit failed");
            }
            ToggleRequest::Exit(api)
        }
    }

    /// Release the surface and its listeners
    pub fn unmount(self) {}
}

impl<H: FullscreenHost + 'static> Drop for PlaybackSurface<H> {
    fn drop(&mut self) {
        for id in self.listeners.drain(..) {
            self.host.remove_event_listener(id);
        }
        tracing::debug!(container = %self.container, "playback surface unmounted");
    }
}

impl<H: FullscreenHost + 'static> std::fmt::Debug for PlaybackSurface<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackSurface")
            .field("container", &self.container)
            .field("capabilities", &self.capabilities)
            .field("is_fullscreen", &self.is_fullscreen.get())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fullscreen::FullscreenManager;

    fn container() -> NodeId {
        NodeId::from_raw(7)
    }

    #[test]
    fn test_mount_registers_four_listeners() {
        let host = Rc::new(FullscreenManager::new());
        let surface = PlaybackSurface::mount(&host, container());

        assert_eq!(host.change_listener_count(), 4);
        assert!(!surface.is_fullscreen());
    }

    #[test]
    fn test_mount_unmount_leaves_no_listeners() {
        let host = Rc::new(FullscreenManager::new());
        PlaybackSurface::mount(&host, container()).unmount();

        assert_eq!(host.listener_count(), 0);
    }

    #[test]
    fn test_toggle_does_not_touch_flag() {
        let host = Rc::new(FullscreenManager::new());
        let surface = PlaybackSurface::mount(&host, container());

        assert_eq!(surface.toggle_fullscreen(), ToggleRequest::Enter(VendorApi::Standard));
        assert!(!surface.is_fullscreen());

        host.flush();
        assert!(surface.is_fullscreen());
        assert_eq!(host.current_element(), Some(container()));
    }

    #[test]
    fn test_toggle_exits_when_fullscreen() {
        let host = Rc::new(FullscreenManager::new());
        let surface = PlaybackSurface::mount(&host, container());
        surface.toggle_fullscreen();
        host.flush();

        assert_eq!(surface.toggle_fullscreen(), ToggleRequest::Exit(VendorApi::Standard));
        assert!(surface.is_fullscreen());
        host.flush();
        assert!(!surface.is_fullscreen());
    }

    #[test]
    fn test_toggle_without_api_is_noop() {
        let host = Rc::new(FullscreenManager::unsupported());
        let surface = PlaybackSurface::mount(&host, container());

        assert_eq!(surface.toggle_fullscreen(), ToggleRequest::Unsupported);
        assert_eq!(host.pending(), 0);
        host.flush();
        assert!(!surface.is_fullscreen());
    }

    #[test]
    fn test_vendor_fallback_is_used() {
        let host = Rc::new(FullscreenManager::with_vendors(&[VendorApi::Moz]));
        let surface = PlaybackSurface::mount(&host, container());

        assert_eq!(surface.toggle_fullscreen(), ToggleRequest::Enter(VendorApi::Moz));
        host.flush();
        assert!(surface.is_fullscreen());
    }

    #[test]
    fn test_refused_request_is_swallowed() {
        let host = Rc::new(FullscreenManager::new());
        host.set_enabled(false);
        let surface = PlaybackSurface::mount(&host, container());

        assert_eq!(surface.toggle_fullscreen(), ToggleRequest::Enter(VendorApi::Standard));
        host.flush();
        assert!(!surface.is_fullscreen());
    }
}
