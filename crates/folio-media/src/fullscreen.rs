//! Fullscreen API
//!
//! The host side of fullscreen: one fullscreen element per document, changed
//! asynchronously, observed through change notifications.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use folio_dom::{dispatch_event, Event, EventTarget, EventType, Listener, ListenerId, ListenerRegistry, NodeId};

use crate::vendor::{FullscreenFeature, VendorApi};

/// Fullscreen error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FullscreenError {
    #[error("Fullscreen API not supported: {0}")]
    NotSupported(&'static str),

    #[error("Fullscreen not allowed")]
    NotAllowed,

    #[error("Element not in document: {0}")]
    NotInDocument(NodeId),

    #[error("Fullscreen request rejected: {0}")]
    Rejected(String),
}

/// Host owning the document-wide fullscreen element.
///
/// Requests and exits are asynchronous: they return once queued, and the
/// outcome is only visible through the element properties after a change
/// notification.
pub trait FullscreenHost: EventTarget {
    /// Whether the runtime exposes a feature
    fn supports(&self, feature: FullscreenFeature) -> bool;

    /// Ask for `target` to become the fullscreen element
    fn request_fullscreen(&self, api: VendorApi, target: NodeId) -> Result<(), FullscreenError>;

    /// Ask the document to leave fullscreen
    fn exit_fullscreen(&self, api: VendorApi) -> Result<(), FullscreenError>;

    /// Current fullscreen element as reported by one spelling. `None` when
    /// nothing is fullscreen or the spelling is not exposed.
    fn fullscreen_element(&self, api: VendorApi) -> Option<NodeId>;

    /// True iff any spelling reports a fullscreen element
    fn any_fullscreen_element(&self) -> bool {
        VendorApi::RANKED
            .into_iter()
            .any(|api| self.fullscreen_element(api).is_some())
    }
}

/// Fullscreen state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FullscreenState {
    #[default]
    Normal,
    Fullscreen,
    FullscreenRequested,
    ExitRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Enter(NodeId),
    Exit,
}

/// In-memory fullscreen host.
///
/// Queues requests and applies them on [`FullscreenManager::flush`], firing
/// the change event of every exposed spelling, the way a window system
/// answers some time after the request.
#[derive(Debug)]
pub struct FullscreenManager {
    vendors: Vec<VendorApi>,
    enabled: Cell<bool>,
    state: Cell<FullscreenState>,
    fullscreen_element: Cell<Option<NodeId>>,
    pending: RefCell<VecDeque<Transition>>,
    listeners: RefCell<ListenerRegistry>,
}

impl Default for FullscreenManager {
    fn default() -> Self {
        Self::with_vendors(&VendorApi::RANKED)
    }
}

impl FullscreenManager {
    /// Host exposing every spelling
    pub fn new() -> Self {
        Self::default()
    }

    /// Host exposing only the given spellings
    pub fn with_vendors(vendors: &[VendorApi]) -> Self {
        Self {
            vendors: vendors.to_vec(),
            enabled: Cell::new(true),
            state: Cell::new(FullscreenState::Normal),
            fullscreen_element: Cell::new(None),
            pending: RefCell::new(VecDeque::new()),
            listeners: RefCell::new(ListenerRegistry::new()),
        }
    }

    /// Host with no Fullscreen API at all
    pub fn unsupported() -> Self {
        Self::with_vendors(&[])
    }

    /// Allow or refuse requests (permissions policy)
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// Get current fullscreen state
    pub fn state(&self) -> FullscreenState {
        self.state.get()
    }

    /// Current fullscreen element, whatever the spelling
    pub fn current_element(&self) -> Option<NodeId> {
        self.fullscreen_element.get()
    }

    /// Check if currently fullscreen
    pub fn is_fullscreen(&self) -> bool {
        self.state.get() == FullscreenState::Fullscreen
    }

    /// Number of queued transitions
    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    /// Registered fullscreen change listeners, all spellings
    pub fn change_listener_count(&self) -> usize {
        let listeners = self.listeners.borrow();
        EventType::FULLSCREEN_CHANGES
            .into_iter()
            .map(|ty| listeners.count(ty))
            .sum()
    }

    /// Registered listeners of any type
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// User-agent exit (Escape key). Queued like any other exit.
    pub fn handle_escape(&self) -> bool {
        if self.fullscreen_element.get().is_some() {
            self.queue(Transition::Exit, FullscreenState::ExitRequested);
            true
        } else {
            false
        }
    }

    /// Apply queued transitions and notify listeners.
    ///
    /// Returns the number of transitions that changed the fullscreen element.
    pub fn flush(&self) -> usize {
        let mut applied = 0;
        loop {
            let Some(transition) = self.pending.borrow_mut().pop_front() else {
                break;
            };
            let previous = self.fullscreen_element.get();
            let next = match transition {
                Transition::Enter(target) => Some(target),
                Transition::Exit => None,
            };
            self.state.set(if next.is_some() {
                FullscreenState::Fullscreen
            } else {
                FullscreenState::Normal
            });
            if previous == next {
                continue;
            }

            self.fullscreen_element.set(next);
            applied += 1;

            tracing::debug!(?previous, ?next, "fullscreen element changed");
            self.notify(next.or(previous));
        }
        applied
    }

    fn queue(&self, transition: Transition, state: FullscreenState) {
        self.pending.borrow_mut().push_back(transition);
        self.state.set(state);
    }

    fn notify(&self, target: Option<NodeId>) {
        for api in &self.vendors {
            let event = Event::fullscreen_change(api.change_event(), target);
            dispatch_event(&self.listeners, &event);
        }
    }
}

impl EventTarget for FullscreenManager {
    fn add_event_listener(&self, event_type: EventType, listener: Listener) -> ListenerId {
        self.listeners.borrow_mut().add(event_type, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }
}

impl FullscreenHost for FullscreenManager {
    fn supports(&self, feature: FullscreenFeature) -> bool {
        self.vendors.contains(&feature.api())
    }

    fn request_fullscreen(&self, api: VendorApi, target: NodeId) -> Result<(), FullscreenError> {
        if !self.supports(FullscreenFeature::Request(api)) {
            return Err(FullscreenError::NotSupported(api.request_method()));
        }
        if !self.enabled.get() {
            return Err(FullscreenError::NotAllowed);
        }
        self.queue(Transition::Enter(target), FullscreenState::FullscreenRequested);
        Ok(())
    }

    fn exit_fullscreen(&self, api: VendorApi) -> Result<(), FullscreenError> {
        if !self.supports(FullscreenFeature::Exit(api)) {
            return Err(FullscreenError::NotSupported(api.exit_method()));
        }
        self.queue(Transition::Exit, FullscreenState::ExitRequested);
        Ok(())
    }

    fn fullscreen_element(&self, api: VendorApi) -> Option<NodeId> {
        if self.vendors.contains(&api) {
            self.fullscreen_element.get()
        } else {
            None
        }
    }
}
