//! Viewport scrolling
//!
//! Scroll position, the window-side host, and the section tracker that turns
//! scroll offsets into a slide index.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use folio_dom::{dispatch_event, Event, EventTarget, EventType, Listener, ListenerId, ListenerRegistry};

/// Smooth scroll duration
const SMOOTH_SCROLL_MS: f64 = 300.0;

/// Window exposing vertical scroll metrics
pub trait ViewportHost: EventTarget {
    /// Vertical scroll offset (`scrollY`)
    fn scroll_y(&self) -> f64;

    /// Viewport height (`innerHeight`)
    fn inner_height(&self) -> f64;
}

/// Which full-viewport slide `scroll_y` falls in.
///
/// `None` when the viewport height is not a positive finite number or the
/// offset is not finite. Not clamped to the number of sections; overscroll
/// gives negative indices.
pub fn active_section_index(scroll_y: f64, viewport_height: f64) -> Option<i64> {
    if !scroll_y.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }
    Some((scroll_y / viewport_height).floor() as i64)
}

/// Scroll behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
    Instant,
}

/// Scroll position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    pub x: f64,
    pub y: f64,
}

/// Scroll options
#[derive(Debug, Clone, Default)]
pub struct ScrollOptions {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub behavior: ScrollBehavior,
}

#[derive(Debug, Clone, Copy)]
struct SmoothScroll {
    from: ScrollPosition,
    to: ScrollPosition,
    progress: f64,
}

/// In-memory window.
///
/// Fires a `scroll` event whenever the position changes, once per animation
/// frame during smooth scrolls.
#[derive(Debug)]
pub struct ScrollManager {
    position: Cell<ScrollPosition>,
    inner_height: Cell<f64>,
    smooth: Cell<Option<SmoothScroll>>,
    listeners: RefCell<ListenerRegistry>,
}

impl ScrollManager {
    pub fn new(inner_height: f64) -> Self {
        Self {
            position: Cell::new(ScrollPosition::default()),
            inner_height: Cell::new(inner_height),
            smooth: Cell::new(None),
            listeners: RefCell::new(ListenerRegistry::new()),
        }
    }

    /// Get current scroll position
    pub fn position(&self) -> ScrollPosition {
        self.position.get()
    }

    /// Resize the viewport. Fires no scroll event.
    pub fn set_inner_height(&self, inner_height: f64) {
        self.inner_height.set(inner_height);
    }

    /// Scroll to position
    pub fn scroll_to(&self, options: ScrollOptions) {
        let from = self.position.get();
        let target = ScrollPosition {
            x: options.left.unwrap_or(from.x),
            y: options.top.unwrap_or(from.y),
        };

        match options.behavior {
            ScrollBehavior::Instant | ScrollBehavior::Auto => {
                self.smooth.set(None);
                self.move_to(target);
            }
            ScrollBehavior::Smooth => {
                self.smooth.set(Some(SmoothScroll {
                    from,
                    to: target,
                    progress: 0.0,
                }));
            }
        }
    }

    /// Scroll by delta
    pub fn scroll_by(&self, dx: f64, dy: f64, behavior: ScrollBehavior) {
        let position = self.position.get();
        self.scroll_to(ScrollOptions {
            left: Some(position.x + dx),
            top: Some(position.y + dy),
            behavior,
        });
    }

    /// Advance a smooth scroll by one frame
    pub fn update(&self, delta_ms: f64) -> bool {
        let Some(mut smooth) = self.smooth.get() else {
            return false;
        };

        smooth.progress = (smooth.progress + delta_ms / SMOOTH_SCROLL_MS).min(1.0);
        if smooth.progress >= 1.0 {
            self.smooth.set(None);
            self.move_to(smooth.to);
            return true;
        }

        // Ease-out interpolation
        let t = 1.0 - (1.0 - smooth.progress).powi(3);
        self.smooth.set(Some(smooth));
        self.move_to(ScrollPosition {
            x: smooth.from.x + (smooth.to.x - smooth.from.x) * t,
            y: smooth.from.y + (smooth.to.y - smooth.from.y) * t,
        });
        true
    }

    /// Check if smooth scrolling
    pub fn is_scrolling(&self) -> bool {
        self.smooth.get().is_some()
    }

    /// Registered listeners of any type
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn move_to(&self, target: ScrollPosition) {
        if self.position.get() == target {
            return;
        }
        self.position.set(target);
        dispatch_event(&self.listeners, &Event::scroll());
    }
}

impl EventTarget for ScrollManager {
    fn add_event_listener(&self, event_type: EventType, listener: Listener) -> ListenerId {
        self.listeners.borrow_mut().add(event_type, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.listeners.borrow_mut().remove(id)
    }
}

impl ViewportHost for ScrollManager {
    fn scroll_y(&self) -> f64 {
        self.position.get().y
    }

    fn inner_height(&self) -> f64 {
        self.inner_height.get()
    }
}

/// Tracks which viewport-height slide is in view.
///
/// Recomputed synchronously on every scroll event, with no throttling. Nothing
/// on the page reads the index besides logging.
pub struct SectionTracker<H: ViewportHost + 'static> {
    host: Rc<H>,
    active: Rc<Cell<i64>>,
    listener: ListenerId,
}

impl<H: ViewportHost + 'static> SectionTracker<H> {
    /// Start listening. The index starts at 0 until the first scroll.
    pub fn mount(host: &Rc<H>) -> Self {
        let active = Rc::new(Cell::new(0));
        let weak: Weak<H> = Rc::downgrade(host);
        let slot = Rc::clone(&active);
        let listener = host.add_event_listener(
            EventType::Scroll,
            Rc::new(move |_: &Event| {
                let Some(host) = weak.upgrade() else {
                    return;
                };
                if let Some(index) = active_section_index(host.scroll_y(), host.inner_height()) {
                    slot.set(index);
                    tracing::trace!(index, "active section");
                }
            }),
        );

        tracing::debug!("section tracker mounted");
        Self {
            host: Rc::clone(host),
            active,
            listener,
        }
    }

    /// Last computed section index
    pub fn active_section(&self) -> i64 {
        self.active.get()
    }

    pub fn unmount(self) {}
}

impl<H: ViewportHost + 'static> Drop for SectionTracker<H> {
    fn drop(&mut self) {
        self.host.remove_event_listener(self.listener);
        tracing::debug!("section tracker unmounted");
    }
}
