//! Event listeners
//!
//! Registration bookkeeping shared by every host (in-memory or browser).

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Event, EventType};

/// Event callback. Single-threaded: everything runs on the UI thread.
pub type Listener = Rc<dyn Fn(&Event)>;

/// Handle returned by registration, used to deregister
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// Anything listeners can be attached to (document, window)
pub trait EventTarget {
    /// Register a listener and return its handle
    fn add_event_listener(&self, event_type: EventType, listener: Listener) -> ListenerId;

    /// Deregister a listener. Returns false if the handle was unknown.
    fn remove_event_listener(&self, id: ListenerId) -> bool;
}

struct Entry {
    id: ListenerId,
    event_type: EventType,
    listener: Listener,
}

/// Listener table
#[derive(Default)]
pub struct ListenerRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener
    pub fn add(&mut self, event_type: EventType, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            event_type,
            listener,
        });
        tracing::trace!(id = id.0, event = %event_type, "listener added");
        id
    }

    /// Deregister a listener
    pub fn remove(&mut self, id: ListenerId) -> bool {
        let len_before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        let removed = self.entries.len() < len_before;
        if removed {
            tracing::trace!(id = id.0, "listener removed");
        }
        removed
    }

    /// Listeners for an event type, in registration order
    pub fn listeners_for(&self, event_type: EventType) -> Vec<Listener> {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .map(|e| Rc::clone(&e.listener))
            .collect()
    }

    /// Number of listeners for an event type
    pub fn count(&self, event_type: EventType) -> usize {
        self.entries
            .iter()
            .filter(|e| e.event_type == event_type)
            .count()
    }

    /// Total number of listeners
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for ListenerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerRegistry")
            .field("listeners", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}

/// Deliver an event to every matching listener.
///
/// The listener list is snapshotted before any callback runs, so callbacks may
/// register or remove listeners on the same registry. Returns the number of
/// listeners invoked.
pub fn dispatch_event(registry: &RefCell<ListenerRegistry>, event: &Event) -> usize {
    let listeners = registry.borrow().listeners_for(event.event_type);
    for listener in &listeners {
        listener(event);
    }
    listeners.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_add_and_remove() {
        let mut registry = ListenerRegistry::new();
        let id = registry.add(EventType::Scroll, Rc::new(|_: &Event| {}));

        assert_eq!(registry.count(EventType::Scroll), 1);
        assert!(registry.remove(id));
        assert!(!registry.remove(id));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_dispatch_only_matching_type() {
        let registry = RefCell::new(ListenerRegistry::new());
        let hits = Rc::new(Cell::new(0));

        let h = Rc::clone(&hits);
        registry
            .borrow_mut()
            .add(EventType::Scroll, Rc::new(move |_: &Event| h.set(h.get() + 1)));
        registry.borrow_mut().add(EventType::Click, Rc::new(|_: &Event| panic!("wrong type")));

        assert_eq!(dispatch_event(&registry, &Event::scroll()), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_listener_can_remove_itself_during_dispatch() {
        let registry = Rc::new(RefCell::new(ListenerRegistry::new()));
        let own_id = Rc::new(Cell::new(None));

        let reg = Rc::clone(&registry);
        let slot = Rc::clone(&own_id);
        let id = registry.borrow_mut().add(
            EventType::Scroll,
            Rc::new(move |_: &Event| {
                if let Some(id) = slot.get() {
                    reg.borrow_mut().remove(id);
                }
            }),
        );
        own_id.set(Some(id));

        dispatch_event(&registry, &Event::scroll());
        assert!(registry.borrow().is_empty());
    }
}
