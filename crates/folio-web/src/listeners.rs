//! JS listener table
//!
//! Bridges `folio_dom` listeners onto a browser `EventTarget`. The closures
//! live here until removed so the browser never calls into freed memory.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use folio_dom::{Event, EventType, Listener, ListenerId};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type JsCallback = Closure<dyn Fn(web_sys::Event)>;

pub(crate) struct JsListeners {
    target: web_sys::EventTarget,
    callbacks: RefCell<HashMap<ListenerId, (EventType, JsCallback)>>,
    next_id: Cell<u64>,
}

impl JsListeners {
    pub(crate) fn new(target: web_sys::EventTarget) -> Self {
        Self {
            target,
            callbacks: RefCell::new(HashMap::new()),
            next_id: Cell::new(1),
        }
    }

    pub(crate) fn add(&self, event_type: EventType, listener: Listener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let callback = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
            listener(&Event::new(event_type));
        });
        if let Err(err) = self
            .target
            .add_event_listener_with_callback(event_type.name(), callback.as_ref().unchecked_ref())
        {
            tracing::warn!(event = event_type.name(), ?err, "failed to add listener");
        }

        self.callbacks.borrow_mut().insert(id, (event_type, callback));
        id
    }

    pub(crate) fn remove(&self, id: ListenerId) -> bool {
        let Some((event_type, callback)) = self.callbacks.borrow_mut().remove(&id) else {
            return false;
        };
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(event_type.name(), callback.as_ref().unchecked_ref())
        {
            tracing::warn!(event = event_type.name(), ?err, "failed to remove listener");
        }
        true
    }
}
