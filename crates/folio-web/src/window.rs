//! Browser window as viewport host

use folio_dom::{EventTarget, EventType, Listener, ListenerId};
use folio_page::ViewportHost;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::listeners::JsListeners;

pub struct WebWindow {
    window: Window,
    listeners: JsListeners,
}

impl WebWindow {
    pub fn new(window: Window) -> Self {
        let target: web_sys::EventTarget = window.clone().unchecked_into();
        Self {
            window,
            listeners: JsListeners::new(target),
        }
    }
}

impl EventTarget for WebWindow {
    fn add_event_listener(&self, event_type: EventType, listener: Listener) -> ListenerId {
        self.listeners.add(event_type, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl ViewportHost for WebWindow {
    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    /// 0 when unavailable, which leaves the tracked index unchanged
    fn inner_height(&self) -> f64 {
        self.window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or(0.0)
    }
}
