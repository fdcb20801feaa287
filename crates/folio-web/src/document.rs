//! Browser document as fullscreen host
//!
//! Vendor spellings are looked up by name at runtime, so one build serves
//! every engine.

use std::cell::RefCell;

use folio_dom::{EventTarget, EventType, Listener, ListenerId, NodeId};
use folio_media::{FullscreenError, FullscreenFeature, FullscreenHost, VendorApi};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

use crate::listeners::JsListeners;

/// `document` plus the table of elements handed out as [`NodeId`]s.
///
/// Index 0 is the document itself; a fullscreen element that was never
/// registered reads back as [`NodeId::ROOT`].
pub struct WebDocument {
    document: Document,
    elements: RefCell<Vec<Element>>,
    listeners: JsListeners,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        let target: web_sys::EventTarget = document.clone().unchecked_into();
        Self {
            document,
            elements: RefCell::new(Vec::new()),
            listeners: JsListeners::new(target),
        }
    }

    /// Hand out a node id for `element`
    pub fn register(&self, element: Element) -> NodeId {
        let mut elements = self.elements.borrow_mut();
        if let Some(index) = elements.iter().position(|known| *known == element) {
            return NodeId::from_raw(index as u32 + 1);
        }
        elements.push(element);
        NodeId::from_raw(elements.len() as u32)
    }

    fn element(&self, id: NodeId) -> Option<Element> {
        let index = id.index().checked_sub(1)?;
        self.elements.borrow().get(index as usize).cloned()
    }

    fn node_id(&self, element: &JsValue) -> NodeId {
        self.elements
            .borrow()
            .iter()
            .position(|known| JsValue::from(known.clone()) == *element)
            .map_or(NodeId::ROOT, |index| NodeId::from_raw(index as u32 + 1))
    }
}

fn call_method(receiver: &JsValue, name: &'static str) -> Result<(), FullscreenError> {
    let method = Reflect::get(receiver, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(FullscreenError::NotSupported(name))?;

    // Promise results settle through the change events
    method
        .call0(receiver)
        .map(|_| ())
        .map_err(|err| FullscreenError::Rejected(format!("{err:?}")))
}

impl EventTarget for WebDocument {
    fn add_event_listener(&self, event_type: EventType, listener: Listener) -> ListenerId {
        self.listeners.add(event_type, listener)
    }

    fn remove_event_listener(&self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }
}

impl FullscreenHost for WebDocument {
    fn supports(&self, feature: FullscreenFeature) -> bool {
        let receiver: JsValue = match feature {
            FullscreenFeature::Request(_) => match self.document.document_element() {
                Some(root) => root.into(),
                None => return false,
            },
            FullscreenFeature::Exit(_) | FullscreenFeature::Element(_) => self.document.clone().into(),
        };
        Reflect::has(&receiver, &JsValue::from_str(feature.name())).unwrap_or(false)
    }

    fn request_fullscreen(&self, api: VendorApi, target: NodeId) -> Result<(), FullscreenError> {
        let element = self.element(target).ok_or(FullscreenError::NotInDocument(target))?;
        tracing::debug!(method = api.request_method(), %target, "requesting fullscreen");
        call_method(&element.into(), api.request_method())
    }

    fn exit_fullscreen(&self, api: VendorApi) -> Result<(), FullscreenError> {
        tracing::debug!(method = api.exit_method(), "exiting fullscreen");
        call_method(&self.document.clone().into(), api.exit_method())
    }

    fn fullscreen_element(&self, api: VendorApi) -> Option<NodeId> {
        let value = Reflect::get(&self.document, &JsValue::from_str(api.element_property())).ok()?;
        if value.is_null() || value.is_undefined() {
            return None;
        }
        Some(self.node_id(&value))
    }
}
