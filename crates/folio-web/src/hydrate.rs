//! Page hydration
//!
//! Attaches players to the surfaces the renderer marked and starts section
//! tracking. Everything mounted here lives as long as the page.

use std::cell::RefCell;
use std::rc::Rc;

use folio_media::AdaptiveMediaPlayer;
use folio_page::{SectionTracker, FULLSCREEN_BUTTON_ATTR, SURFACE_ATTR};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::document::WebDocument;
use crate::window::WebWindow;

struct Page {
    _players: Vec<Rc<AdaptiveMediaPlayer<WebDocument>>>,
    _clicks: Vec<Closure<dyn Fn(web_sys::Event)>>,
    _tracker: SectionTracker<WebWindow>,
}

thread_local! {
    static PAGE: RefCell<Option<Page>> = const { RefCell::new(None) };
}

fn js_error(message: impl Into<String>) -> JsValue {
    JsValue::from_str(&message.into())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let window = web_sys::window().ok_or_else(|| js_error("no window object available"))?;
    let document = window.document().ok_or_else(|| js_error("no document available"))?;
    let host = Rc::new(WebDocument::new(document.clone()));

    let mut players = Vec::new();
    let mut clicks = Vec::new();
    let surfaces = document.query_selector_all(&format!("[{SURFACE_ATTR}]"))?;
    for index in 0..surfaces.length() {
        let Some(node) = surfaces.item(index) else {
            continue;
        };
        let container: Element = node
            .dyn_into()
            .map_err(|_| js_error("surface is not an element"))?;

        let video = container.query_selector("video")?;
        let source = video.as_ref().and_then(|v| v.get_attribute("src"));
        let label = video.as_ref().and_then(|v| v.get_attribute("aria-label"));

        let id = host.register(container.clone());
        let player = Rc::new(AdaptiveMediaPlayer::mount(
            &host,
            id,
            source.as_deref(),
            label.as_deref(),
        ));

        if let Some(button) = container.query_selector(&format!("[{FULLSCREEN_BUTTON_ATTR}]"))? {
            let target = Rc::clone(&player);
            let click = Closure::<dyn Fn(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let request = target.toggle_fullscreen();
                tracing::debug!(?request, "fullscreen button");
            });
            button.add_event_listener_with_callback("click", click.as_ref().unchecked_ref())?;
            clicks.push(click);
        }
        players.push(player);
    }

    let tracker = SectionTracker::mount(&Rc::new(WebWindow::new(window)));
    tracing::info!(players = players.len(), "page hydrated");

    PAGE.with(|page| {
        *page.borrow_mut() = Some(Page {
            _players: players,
            _clicks: clicks,
            _tracker: tracker,
        });
    });
    Ok(())
}
