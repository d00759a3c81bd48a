//! Window-level lifecycle hooks that are not tied to any one component.

use web_sys::{Document, ErrorEvent, Event, Window};

use crate::config;
use crate::debounce::debounce;
use crate::dom;
use crate::scroll::ScrollDispatcher;

/// Uncaught script errors go to the console and are otherwise ignored.
pub fn log_errors(window: &Window) {
    dom::listen(window, "error", |e: ErrorEvent| {
        gloo_console::error!("JavaScript Error:", e.error());
    });
}

fn add_loaded_class(document: &Document) {
    if let Some(body) = document.body() {
        dom::set_class(&body, "loaded", true);
    }
}

/// Adds `loaded` to the body after the window `load` event. The wasm module
/// may start after that event has already fired, so check first.
pub fn mark_loaded(window: &Window, document: &Document) {
    if dom::is_loaded(&document.ready_state()) {
        add_loaded_class(document);
        return;
    }
    let document = document.clone();
    dom::listen(window, "load", move |_: Event| add_loaded_class(&document));
}

/// Section offsets move when the layout reflows, so scroll-driven styles
/// are recomputed once resizing settles.
pub fn refresh_on_resize(window: &Window, scroll: &ScrollDispatcher) {
    let scroll = scroll.clone();
    let mut refresh = debounce(config::RESIZE_DEBOUNCE_MS, move |()| scroll.refresh());
    dom::listen(window, "resize", move |_: Event| refresh.call(()));
}
