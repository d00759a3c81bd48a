//! Element lookup and listener plumbing shared by every initializer.
//!
//! Lookups return `Option` so an initializer can bail out with `?` the
//! moment a required element is missing; nothing is registered in that case.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn query<T: JsCast>(document: &Document, selector: &str) -> Option<T> {
    document.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

pub fn query_in<T: JsCast>(root: &Element, selector: &str) -> Option<T> {
    root.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

/// All elements matching `selector`, in document order.
pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Registers `handler` for the page lifetime. Events that are not an `E`
/// are dropped.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(move |e: Event| {
        if let Ok(e) = e.dyn_into::<E>() {
            handler(e);
        }
    }) as Box<dyn FnMut(Event)>);

    if let Err(err) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        warn!("Could not register {} listener: {:?}", event, err);
        return;
    }
    callback.forget();
}

/// `document.readyState` once parsing has finished.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// `document.readyState` once the window `load` event has fired.
pub fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Runs `f` once the document has been parsed.
pub fn on_ready(document: &Document, f: impl FnOnce() + 'static) {
    if is_parsed(&document.ready_state()) {
        f();
        return;
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_: Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = if on {
        el.class_list().add_1(class)
    } else {
        el.class_list().remove_1(class)
    };
}

/// True when the event was dispatched on `el` itself rather than a child,
/// i.e. a click on a modal's backdrop.
pub fn is_target(event: &Event, el: &Element) -> bool {
    event.target().map_or(false, |target| {
        let target: &JsValue = target.as_ref();
        let el: &JsValue = el.as_ref();
        target == el
    })
}

pub fn supports_intersection_observer() -> bool {
    web_sys::window().map_or(false, |window| {
        Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
    })
}

/// Creates an observer that lives for the page lifetime and calls `handler`
/// for each entry that is intersecting.
pub fn intersection_observer<F>(options: &IntersectionObserverInit, mut handler: F) -> Option<IntersectionObserver>
where
    F: FnMut(Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if entry.is_intersecting() {
                handler(entry.target(), &observer);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options) {
        Ok(observer) => {
            callback.forget();
            Some(observer)
        }
        Err(err) => {
            warn!("Could not create IntersectionObserver: {:?}", err);
            None
        }
    }
}
