//! Adds `animate` to content blocks the first time they scroll into view.
//! The class is never removed.

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverInit};

use crate::config;
use crate::dom;

const TARGETS: &str = ".service-item, .case-item, .recruit-card";

pub fn init(document: &Document) -> Option<()> {
    let targets: Vec<Element> = dom::query_all(document, TARGETS);
    if targets.is_empty() {
        return None;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    let observer = dom::intersection_observer(&options, |target, _| {
        dom::set_class(&target, "animate", true);
    })?;
    for target in &targets {
        observer.observe(target);
    }
    debug!("Reveal: observing {} blocks", targets.len());
    Some(())
}
