//! Swaps `data-src` into `src` when an image nears the viewport, once per
//! image.

use log::debug;
use web_sys::{Document, Element, IntersectionObserverInit};

use crate::dom;

pub fn init(document: &Document) -> Option<()> {
    if !dom::supports_intersection_observer() {
        debug!("Lazy load: IntersectionObserver unavailable");
        return None;
    }
    let images: Vec<Element> = dom::query_all(document, "img[data-src]");
    if images.is_empty() {
        return None;
    }

    let observer = dom::intersection_observer(&IntersectionObserverInit::new(), |img, observer| {
        if let Some(src) = img.get_attribute("data-src") {
            let _ = img.set_attribute("src", &src);
        }
        dom::set_class(&img, "lazy", false);
        observer.unobserve(&img);
    })?;
    for img in &images {
        observer.observe(img);
    }
    Some(())
}
