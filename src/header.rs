use web_sys::{Document, HtmlElement};

use crate::config;
use crate::dom;
use crate::scroll::ScrollDispatcher;

pub fn background_for(scroll_y: f64) -> &'static str {
    if scroll_y > config::HEADER_SCROLL_THRESHOLD {
        config::HEADER_BG_SCROLLED
    } else {
        config::HEADER_BG_TOP
    }
}

pub fn init(document: &Document, scroll: &ScrollDispatcher) -> Option<()> {
    let header: HtmlElement = dom::query(document, ".header")?;
    scroll.subscribe(move |scroll_y| {
        dom::set_style(&header, "background", background_for(scroll_y));
    });
    Some(())
}
