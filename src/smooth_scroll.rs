//! In-page anchor links scroll smoothly to their section, leaving room for
//! the fixed header and nav bar.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::dom;

/// Target id of an in-page link, `None` for a bare `#`.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#').unwrap_or(href);
    (!id.is_empty()).then_some(id)
}

/// Leading integer of a CSS length, the way `parseInt(v, 10)` reads it.
/// Anything unparsable counts as zero.
pub fn parse_px(value: &str) -> f64 {
    let value = value.trim_start();
    let digits_end = value
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map_or(value.len(), |(i, _)| i);
    value[..digits_end].parse::<i64>().map_or(0.0, |n| n as f64)
}

/// Scroll position that puts `target_top` just below the fixed chrome. The
/// target's own top padding already provides part of that gap.
pub fn scroll_position(target_top: f64, chrome_height: f64, target_padding: f64) -> f64 {
    target_top - (chrome_height - target_padding).max(0.0)
}

fn scroll_target(el: Element) -> Element {
    if el.tag_name().eq_ignore_ascii_case("section") {
        return el;
    }
    el.closest("section").ok().flatten().unwrap_or(el)
}

struct Chrome {
    header: Option<HtmlElement>,
    nav: Option<HtmlElement>,
}

impl Chrome {
    fn height(&self) -> f64 {
        [&self.header, &self.nav]
            .into_iter()
            .flatten()
            .map(|el| el.offset_height() as f64)
            .sum()
    }
}

fn scroll_to_fragment(window: &Window, document: &Document, chrome: &Chrome, href: &str) -> Option<()> {
    let id = fragment_id(href)?;
    let target = scroll_target(document.get_element_by_id(id)?);
    let target = target.dyn_into::<HtmlElement>().ok()?;

    let padding = window
        .get_computed_style(&target)
        .ok()
        .flatten()
        .and_then(|style| style.get_property_value("padding-top").ok())
        .map_or(0.0, |v| parse_px(&v));
    let top = scroll_position(target.offset_top() as f64, chrome.height(), padding);
    debug!("Smooth scroll to #{} at {}", id, top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Some(())
}

pub fn init(window: &Window, document: &Document) -> Option<()> {
    let links: Vec<Element> = dom::query_all(document, "a[href^=\"#\"]");
    if links.is_empty() {
        return None;
    }
    let chrome = Rc::new(Chrome {
        header: dom::query(document, ".header"),
        nav: dom::query(document, ".main-nav"),
    });

    for link in links {
        let window = window.clone();
        let document = document.clone();
        let chrome = chrome.clone();
        let anchor = link.clone();
        dom::listen(&link, "click", move |e: MouseEvent| {
            e.prevent_default();
            if let Some(href) = anchor.get_attribute("href") {
                scroll_to_fragment(&window, &document, &chrome, &href);
            }
        });
    }
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn fragment_strips_hash() {
        assert_eq!(fragment_id("#services"), Some("services"));
    }

    #[test]
    fn parse_px_reads_leading_integer() {
        assert_eq!(parse_px("80px"), 80.0);
        assert_eq!(parse_px("12.75px"), 12.0);
        assert_eq!(parse_px("-4px"), -4.0);
        assert_eq!(parse_px(""), 0.0);
        assert_eq!(parse_px("auto"), 0.0);
    }

    #[test]
    fn offset_subtracts_chrome_minus_padding() {
        // 60px header + 40px nav, section padded by 30px.
        assert_eq!(scroll_position(1000.0, 100.0, 30.0), 930.0);
    }

    #[test]
    fn offset_never_goes_negative() {
        assert_eq!(scroll_position(1000.0, 100.0, 160.0), 1000.0);
    }
}
