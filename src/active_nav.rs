//! Highlights the `.main-nav` link of the section under the marker line.

use web_sys::{Document, Element, HtmlElement};

use crate::config;
use crate::dom;
use crate::scroll::ScrollDispatcher;

#[derive(Clone, Copy, Debug)]
pub struct SectionSpan {
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Index of the section containing `scroll_y + offset`. When spans overlap
/// the last one in document order wins.
pub fn active_index(spans: impl IntoIterator<Item = SectionSpan>, scroll_y: f64) -> Option<usize> {
    let marker = scroll_y + config::ACTIVE_NAV_OFFSET;
    spans
        .into_iter()
        .enumerate()
        .filter(|(_, span)| span.contains(marker))
        .map(|(index, _)| index)
        .last()
}

fn highlight(links: &[Element], section_id: &str) {
    let href = format!("#{}", section_id);
    for link in links {
        let matches = link.get_attribute("href").as_deref() == Some(href.as_str());
        dom::set_class(link, "active", matches);
    }
}

pub fn init(document: &Document, scroll: &ScrollDispatcher) -> Option<()> {
    let sections: Vec<HtmlElement> = dom::query_all(document, "section[id]");
    let links: Vec<Element> = dom::query_all(document, ".main-nav a[href^=\"#\"]");
    if sections.is_empty() || links.is_empty() {
        return None;
    }

    scroll.subscribe(move |scroll_y| {
        let spans = sections.iter().map(|section| SectionSpan {
            top: section.offset_top() as f64,
            height: section.offset_height() as f64,
        });
        if let Some(index) = active_index(spans, scroll_y) {
            highlight(&links, &sections[index].id());
        }
    });
    Some(())
}
