//! Paginated news dialog.
//!
//! Each `.news-link` opens the dialog at its own position in the list; the
//! prev/next buttons and arrow keys page through entries and stop at either
//! end instead of wrapping.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{Overlay, SharedScrollLock};
use crate::dom;
use crate::keyboard::{Key, KeyHandler, KeyRouter};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavButtons {
    pub prev_disabled: bool,
    pub next_disabled: bool,
}

/// `disabled` attribute value for a nav control, `None` to remove it. Works
/// for `<button>` and for any other element the markup uses.
pub fn disabled_attr(disabled: bool) -> Option<&'static str> {
    disabled.then_some("")
}

/// Position within a fixed, non-empty list of entries.
#[derive(Debug)]
pub struct NewsPager {
    len: usize,
    current: usize,
}

impl NewsPager {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = index;
        Some(index)
    }

    /// Index one `step` away from the current one, if it exists.
    pub fn step(&self, step: isize) -> Option<usize> {
        self.current
            .checked_add_signed(step)
            .filter(|&index| index < self.len)
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn buttons(&self) -> NavButtons {
        NavButtons {
            prev_disabled: self.current == 0,
            next_disabled: self.current == self.len - 1,
        }
    }
}

pub trait NewsView {
    fn show_entry(&mut self, index: usize);
    fn set_nav(&mut self, nav: NavButtons);
}

pub struct NewsModal<V> {
    pager: NewsPager,
    overlay: Overlay,
    view: V,
}

impl<V: NewsView> NewsModal<V> {
    pub fn new(pager: NewsPager, overlay: Overlay, view: V) -> Self {
        Self { pager, overlay, view }
    }

    pub fn open(&mut self, index: usize) {
        if self.pager.select(index).is_none() {
            return;
        }
        self.view.show_entry(index);
        self.overlay.show();
        self.view.set_nav(self.pager.buttons());
    }

    pub fn show_next(&mut self, step: isize) {
        if let Some(index) = self.pager.step(step) {
            self.open(index);
        }
    }

    /// Hides the dialog. The current index is kept.
    pub fn close(&mut self) {
        self.overlay.hide();
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.pager.current()
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }
}

impl<V: NewsView> KeyHandler for NewsModal<V> {
    fn is_active(&self) -> bool {
        self.is_open()
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::Escape => self.close(),
            Key::ArrowLeft => self.show_next(-1),
            Key::ArrowRight => self.show_next(1),
            _ => {}
        }
    }
}

/// Renders entries into the dialog's title/date/body slots.
pub struct DomNewsView {
    links: Vec<Element>,
    title: Element,
    date: Element,
    body: Element,
    prev: Element,
    next: Element,
}

fn set_disabled(el: &Element, disabled: bool) {
    let _ = match disabled_attr(disabled) {
        Some(value) => el.set_attribute("disabled", value),
        None => el.remove_attribute("disabled"),
    };
}

impl NewsView for DomNewsView {
    fn show_entry(&mut self, index: usize) {
        let Some(link) = self.links.get(index) else {
            return;
        };
        let item = link.closest("li").ok().flatten();
        let date = item
            .as_ref()
            .and_then(|li| dom::query_in::<Element>(li, ".news-date"))
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        let content = item
            .as_ref()
            .and_then(|li| dom::query_in::<Element>(li, ".news-content"))
            .map(|el| el.inner_html())
            .unwrap_or_default();

        let title = link.text_content().unwrap_or_default();
        self.title.set_text_content(Some(title.trim()));
        self.date.set_text_content(Some(&date));
        self.body.set_inner_html(&content);
    }

    fn set_nav(&mut self, nav: NavButtons) {
        set_disabled(&self.prev, nav.prev_disabled);
        set_disabled(&self.next, nav.next_disabled);
    }
}

pub fn init(document: &Document, lock: &SharedScrollLock, keys: &mut KeyRouter) -> Option<()> {
    let modal: HtmlElement = dom::by_id(document, "news-modal")?;
    let links: Vec<Element> = dom::query_all(document, ".news-link");
    let pager = NewsPager::new(links.len())?;

    let view = DomNewsView {
        title: dom::by_id(document, "news-modal-title")?,
        date: dom::by_id(document, "news-modal-date")?,
        body: dom::by_id(document, "news-modal-body")?,
        prev: dom::query_in(&modal, ".news-nav.prev")?,
        next: dom::query_in(&modal, ".news-nav.next")?,
        links: links.clone(),
    };
    let close_button: Element = dom::query_in(&modal, ".close")?;
    let nav_buttons = [(view.prev.clone(), -1), (view.next.clone(), 1)];

    debug!("News modal: {} entries", links.len());
    let overlay = Overlay::new(Some(modal.clone()), lock.clone());
    let controller = Rc::new(RefCell::new(NewsModal::new(pager, overlay, view)));

    for (index, link) in links.iter().enumerate() {
        let controller = controller.clone();
        dom::listen(link, "click", move |e: MouseEvent| {
            e.prevent_default();
            controller.borrow_mut().open(index);
        });
    }

    for (button, step) in nav_buttons {
        let controller = controller.clone();
        dom::listen(&button, "click", move |_: MouseEvent| controller.borrow_mut().show_next(step));
    }
    {
        let controller = controller.clone();
        dom::listen(&close_button, "click", move |_: MouseEvent| controller.borrow_mut().close());
    }
    {
        let controller = controller.clone();
        let backdrop = modal.clone();
        dom::listen(&modal, "click", move |e: MouseEvent| {
            if dom::is_target(&e, &backdrop) {
                controller.borrow_mut().close();
            }
        });
    }

    keys.modal(controller);
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ScrollLock;

    #[derive(Default)]
    struct Recorded {
        shown: Vec<usize>,
        nav: Option<NavButtons>,
    }

    impl NewsView for Recorded {
        fn show_entry(&mut self, index: usize) {
            self.shown.push(index);
        }

        fn set_nav(&mut self, nav: NavButtons) {
            self.nav = Some(nav);
        }
    }

    fn modal(len: usize, lock: &SharedScrollLock) -> NewsModal<Recorded> {
        let pager = NewsPager::new(len).unwrap();
        NewsModal::new(pager, Overlay::new(None, lock.clone()), Recorded::default())
    }

    fn nav(prev_disabled: bool, next_disabled: bool) -> Option<NavButtons> {
        Some(NavButtons { prev_disabled, next_disabled })
    }

    #[test]
    fn disabled_is_an_attribute_toggle() {
        assert_eq!(disabled_attr(true), Some(""));
        assert_eq!(disabled_attr(false), None);
    }

    #[test]
    fn empty_list_has_no_pager() {
        assert!(NewsPager::new(0).is_none());
    }

    #[test]
    fn walks_three_entries_and_stops_at_the_end() {
        let lock = ScrollLock::new(None);
        let mut news = modal(3, &lock);

        news.open(0);
        assert_eq!(news.view.nav, nav(true, false));

        news.show_next(1);
        assert_eq!(news.current(), 1);
        assert_eq!(news.view.nav, nav(false, false));

        news.show_next(1);
        assert_eq!(news.current(), 2);
        assert_eq!(news.view.nav, nav(false, true));

        news.show_next(1);
        assert_eq!(news.current(), 2);
        assert_eq!(news.view.shown, vec![0, 1, 2]);
    }

    #[test]
    fn previous_at_first_entry_is_a_no_op() {
        let lock = ScrollLock::new(None);
        let mut news = modal(4, &lock);

        news.open(0);
        news.show_next(-1);

        assert_eq!(news.current(), 0);
        assert_eq!(news.view.shown, vec![0]);
    }

    #[test]
    fn nav_state_matches_position_for_every_entry() {
        let lock = ScrollLock::new(None);
        let len = 5;
        let mut news = modal(len, &lock);
        for i in 0..len {
            news.open(i);
            assert_eq!(news.view.nav, nav(i == 0, i == len - 1));
        }
    }

    #[test]
    fn single_entry_disables_both_buttons() {
        let lock = ScrollLock::new(None);
        let mut news = modal(1, &lock);
        news.open(0);
        assert_eq!(news.view.nav, nav(true, true));
    }

    #[test]
    fn paging_holds_one_lock_share_and_close_releases_it() {
        let lock = ScrollLock::new(None);
        let mut news = modal(3, &lock);

        news.open(0);
        news.show_next(1);
        news.show_next(1);
        assert!(lock.borrow().is_locked());

        news.close();
        assert!(!news.is_open());
        assert!(!lock.borrow().is_locked());
        assert_eq!(news.current(), 2, "close keeps the index");
    }

    #[test]
    fn out_of_range_open_is_ignored() {
        let lock = ScrollLock::new(None);
        let mut news = modal(2, &lock);
        news.open(7);
        assert!(!news.is_open());
        assert!(news.view.shown.is_empty());
    }

    #[test]
    fn keys_page_and_close() {
        let lock = ScrollLock::new(None);
        let mut news = modal(3, &lock);

        news.open(1);
        news.on_key(Key::ArrowRight);
        assert_eq!(news.current(), 2);
        news.on_key(Key::ArrowLeft);
        news.on_key(Key::ArrowLeft);
        assert_eq!(news.current(), 0);

        news.on_key(Key::Escape);
        assert!(!news.is_active());
    }
}
