//! Overlay dialogs and the body scroll lock they share.

pub mod news;
pub mod privacy;

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::HtmlElement;

use crate::dom;

pub type SharedScrollLock = Rc<RefCell<ScrollLock>>;

/// Reference-counted `overflow: hidden` on the page body. The page scrolls
/// again only when every holder has released it.
pub struct ScrollLock {
    holders: usize,
    body: Option<HtmlElement>,
}

impl ScrollLock {
    pub fn new(body: Option<HtmlElement>) -> SharedScrollLock {
        Rc::new(RefCell::new(Self { holders: 0, body }))
    }

    pub fn acquire(&mut self) {
        self.holders += 1;
        if self.holders == 1 {
            self.apply("hidden");
        }
    }

    pub fn release(&mut self) {
        if self.holders == 0 {
            return;
        }
        self.holders -= 1;
        if self.holders == 0 {
            self.apply("auto");
        }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders > 0
    }

    fn apply(&self, overflow: &str) {
        debug!("Body overflow -> {}", overflow);
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", overflow);
        }
    }
}

/// Open/closed state of one modal element. Holds at most one share of the
/// scroll lock, taken on the first `show` and given back on `hide`.
pub struct Overlay {
    element: Option<HtmlElement>,
    lock: SharedScrollLock,
    open: bool,
}

impl Overlay {
    pub fn new(element: Option<HtmlElement>, lock: SharedScrollLock) -> Self {
        Self { element, lock, open: false }
    }

    pub fn show(&mut self) {
        if let Some(el) = &self.element {
            dom::set_style(el, "display", "block");
        }
        if !self.open {
            self.open = true;
            self.lock.borrow_mut().acquire();
        }
    }

    pub fn hide(&mut self) {
        if let Some(el) = &self.element {
            dom::set_style(el, "display", "none");
        }
        if self.open {
            self.open = false;
            self.lock.borrow_mut().release();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_counts_holders() {
        let lock = ScrollLock::new(None);
        lock.borrow_mut().acquire();
        lock.borrow_mut().acquire();
        lock.borrow_mut().release();
        assert!(lock.borrow().is_locked());
        lock.borrow_mut().release();
        assert!(!lock.borrow().is_locked());
    }

    #[test]
    fn release_without_holders_does_not_underflow() {
        let lock = ScrollLock::new(None);
        lock.borrow_mut().release();
        lock.borrow_mut().acquire();
        assert!(lock.borrow().is_locked());
    }

    #[test]
    fn two_overlays_share_one_lock() {
        let lock = ScrollLock::new(None);
        let mut privacy = Overlay::new(None, lock.clone());
        let mut news = Overlay::new(None, lock.clone());

        privacy.show();
        news.show();
        privacy.hide();
        assert!(lock.borrow().is_locked(), "news is still open");

        news.hide();
        assert!(!lock.borrow().is_locked());
    }

    #[test]
    fn one_escape_closes_every_open_modal() {
        use crate::keyboard::{Key, KeyRouter};
        use news::{NavButtons, NewsModal, NewsPager, NewsView};
        use privacy::PrivacyModal;

        struct Blank;

        impl NewsView for Blank {
            fn show_entry(&mut self, _index: usize) {}
            fn set_nav(&mut self, _nav: NavButtons) {}
        }

        let lock = ScrollLock::new(None);
        let privacy = Rc::new(RefCell::new(PrivacyModal::new(Overlay::new(None, lock.clone()))));
        let pager = NewsPager::new(3).unwrap();
        let news = Rc::new(RefCell::new(NewsModal::new(pager, Overlay::new(None, lock.clone()), Blank)));
        let mut router = KeyRouter::default();
        router.modal(privacy.clone());
        router.modal(news.clone());

        privacy.borrow_mut().open();
        news.borrow_mut().open(1);
        router.dispatch(Key::Escape);

        assert!(!news.borrow().is_open());
        assert!(!lock.borrow().is_locked());
    }

    #[test]
    fn repeated_show_and_hide_hold_a_single_share() {
        let lock = ScrollLock::new(None);
        let mut overlay = Overlay::new(None, lock.clone());

        overlay.show();
        overlay.show();
        overlay.hide();
        assert!(!lock.borrow().is_locked());
        assert!(!overlay.is_open());

        overlay.hide();
        assert!(!lock.borrow().is_locked());
    }
}
