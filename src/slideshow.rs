//! Hero slideshow: `.slide` panels paired with `.dot` indicators.
//!
//! Advances on a fixed interval for the life of the page. Dots jump to
//! their slide; arrow keys step with wraparound in both directions.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::debug;
use web_sys::{Document, Element, MouseEvent};

use crate::config;
use crate::dom;
use crate::keyboard::{Key, KeyHandler, KeyRouter};

const ACTIVE: &str = "active";

#[derive(Debug)]
pub struct SlideCursor {
    len: usize,
    current: usize,
}

impl SlideCursor {
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self { len, current: 0 })
    }

    #[cfg(test)]
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn next(&self) -> usize {
        (self.current + 1) % self.len
    }

    pub fn previous(&self) -> usize {
        if self.current == 0 {
            self.len - 1
        } else {
            self.current - 1
        }
    }

    /// Moves to `index`, returning the slot that was active before.
    pub fn move_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let old = self.current;
        self.current = index;
        Some(old)
    }
}

pub struct Slideshow {
    cursor: SlideCursor,
    slides: Vec<Element>,
    dots: Vec<Element>,
}

impl Slideshow {
    pub fn advance(&mut self) {
        self.go_to(self.cursor.next());
    }

    pub fn retreat(&mut self) {
        self.go_to(self.cursor.previous());
    }

    pub fn go_to(&mut self, index: usize) {
        let Some(old) = self.cursor.move_to(index) else {
            return;
        };
        self.mark(old, false);
        self.mark(index, true);
    }

    fn mark(&self, index: usize, on: bool) {
        for el in [self.slides.get(index), self.dots.get(index)].into_iter().flatten() {
            dom::set_class(el, ACTIVE, on);
        }
    }
}

impl KeyHandler for Slideshow {
    fn on_key(&mut self, key: Key) {
        match key {
            Key::ArrowLeft => self.retreat(),
            Key::ArrowRight => self.advance(),
            _ => {}
        }
    }
}

pub fn init(document: &Document, keys: &mut KeyRouter) -> Option<()> {
    let slides: Vec<Element> = dom::query_all(document, ".slide");
    let dots: Vec<Element> = dom::query_all(document, ".dot");
    let cursor = SlideCursor::new(slides.len().min(dots.len()))?;

    debug!("Slideshow: {} slides", cursor.len);
    let slideshow = Rc::new(RefCell::new(Slideshow { cursor, slides, dots: dots.clone() }));

    for (index, dot) in dots.iter().enumerate() {
        let slideshow = slideshow.clone();
        dom::listen(dot, "click", move |_: MouseEvent| slideshow.borrow_mut().go_to(index));
    }

    {
        let slideshow = slideshow.clone();
        Interval::new(config::SLIDE_INTERVAL_MS, move || slideshow.borrow_mut().advance()).forget();
    }

    keys.page(slideshow);
    Some(())
}
