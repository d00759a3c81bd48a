//! One window scroll listener for every scroll-driven style update.
//!
//! Raw scroll events are coalesced into at most one update per animation
//! frame; subscribers receive the current vertical scroll offset.

use std::cell::RefCell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::dom;

/// Tracks whether an animation frame is already queued.
#[derive(Debug, Default)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// True if the caller should queue a frame.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    pub fn release(&mut self) {
        self.pending = false;
    }
}

type Subscriber = Box<dyn FnMut(f64)>;

#[derive(Clone)]
pub struct ScrollDispatcher {
    window: Window,
    subscribers: Rc<RefCell<Vec<Subscriber>>>,
}

impl ScrollDispatcher {
    pub fn new(window: &Window) -> Self {
        Self {
            window: window.clone(),
            subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn subscribe(&self, subscriber: impl FnMut(f64) + 'static) {
        self.subscribers.borrow_mut().push(Box::new(subscriber));
    }

    /// Runs every subscriber against the current scroll offset.
    pub fn refresh(&self) {
        let scroll_y = self.window.scroll_y().unwrap_or(0.0);
        for subscriber in self.subscribers.borrow_mut().iter_mut() {
            subscriber(scroll_y);
        }
    }

    pub fn install(&self) {
        let gate = Rc::new(RefCell::new(FrameGate::default()));

        let frame = {
            let this = self.clone();
            let gate = gate.clone();
            Closure::wrap(Box::new(move |_timestamp: f64| {
                gate.borrow_mut().release();
                this.refresh();
            }) as Box<dyn FnMut(f64)>)
        };

        let window = self.window.clone();
        dom::listen(&self.window, "scroll", move |_: Event| {
            if !gate.borrow_mut().request() {
                return;
            }
            if let Err(err) = window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                warn!("requestAnimationFrame failed: {:?}", err);
                gate.borrow_mut().release();
            }
        });

        // Initial check
        self.refresh();
    }
}
