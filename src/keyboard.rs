//! Single document-level keydown listener.
//!
//! Handlers register in one of three groups. `always` handlers see every
//! key. Every modal handler that reports itself active gets the key and the
//! page handlers do not; with no modal open, every `page` handler gets it.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use web_sys::{Document, KeyboardEvent};

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Tab,
    Other,
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "Escape" => Key::Escape,
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Tab" => Key::Tab,
            _ => Key::Other,
        }
    }
}

pub trait KeyHandler {
    /// Whether this handler currently owns the keyboard. Only consulted
    /// for modal handlers.
    fn is_active(&self) -> bool {
        true
    }

    fn on_key(&mut self, key: Key);
}

pub type SharedHandler = Rc<RefCell<dyn KeyHandler>>;

#[derive(Default)]
pub struct KeyRouter {
    always: Vec<SharedHandler>,
    modals: Vec<SharedHandler>,
    page: Vec<SharedHandler>,
}

impl KeyRouter {
    pub fn always(&mut self, handler: SharedHandler) {
        self.always.push(handler);
    }

    pub fn modal(&mut self, handler: SharedHandler) {
        self.modals.push(handler);
    }

    pub fn page(&mut self, handler: SharedHandler) {
        self.page.push(handler);
    }

    pub fn dispatch(&self, key: Key) {
        if key == Key::Other {
            return;
        }
        for handler in &self.always {
            handler.borrow_mut().on_key(key);
        }

        let mut modal_open = false;
        for modal in &self.modals {
            if modal.borrow().is_active() {
                modal_open = true;
                modal.borrow_mut().on_key(key);
            }
        }
        if modal_open {
            return;
        }

        for handler in &self.page {
            handler.borrow_mut().on_key(key);
        }
    }

    /// Attaches the router to the document. Consumes it: the set of
    /// handlers is fixed once the page is initialized.
    pub fn install(self, document: &Document) {
        debug!(
            "Key router: {} always, {} modal, {} page handlers",
            self.always.len(),
            self.modals.len(),
            self.page.len()
        );
        dom::listen(document, "keydown", move |e: KeyboardEvent| {
            self.dispatch(Key::from_name(&e.key()));
        });
    }
}
