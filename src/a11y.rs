//! Keyboard focus visibility: `user-is-tabbing` on `<body>` after Tab,
//! cleared by the next mouse press.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, HtmlElement, MouseEvent};

use crate::dom;
use crate::keyboard::{Key, KeyHandler, KeyRouter};

const TABBING: &str = "user-is-tabbing";

pub struct FocusVisibility {
    body: HtmlElement,
}

impl KeyHandler for FocusVisibility {
    fn on_key(&mut self, key: Key) {
        if key == Key::Tab {
            dom::set_class(&self.body, TABBING, true);
        }
    }
}

pub fn init(document: &Document, keys: &mut KeyRouter) -> Option<()> {
    let body = document.body()?;

    let clear = body.clone();
    dom::listen(document, "mousedown", move |_: MouseEvent| {
        dom::set_class(&clear, TABBING, false);
    });

    keys.always(Rc::new(RefCell::new(FocusVisibility { body })));
    Some(())
}
