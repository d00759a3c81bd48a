use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Element, HtmlElement, MouseEvent};

use super::{Overlay, SharedScrollLock};
use crate::dom;
use crate::keyboard::{Key, KeyHandler, KeyRouter};

pub struct PrivacyModal {
    overlay: Overlay,
}

impl PrivacyModal {
    pub fn new(overlay: Overlay) -> Self {
        Self { overlay }
    }

    pub fn open(&mut self) {
        self.overlay.show();
    }

    pub fn close(&mut self) {
        self.overlay.hide();
    }
}

impl KeyHandler for PrivacyModal {
    fn is_active(&self) -> bool {
        self.overlay.is_open()
    }

    fn on_key(&mut self, key: Key) {
        if key == Key::Escape {
            self.close();
        }
    }
}

pub fn init(document: &Document, lock: &SharedScrollLock, keys: &mut KeyRouter) -> Option<()> {
    let modal: HtmlElement = dom::by_id(document, "privacy-modal")?;
    let button: Element = dom::by_id(document, "privacy-policy-btn")?;
    let close_button: Element = dom::query_in(&modal, ".close")?;

    let controller = Rc::new(RefCell::new(PrivacyModal::new(Overlay::new(Some(modal.clone()), lock.clone()))));

    {
        let controller = controller.clone();
        dom::listen(&button, "click", move |_: MouseEvent| controller.borrow_mut().open());
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

    fn detached(lock: &SharedScrollLock) -> PrivacyModal {
        PrivacyModal::new(Overlay::new(None, lock.clone()))
    }

    #[test]
    fn escape_closes_only_while_open() {
        let lock = ScrollLock::new(None);
        let mut modal = detached(&lock);

        assert!(!modal.is_active());
        modal.open();
        assert!(modal.is_active());
        assert!(lock.borrow().is_locked());

        modal.on_key(Key::ArrowLeft);
        assert!(modal.is_active());

        modal.on_key(Key::Escape);
        assert!(!modal.is_active());
        assert!(!lock.borrow().is_locked());
    }
}
