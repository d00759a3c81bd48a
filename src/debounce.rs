//! Trailing-edge debounce.
//!
//! Every call drops the pending timer, which cancels it, and schedules a new
//! one `wait_ms` after the latest call. Only the last call's argument is
//! delivered.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Source of one-shot timers. Dropping a handle cancels its task.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, wait_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub struct BrowserTimers;

impl Scheduler for BrowserTimers {
    type Handle = Timeout;

    fn schedule(&self, wait_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(wait_ms, task)
    }
}

pub struct Debounced<A, S: Scheduler> {
    scheduler: S,
    wait_ms: u32,
    callback: Rc<RefCell<dyn FnMut(A)>>,
    pending: Option<S::Handle>,
}

impl<A: 'static, S: Scheduler> Debounced<A, S> {
    pub fn call(&mut self, arg: A) {
        self.pending.take();
        let callback = self.callback.clone();
        let task = Box::new(move || {
            (&mut *callback.borrow_mut())(arg);
        });
        self.pending = Some(self.scheduler.schedule(self.wait_ms, task));
    }
}

pub fn debounce<A, F>(wait_ms: u32, f: F) -> Debounced<A, BrowserTimers>
where
    A: 'static,
    F: FnMut(A) + 'static,
{
    debounce_with(BrowserTimers, wait_ms, f)
}

pub fn debounce_with<A, S, F>(scheduler: S, wait_ms: u32, f: F) -> Debounced<A, S>
where
    S: Scheduler,
    F: FnMut(A) + 'static,
{
    Debounced {
        scheduler,
        wait_ms,
        callback: Rc::new(RefCell::new(f)),
        pending: None,
    }
}
