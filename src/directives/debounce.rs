//! Trailing debounce over a cancellable host timer.
//!
//! The `lazy` modifier routes DOM → state writes through this: a burst of
//! events within the quiet interval collapses to the last one. Each call
//! cancels the pending timer and schedules a fresh one carrying the new
//! value; disposal cancels whatever is pending so nothing fires into a
//! detached element.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::host::{TimerHandle, TimerScheduler};
use crate::types::Value;

/// A debounced value sink.
pub struct Debounced {
    timers: Rc<dyn TimerScheduler>,
    delay: Duration,
    sink: Rc<dyn Fn(Value)>,
    pending: RefCell<Option<TimerHandle>>,
}

impl Debounced {
    /// Wrap `sink` so calls coalesce to the trailing one after `delay`.
    pub fn new(
        timers: Rc<dyn TimerScheduler>,
        delay: Duration,
        sink: impl Fn(Value) + 'static,
    ) -> Rc<Self> {
        Rc::new(Self {
            timers,
            delay,
            sink: Rc::new(sink),
            pending: RefCell::new(None),
        })
    }

    /// Feed a value. Any call arriving before the quiet period elapses
    /// cancels the pending one; only the latest value reaches the sink.
    pub fn call(&self, value: Value) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
        let sink = self.sink.clone();
        let handle = self
            .timers
            .schedule(self.delay, Box::new(move || sink(value)));
        *self.pending.borrow_mut() = Some(handle);
    }

    /// Cancel the pending timer, if any. No-op after it has fired.
    pub fn cancel(&self) {
        if let Some(handle) = self.pending.borrow_mut().take() {
            handle.cancel();
        }
    }
}
