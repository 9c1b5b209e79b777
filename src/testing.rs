//! Test harness - Deterministic in-memory host and element.
//!
//! Everything the host and the elements normally provide, minus the
//! nondeterminism:
//!
//! - [`MockElement`] - attribute map + listener table + synchronous
//!   dispatch
//! - [`TestTimers`] - manual-clock timer queue, so debounce tests never
//!   sleep
//! - [`TestHost`] - named state slots with coarse effect re-run on every
//!   write, and single-fire teardown

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use std::time::Duration;

use crate::host::{
    BoundElement, EventListener, HostScope, ListenerId, StateRef, TimerHandle, TimerScheduler,
};
use crate::types::{ElementEvent, Value};

// =============================================================================
// MockElement
// =============================================================================

/// An in-memory element with DOM-like attribute and listener semantics.
pub(crate) struct MockElement {
    tag: String,
    attrs: RefCell<BTreeMap<String, String>>,
    listeners: RefCell<HashMap<String, Vec<(ListenerId, EventListener)>>>,
    next_id: Cell<ListenerId>,
}

impl MockElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: RefCell::new(BTreeMap::new()),
            listeners: RefCell::new(HashMap::new()),
            next_id: Cell::new(0),
        }
    }

    /// Current value of an attribute, if present.
    pub fn attr(&self, name: &str) -> Option<String> {
        self.attrs.borrow().get(name).cloned()
    }

    /// Snapshot of all attributes.
    pub fn attrs(&self) -> BTreeMap<String, String> {
        self.attrs.borrow().clone()
    }

    /// Number of listeners attached for an event.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .get(event)
            .map(|v| v.len())
            .unwrap_or(0)
    }

    /// Synchronously dispatch an event to its listeners.
    ///
    /// The listener list is snapshotted first: a listener removing itself
    /// (or others) mid-dispatch affects subsequent dispatches only.
    pub fn dispatch(&self, event: &ElementEvent) {
        let snapshot: Vec<EventListener> = self
            .listeners
            .borrow()
            .get(&event.name)
            .map(|v| v.iter().map(|(_, l)| l.clone()).collect())
            .unwrap_or_default();
        for listener in snapshot {
            listener(event);
        }
    }
}

impl BoundElement for MockElement {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.attrs
            .borrow_mut()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&self, name: &str) {
        self.attrs.borrow_mut().remove(name);
    }

    fn has_attribute(&self, name: &str) -> bool {
        self.attrs.borrow().contains_key(name)
    }

    fn add_event_listener(&self, event: &str, listener: EventListener) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners
            .borrow_mut()
            .entry(event.to_string())
            .or_default()
            .push((id, listener));
        id
    }

    fn remove_event_listener(&self, event: &str, id: ListenerId) {
        if let Some(list) = self.listeners.borrow_mut().get_mut(event) {
            list.retain(|(lid, _)| *lid != id);
        }
    }
}

// =============================================================================
// TestTimers
// =============================================================================

struct ScheduledTimer {
    deadline: u64,
    seq: usize,
    cancelled: Rc<Cell<bool>>,
    callback: Box<dyn FnOnce()>,
}

/// Manual-clock timer scheduler. `advance` moves the clock and fires due
/// timers in deadline order; cancelled timers are skipped silently.
pub(crate) struct TestTimers {
    now_ms: Cell<u64>,
    seq: Cell<usize>,
    queue: RefCell<Vec<ScheduledTimer>>,
}

impl TestTimers {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            now_ms: Cell::new(0),
            seq: Cell::new(0),
            queue: RefCell::new(Vec::new()),
        })
    }

    /// Move the clock forward, firing every timer that becomes due.
    /// Timers scheduled by fired callbacks are honored within the same
    /// advance if they also become due.
    pub fn advance(&self, by: Duration) {
        self.now_ms.set(self.now_ms.get() + by.as_millis() as u64);
        loop {
            let next = {
                let mut queue = self.queue.borrow_mut();
                queue.retain(|t| !t.cancelled.get());
                let due = queue
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.deadline <= self.now_ms.get())
                    .min_by_key(|(_, t)| (t.deadline, t.seq))
                    .map(|(i, _)| i);
                due.map(|i| queue.remove(i))
            };
            match next {
                Some(timer) => (timer.callback)(),
                None => break,
            }
        }
    }

    /// Number of live (not cancelled) pending timers.
    pub fn pending(&self) -> usize {
        self.queue
            .borrow()
            .iter()
            .filter(|t| !t.cancelled.get())
            .count()
    }
}

impl TimerScheduler for TestTimers {
    fn schedule(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle {
        let cancelled = Rc::new(Cell::new(false));
        let seq = self.seq.get();
        self.seq.set(seq + 1);
        self.queue.borrow_mut().push(ScheduledTimer {
            deadline: self.now_ms.get() + delay.as_millis() as u64,
            seq,
            cancelled: cancelled.clone(),
            callback: f,
        });
        TimerHandle::new(Box::new(move || cancelled.set(true)))
    }
}

// =============================================================================
// TestHost
// =============================================================================

type EffectCell = Rc<RefCell<Box<dyn FnMut()>>>;

/// A minimal single-threaded host: named state slots, coarse-grained
/// effect re-run on every write, single-fire cleanups, manual timers.
pub(crate) struct TestHost {
    slots: Rc<RefCell<HashMap<String, Value>>>,
    writes: Rc<RefCell<HashMap<String, usize>>>,
    effects: Rc<RefCell<Vec<EffectCell>>>,
    cleanups: Rc<RefCell<Vec<Box<dyn FnOnce()>>>>,
    timers: Rc<TestTimers>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            slots: Rc::new(RefCell::new(HashMap::new())),
            writes: Rc::new(RefCell::new(HashMap::new())),
            effects: Rc::new(RefCell::new(Vec::new())),
            cleanups: Rc::new(RefCell::new(Vec::new())),
            timers: TestTimers::new(),
        }
    }

    /// A typed reference to one named slot.
    pub fn slot(&self, key: &str) -> StateRef {
        let key_get = key.to_string();
        let key_set = key.to_string();
        let slots = self.slots.clone();
        let host = self.clone_internals();
        StateRef::new(
            move || {
                slots
                    .borrow()
                    .get(&key_get)
                    .cloned()
                    .unwrap_or(Value::Undefined)
            },
            move |value| host.write(&key_set, value),
        )
    }

    /// Write a slot and re-run every registered effect (coarse-grained
    /// dependency model: every effect depends on every slot).
    pub fn set(&self, key: &str, value: Value) {
        self.clone_internals().write(key, value);
    }

    /// Read a slot (missing slots read as `Undefined`).
    pub fn get(&self, key: &str) -> Value {
        self.slots
            .borrow()
            .get(key)
            .cloned()
            .unwrap_or(Value::Undefined)
    }

    /// Number of writes a slot has received.
    pub fn write_count(&self, key: &str) -> usize {
        self.writes.borrow().get(key).copied().unwrap_or(0)
    }

    /// The manual clock backing this host's timers.
    pub fn timers(&self) -> Rc<TestTimers> {
        self.timers.clone()
    }

    /// The per-element scope: effects run immediately and on every write;
    /// cleanups fire exactly once at [`TestHost::teardown`].
    pub fn scope(&self) -> HostScope {
        let effects = self.effects.clone();
        let cleanups = self.cleanups.clone();
        HostScope::new(
            Rc::new(move |f: Box<dyn FnMut()>| {
                let cell: EffectCell = Rc::new(RefCell::new(f));
                (cell.borrow_mut())();
                effects.borrow_mut().push(cell);
            }),
            Rc::new(move |f: Box<dyn FnOnce()>| {
                cleanups.borrow_mut().push(f);
            }),
            self.timers.clone(),
        )
    }

    /// Simulate element teardown: run every cleanup once and dispose all
    /// effects.
    pub fn teardown(&self) {
        self.effects.borrow_mut().clear();
        let pending: Vec<_> = self.cleanups.borrow_mut().drain(..).collect();
        for cleanup in pending {
            cleanup();
        }
    }

    fn clone_internals(&self) -> HostInternals {
        HostInternals {
            slots: self.slots.clone(),
            writes: self.writes.clone(),
            effects: self.effects.clone(),
        }
    }
}

/// Write path shared by `set` and slot setters, clonable into closures.
struct HostInternals {
    slots: Rc<RefCell<HashMap<String, Value>>>,
    writes: Rc<RefCell<HashMap<String, usize>>>,
    effects: Rc<RefCell<Vec<EffectCell>>>,
}

impl HostInternals {
    fn write(&self, key: &str, value: Value) {
        self.slots.borrow_mut().insert(key.to_string(), value);
        *self.writes.borrow_mut().entry(key.to_string()).or_insert(0) += 1;
        // Re-run effects after releasing the slot borrow
        let snapshot: Vec<EffectCell> = self.effects.borrow().clone();
        for effect in snapshot {
            (effect.borrow_mut())();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_element_attributes() {
        let el = MockElement::new("ytz-toggle");
        assert!(!el.has_attribute("checked"));
        el.set_attribute("checked", "");
        assert!(el.has_attribute("checked"));
        assert_eq!(el.attr("checked"), Some("".to_string()));
        el.remove_attribute("checked");
        assert!(!el.has_attribute("checked"));
        // Removing twice is a no-op
        el.remove_attribute("checked");
    }

    #[test]
    fn test_timers_fire_in_deadline_order() {
        let timers = TestTimers::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        for (label, delay) in [("b", 20u64), ("a", 10), ("c", 30)] {
            let order = order.clone();
            timers.schedule(
                Duration::from_millis(delay),
                Box::new(move || order.borrow_mut().push(label)),
            );
        }
        timers.advance(Duration::from_millis(50));
        assert_eq!(&*order.borrow(), &["a", "b", "c"]);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn test_timer_cancellation() {
        let timers = TestTimers::new();
        let fired = Rc::new(Cell::new(false));
        let fired_clone = fired.clone();
        let handle = timers.schedule(
            Duration::from_millis(10),
            Box::new(move || fired_clone.set(true)),
        );
        handle.cancel();
        timers.advance(Duration::from_millis(50));
        assert!(!fired.get());
    }

    #[test]
    fn test_host_effects_rerun_on_write() {
        let host = TestHost::new();
        let slot = host.slot("n");
        let seen = Rc::new(RefCell::new(Vec::new()));

        let scope = host.scope();
        {
            let slot = slot.clone();
            let seen = seen.clone();
            scope.effect(move || seen.borrow_mut().push(slot.get()));
        }
        assert_eq!(&*seen.borrow(), &[Value::Undefined]);

        host.set("n", Value::Number(1.0));
        assert_eq!(seen.borrow().len(), 2);
        assert_eq!(seen.borrow()[1], Value::Number(1.0));

        host.teardown();
        host.set("n", Value::Number(2.0));
        assert_eq!(seen.borrow().len(), 2);
    }

    #[test]
    fn test_cleanups_fire_exactly_once() {
        let host = TestHost::new();
        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        host.scope().on_cleanup(move || count_clone.set(count_clone.get() + 1));

        host.teardown();
        host.teardown();
        assert_eq!(count.get(), 1);
    }
}
