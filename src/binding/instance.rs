//! Directive Instance - Per-element ownership and lifecycle.
//!
//! One instance per bound element. It exclusively owns the element's
//! event-listener registrations and the optional pending debounce timer,
//! and it never outlives the element: the host fires the teardown
//! callback exactly once, which disposes the instance.
//!
//! Lifecycle: `created → active → disposed`. Disposal is idempotent and
//! final - a disposed instance holds no live listeners and no pending
//! timer, so nothing can fire into a detached element.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::directives::Debounced;
use crate::host::{BoundElement, EventListener, HostScope, ListenerId};

// =============================================================================
// Instance State
// =============================================================================

/// Lifecycle state of a directive instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceState {
    /// Constructed, setup still running.
    Created,
    /// Setup complete; both directions live.
    Active,
    /// Torn down; re-entry is not possible.
    Disposed,
}

// =============================================================================
// DirectiveInstance
// =============================================================================

/// Ephemeral per-element binding state.
pub struct DirectiveInstance {
    element: Rc<dyn BoundElement>,
    listeners: RefCell<Vec<(String, ListenerId)>>,
    debounce: RefCell<Option<Rc<Debounced>>>,
    state: Cell<InstanceState>,
}

impl DirectiveInstance {
    /// Create an instance for an element (state: `Created`).
    pub fn new(element: Rc<dyn BoundElement>) -> Rc<Self> {
        Rc::new(Self {
            element,
            listeners: RefCell::new(Vec::new()),
            debounce: RefCell::new(None),
            state: Cell::new(InstanceState::Created),
        })
    }

    /// The element this instance is attached to.
    pub fn element(&self) -> &Rc<dyn BoundElement> {
        &self.element
    }

    /// Current lifecycle state.
    pub fn state(&self) -> InstanceState {
        self.state.get()
    }

    /// Attach a listener and take ownership of its registration.
    pub fn listen(&self, event: &str, listener: EventListener) {
        let id = self.element.add_event_listener(event, listener);
        self.listeners.borrow_mut().push((event.to_string(), id));
    }

    /// Adopt the debouncer so disposal can cancel its pending timer.
    pub fn adopt_debounce(&self, debounce: Rc<Debounced>) {
        *self.debounce.borrow_mut() = Some(debounce);
    }

    /// Mark setup complete (`created → active`).
    pub fn activate(&self) {
        if self.state.get() == InstanceState::Created {
            self.state.set(InstanceState::Active);
        }
    }

    /// Tear down: remove every listener and cancel any pending debounce
    /// timer, synchronously. Idempotent; later calls are no-ops.
    pub fn dispose(&self) {
        if self.state.get() == InstanceState::Disposed {
            return;
        }
        self.state.set(InstanceState::Disposed);

        for (event, id) in self.listeners.borrow_mut().drain(..) {
            self.element.remove_event_listener(&event, id);
        }
        if let Some(debounce) = self.debounce.borrow_mut().take() {
            debounce.cancel();
        }
    }

    /// Register disposal with the host's teardown callback.
    pub fn register_teardown(self: &Rc<Self>, scope: &HostScope) {
        let instance = self.clone();
        scope.on_cleanup(move || instance.dispose());
    }
}
