//! Host Scope - Per-element reactivity utilities and registration hooks.
//!
//! The host reactivity system hands every directive setup three things:
//! a resolved expression ([`Binding`]), a reactive-effect scheduler, and a
//! teardown registrar. Expressions arrive pre-resolved as typed handles -
//! a [`StateRef`] with `get`/`set` closures bound to one state slot, or a
//! [`Command`] evaluated for its side effect - so the engine never builds
//! assignment strings or escapes quotes.
//!
//! # Example
//!
//! ```ignore
//! use ytz_bind::host::{Binding, HostScope, StateRef};
//!
//! // A host adapter resolving `open` into a typed slot:
//! let slot = StateRef::new(
//!     move || store.read("open"),
//!     move |v| store.write("open", v),
//! );
//! setup(element, Binding::Slot(slot), modifiers, &scope);
//! ```

use std::rc::Rc;

use crate::types::{Modifiers, Value};

use super::element::BoundElement;
use super::timers::TimerScheduler;

// =============================================================================
// StateRef - Typed reference into host state
// =============================================================================

/// A typed reference to one host state slot.
///
/// `get` re-reads the slot (dependency-tracked when called inside a host
/// effect); `set` writes it back, triggering dependent computations.
#[derive(Clone)]
pub struct StateRef {
    get: Rc<dyn Fn() -> Value>,
    set: Rc<dyn Fn(Value)>,
}

impl StateRef {
    /// Build a reference from host-supplied accessor closures.
    pub fn new(get: impl Fn() -> Value + 'static, set: impl Fn(Value) + 'static) -> Self {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// Read the current value of the slot.
    pub fn get(&self) -> Value {
        (self.get)()
    }

    /// Write a value into the slot.
    pub fn set(&self, value: Value) {
        (self.set)(value)
    }
}

// =============================================================================
// Command & Binding
// =============================================================================

/// An expression evaluated purely for its side effect (dismiss, init).
pub type Command = Rc<dyn Fn()>;

/// A directive expression, resolved by the host before setup.
#[derive(Clone)]
pub enum Binding {
    /// A readable/writable state slot (two-way and write-only kinds).
    Slot(StateRef),
    /// A command invoked on a trigger (action and readiness kinds).
    Command(Command),
}

impl Binding {
    /// The slot, if this binding is one.
    pub fn as_slot(&self) -> Option<&StateRef> {
        match self {
            Binding::Slot(slot) => Some(slot),
            Binding::Command(_) => None,
        }
    }

    /// The command, if this binding is one.
    pub fn as_command(&self) -> Option<&Command> {
        match self {
            Binding::Command(command) => Some(command),
            Binding::Slot(_) => None,
        }
    }
}

// =============================================================================
// HostScope - The effect/cleanup/timers triad
// =============================================================================

/// Effect registrar: runs `f` immediately, re-runs it whenever a tracked
/// dependency changes, and disposes it at element teardown.
pub type EffectFn = Rc<dyn Fn(Box<dyn FnMut()>)>;

/// Teardown registrar: invokes `f` exactly once when the element unmounts.
pub type CleanupFn = Rc<dyn Fn(Box<dyn FnOnce()>)>;

/// Per-element host utilities handed to every directive setup.
///
/// The host guarantees:
/// - effects registered here are auto-tracked and auto-disposed at teardown
/// - every cleanup closure fires exactly once, synchronously at teardown
/// - both run on the single host event-loop thread
#[derive(Clone)]
pub struct HostScope {
    effect: EffectFn,
    cleanup: CleanupFn,
    timers: Rc<dyn TimerScheduler>,
}

impl HostScope {
    /// Assemble a scope from host facilities.
    pub fn new(effect: EffectFn, cleanup: CleanupFn, timers: Rc<dyn TimerScheduler>) -> Self {
        Self {
            effect,
            cleanup,
            timers,
        }
    }

    /// Register a reactive computation (runs now, re-runs on change).
    pub fn effect(&self, f: impl FnMut() + 'static) {
        (self.effect)(Box::new(f))
    }

    /// Register a teardown callback (fires exactly once).
    pub fn on_cleanup(&self, f: impl FnOnce() + 'static) {
        (self.cleanup)(Box::new(f))
    }

    /// The host timer scheduler (backs the `lazy` debounce).
    pub fn timers(&self) -> Rc<dyn TimerScheduler> {
        self.timers.clone()
    }
}

// =============================================================================
// Directive Registration
// =============================================================================

/// Directive setup callback, invoked by the host once per matching element.
pub type DirectiveSetup = Rc<dyn Fn(Rc<dyn BoundElement>, Binding, Modifiers, &HostScope)>;

/// Magic factory: produces a value for use in host expressions, given the
/// element the expression evaluates against.
pub type MagicFactory = Rc<dyn Fn(Rc<dyn BoundElement>) -> Value>;

/// Host registration hooks for directives and magics.
///
/// Framework adapters implement this over their plugin surface; the
/// registry in [`crate::directives`] drives it once at plugin install.
pub trait DirectiveRegistrar {
    /// Register a directive setup under a fully prefixed name.
    fn directive(&self, name: &str, setup: DirectiveSetup);

    /// Register a magic property under a fully prefixed name.
    fn magic(&self, name: &str, factory: MagicFactory);
}
