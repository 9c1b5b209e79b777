//! # ytz-bind
//!
//! Declarative two-way binding engine for ytz custom elements.
//!
//! Synchronizes external reactive state with custom-element attributes and
//! DOM events through a uniform protocol: attribute write, event-to-state
//! write-back, value coercion, debouncing, boolean presence semantics,
//! idempotent `once` mode, and leak-free teardown - the same algorithm for
//! every supported component kind, with no per-component bespoke code.
//!
//! ## Architecture
//!
//! Two cooperating pieces, both consumers of a host reactivity system:
//!
//! - the **directive registry** ([`directives`]) registers one binding rule
//!   per component kind under a namespaced name (default prefix `ytz`),
//!   plus the action (`dismiss`) and readiness (`init`) kinds
//! - the **unified model resolver** (`{prefix}:model`) handles any
//!   recognized kind by looking up its [`descriptor::BindingDescriptor`]
//!   in a static table and running one generic state↔element algorithm
//!
//! The host reactivity system and the elements themselves are external
//! collaborators, reached through the [`host`] boundary: typed state
//! references (`get`/`set` closures bound to one state slot), an `effect`
//! scheduler, a one-shot teardown registrar, cancellable timers, and the
//! attribute/event surface of a bound element.
//!
//! ```text
//! host state ──effect──▶ attribute write (presence / stringified)
//! element events ──coerce──▶ typed set (optionally debounced 150 ms)
//! ```
//!
//! Both directions run independently until the host fires the element's
//! teardown, which removes every listener and cancels any pending
//! debounce timer.
//!
//! ## Modules
//!
//! - [`types`] - `Value`, element events, `Modifiers`, constants
//! - [`host`] - boundary traits: scope, element, timers
//! - [`descriptor`] - static per-tag binding descriptors
//! - [`binding`] - attribute writes, coercion pipeline, instance lifecycle
//! - [`directives`] - registry, per-kind setups, model resolver, debounce
//! - [`error`] - the (non-fatal) failure taxonomy

pub mod binding;
pub mod descriptor;
pub mod directives;
pub mod error;
pub mod host;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use types::{
    ElementEvent, EventDetail, Modifiers, Value, DEFAULT_PREFIX, LAZY_DEBOUNCE, READY_ATTRIBUTE,
};

pub use host::{
    Binding, BoundElement, Command, DirectiveRegistrar, DirectiveSetup, EventListener, HostScope,
    ListenerId, MagicFactory, StateRef, TimerHandle, TimerScheduler,
};

pub use descriptor::{descriptor_for, supported_tags, BindingDescriptor};

pub use binding::{write_attribute, DirectiveInstance, InstanceState};

pub use directives::{
    directive_name, register, register_with_prefix, setup_model, try_bind_model, Debounced,
    DISMISS_EVENT, READY_EVENT,
};

pub use error::BindError;
