//! Unified Model Resolver - `{prefix}:model`.
//!
//! One directive for any recognized component kind: the element's tag is
//! looked up in the static descriptor table and the generic state↔element
//! synchronization algorithm runs against that descriptor. Unknown tags
//! are diagnosed and left unmanaged; nothing here throws.
//!
//! The same engine function ([`bind_slot`]) also backs the per-kind
//! directives - those are descriptor-table aliases with `once` support
//! layered on top (see [`super::kinds`]).

use std::rc::Rc;

use crate::binding::{coerce_event, write_descriptor_attribute, DirectiveInstance};
use crate::descriptor::{descriptor_for, BindingDescriptor};
use crate::error::BindError;
use crate::host::{Binding, BoundElement, HostScope, StateRef};
use crate::types::{Modifiers, Value, LAZY_DEBOUNCE};

use super::debounce::Debounced;

// =============================================================================
// Shared Engine
// =============================================================================

/// Establish a continuous two-way binding between a state slot and an
/// element, per a descriptor.
///
/// - state → DOM: a host effect re-applies the attribute write on every
///   dependency change; `Undefined` evaluations skip the write.
/// - DOM → state: one shared handler for every descriptor event runs the
///   coercion pipeline and writes back through the typed setter. With
///   `lazy`, the handler is debounced by [`LAZY_DEBOUNCE`].
///
/// The returned instance owns all listeners and the pending debounce
/// timer; teardown disposes it exactly once.
pub(crate) fn bind_slot(
    el: Rc<dyn BoundElement>,
    slot: StateRef,
    modifiers: Modifiers,
    scope: &HostScope,
    descriptor: &'static BindingDescriptor,
) -> Rc<DirectiveInstance> {
    let instance = DirectiveInstance::new(el.clone());

    // State → DOM: reactive, auto-disposed by the host at teardown.
    {
        let el = el.clone();
        let slot = slot.clone();
        scope.effect(move || {
            write_descriptor_attribute(&*el, descriptor, &slot.get());
        });
    }

    // DOM → state: skipped entirely for write-only kinds.
    if descriptor.is_two_way() {
        let write_back: Rc<dyn Fn(Value)> = {
            let slot = slot.clone();
            Rc::new(move |value| slot.set(value))
        };

        let sink: Rc<dyn Fn(Value)> = if modifiers.contains(Modifiers::LAZY) {
            let debounced = Debounced::new(scope.timers(), LAZY_DEBOUNCE, {
                let write_back = write_back.clone();
                move |value| write_back(value)
            });
            instance.adopt_debounce(debounced.clone());
            Rc::new(move |value| debounced.call(value))
        } else {
            write_back
        };

        // One handler for all configured events: `input` and `select` on
        // a combo-box funnel into the same coercion pipeline.
        let handler: crate::host::EventListener = Rc::new(move |event| {
            sink(coerce_event(event, descriptor, modifiers));
        });

        for event in descriptor.events {
            instance.listen(event, handler.clone());
        }
    }

    instance.register_teardown(scope);
    instance.activate();
    instance
}

// =============================================================================
// Model Directive
// =============================================================================

/// Bind an element through the descriptor table, reporting failures.
///
/// Unsupported tags and command expressions return an error instead of
/// binding; the `once` modifier is not part of the model contract and is
/// diagnosed and ignored.
pub fn try_bind_model(
    el: Rc<dyn BoundElement>,
    binding: Binding,
    mut modifiers: Modifiers,
    scope: &HostScope,
) -> Result<(), BindError> {
    let slot = binding
        .as_slot()
        .ok_or_else(|| BindError::ExpectedSlot("model".into()))?
        .clone();

    let descriptor = descriptor_for(el.tag_name())
        .ok_or_else(|| BindError::UnsupportedTag(el.tag_name().to_string()))?;

    if modifiers.contains(Modifiers::ONCE) {
        let err = BindError::UnsupportedModifier {
            directive: "model".into(),
            modifier: "once".into(),
        };
        tracing::warn!(tag = el.tag_name(), %err, "ignoring modifier");
        modifiers.remove(Modifiers::ONCE);
    }

    bind_slot(el, slot, modifiers, scope, descriptor);
    Ok(())
}

/// Directive entry point: like [`try_bind_model`] but non-fatal - every
/// failure is swallowed with a diagnostic and the element stays unmanaged.
pub fn setup_model(
    el: Rc<dyn BoundElement>,
    binding: Binding,
    modifiers: Modifiers,
    scope: &HostScope,
) {
    let tag = el.tag_name().to_string();
    if let Err(err) = try_bind_model(el, binding, modifiers, scope) {
        tracing::warn!(tag, %err, "model binding skipped");
    }
}
