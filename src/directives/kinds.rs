//! Per-kind directives - descriptor aliases plus the special kinds.
//!
//! Each supported component kind gets its own directive name
//! (`ytz:dialog`, `ytz:toggle`, ...) whose setup is a thin alias over the
//! generic engine in [`super::model`], parameterized by that kind's
//! descriptor. The per-kind path adds what the model resolver does not
//! carry:
//!
//! - `once` - evaluate and write exactly once at setup, no event binding,
//!   no subscription
//! - `number` applied on the outbound (state → attribute) direction for
//!   numeric displays
//!
//! Two kinds do not fit the descriptor mold and are hand-wired here:
//! `dismiss` (a generic action event invoking the expression as a
//! command) and `init` (a one-shot readiness trigger).

use std::cell::Cell;
use std::rc::Rc;

use crate::binding::{write_descriptor_attribute, DirectiveInstance};
use crate::descriptor::BindingDescriptor;
use crate::error::BindError;
use crate::host::{Binding, BoundElement, HostScope, StateRef};
use crate::types::{Modifiers, Value, READY_ATTRIBUTE};

use super::model::bind_slot;

/// Event name the `dismiss` directive listens for.
pub const DISMISS_EVENT: &str = "dismiss";

/// Event name the `init` directive arms itself on.
pub const READY_EVENT: &str = "ready";

// =============================================================================
// Descriptor Kinds
// =============================================================================

/// Setup for a per-kind directive: the generic engine against a fixed
/// descriptor, with `once` handled before anything subscribes.
pub(crate) fn bind_kind(
    descriptor: &'static BindingDescriptor,
    el: Rc<dyn BoundElement>,
    binding: Binding,
    modifiers: Modifiers,
    scope: &HostScope,
) {
    let Some(slot) = binding.as_slot() else {
        let err = BindError::ExpectedSlot(kind_suffix(descriptor.tag).into());
        tracing::warn!(tag = el.tag_name(), %err, "binding skipped");
        return;
    };

    // Outbound `number` coercion (numeric displays): wrap the getter so
    // every write sees a number. Undefined stays undefined - the skip
    // guard must still apply.
    let slot = if modifiers.contains(Modifiers::NUMBER) {
        let inner = slot.clone();
        let setter = slot.clone();
        StateRef::new(
            move || match inner.get() {
                Value::Undefined => Value::Undefined,
                value => value.to_number(),
            },
            move |value| setter.set(value),
        )
    } else {
        slot.clone()
    };

    if modifiers.contains(Modifiers::ONCE) {
        // One evaluation, one write, no event binding, no subscription.
        write_descriptor_attribute(&*el, descriptor, &slot.get());
        return;
    }

    bind_slot(el, slot, modifiers, scope, descriptor);
}

/// The directive suffix for a descriptor tag (`ytz-combo-box` → `combo-box`).
pub(crate) fn kind_suffix(tag: &'static str) -> &'static str {
    tag.strip_prefix("ytz-").unwrap_or(tag)
}

// =============================================================================
// Dismiss - Generic action kind
// =============================================================================

/// Setup for `{prefix}:dismiss`: DOM → state only. One generic action
/// event invokes the expression as a command; no value ever flows.
pub(crate) fn bind_dismiss(
    el: Rc<dyn BoundElement>,
    binding: Binding,
    _modifiers: Modifiers,
    scope: &HostScope,
) {
    let Some(command) = binding.as_command() else {
        let err = BindError::ExpectedCommand("dismiss".into());
        tracing::warn!(tag = el.tag_name(), %err, "binding skipped");
        return;
    };

    let instance = DirectiveInstance::new(el);
    let command = command.clone();
    instance.listen(DISMISS_EVENT, Rc::new(move |_| command()));
    instance.register_teardown(scope);
    instance.activate();
}

// =============================================================================
// Init - One-shot readiness kind
// =============================================================================

/// Setup for `{prefix}:init`: if the element is already marked ready the
/// command runs synchronously at setup; otherwise a one-shot listener for
/// the readiness event runs it once and never re-arms.
pub(crate) fn bind_init(
    el: Rc<dyn BoundElement>,
    binding: Binding,
    _modifiers: Modifiers,
    scope: &HostScope,
) {
    let Some(command) = binding.as_command() else {
        let err = BindError::ExpectedCommand("init".into());
        tracing::warn!(tag = el.tag_name(), %err, "binding skipped");
        return;
    };

    if el.has_attribute(READY_ATTRIBUTE) {
        command();
        return;
    }

    let instance = DirectiveInstance::new(el);
    let command = command.clone();
    let fired = Cell::new(false);
    instance.listen(
        READY_EVENT,
        Rc::new(move |_| {
            if !fired.replace(true) {
                command();
            }
        }),
    );
    instance.register_teardown(scope);
    instance.activate();
}
