//! Event payload → state value coercion.
//!
//! Every configured event funnels into this one pipeline, in fixed order:
//!
//! 1. read the descriptor's `detail_key` from the event payload; a missing
//!    key degrades to `false` (boolean kinds) or the empty string (value
//!    kinds) rather than erroring
//! 2. a closing event forces `false` on boolean kinds regardless of
//!    payload (closing implies off)
//! 3. `number` modifier coerces to a number
//! 4. `trim` modifier strips surrounding whitespace from strings
//!
//! The result is written back through the typed state reference; there is
//! no serialization step.

use crate::descriptor::BindingDescriptor;
use crate::types::{ElementEvent, Modifiers, Value};

/// Extract the payload value for a descriptor, with graceful defaulting.
pub fn extract_detail(event: &ElementEvent, descriptor: &BindingDescriptor) -> Value {
    match event.detail.get(descriptor.detail_key) {
        Some(value) => value.clone(),
        None if descriptor.boolean => Value::Bool(false),
        None => Value::Str(String::new()),
    }
}

/// Run the full coercion pipeline for one event.
pub fn coerce_event(
    event: &ElementEvent,
    descriptor: &BindingDescriptor,
    modifiers: Modifiers,
) -> Value {
    let mut value = extract_detail(event, descriptor);

    if descriptor.boolean {
        if descriptor.is_closing(&event.name) {
            value = Value::Bool(false);
        } else {
            // Presence semantics: write back a real boolean
            value = Value::Bool(value.is_truthy());
        }
    }

    if modifiers.contains(Modifiers::NUMBER) {
        value = value.to_number();
    }

    if modifiers.contains(Modifiers::TRIM) {
        value = value.trimmed();
    }

    value
}
