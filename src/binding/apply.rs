//! State → attribute writes.
//!
//! One function, two attribute semantics:
//!
//! - boolean (presence-based): truthy sets an empty-string attribute,
//!   falsy removes it
//! - value-based: the value is stringified and set
//!
//! Invariant: an `Undefined` evaluation never touches the element. A
//! transient undefined read (state slot not yet populated) must not
//! clobber existing attribute state.

use crate::descriptor::BindingDescriptor;
use crate::host::BoundElement;
use crate::types::Value;

/// Apply a state value to an element attribute.
pub fn write_attribute(el: &dyn BoundElement, attribute: &str, boolean: bool, value: &Value) {
    if value.is_undefined() {
        return;
    }
    if boolean {
        if value.is_truthy() {
            el.set_attribute(attribute, "");
        } else {
            el.remove_attribute(attribute);
        }
    } else if let Some(serialized) = value.as_attribute() {
        el.set_attribute(attribute, &serialized);
    }
}

/// Apply a state value per a descriptor's attribute contract.
pub fn write_descriptor_attribute(
    el: &dyn BoundElement,
    descriptor: &BindingDescriptor,
    value: &Value,
) {
    write_attribute(el, descriptor.attribute, descriptor.boolean, value);
}
