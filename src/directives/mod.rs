//! Directive Registry - Names, registration, and the debounce helper.
//!
//! Registers every binding rule with the host under a configurable
//! prefix (default `ytz`):
//!
//! - one alias per component kind (`ytz:dialog`, `ytz:toggle`, ...),
//!   descriptor-parameterized instances of the generic engine with
//!   `once` support
//! - the unified resolver `ytz:model`
//! - the action kind `ytz:dismiss` and the readiness kind `ytz:init`
//! - one magic, `$ytz`, reporting whether the receiving element has a
//!   binding descriptor (feature detection in host expressions)
//!
//! # Example
//!
//! ```ignore
//! use ytz_bind::directives;
//!
//! // In a framework adapter's plugin install hook:
//! directives::register(&registrar);
//! // Or under a custom prefix:
//! directives::register_with_prefix("ui", &registrar);
//! ```

mod debounce;
mod kinds;
pub mod model;

pub use debounce::Debounced;
pub use kinds::{DISMISS_EVENT, READY_EVENT};
pub use model::{setup_model, try_bind_model};

use std::rc::Rc;

use crate::descriptor::{descriptor_for, descriptors};
use crate::host::DirectiveRegistrar;
use crate::types::{Value, DEFAULT_PREFIX};

// =============================================================================
// Names
// =============================================================================

/// Compose a fully prefixed directive name.
pub fn directive_name(prefix: &str, suffix: &str) -> String {
    format!("{prefix}:{suffix}")
}

// =============================================================================
// Registration
// =============================================================================

/// Register every directive and magic under the default `ytz` prefix.
pub fn register(registrar: &dyn DirectiveRegistrar) {
    register_with_prefix(DEFAULT_PREFIX, registrar);
}

/// Register every directive and magic under a custom prefix.
pub fn register_with_prefix(prefix: &str, registrar: &dyn DirectiveRegistrar) {
    for descriptor in descriptors() {
        let suffix = kinds::kind_suffix(descriptor.tag);
        registrar.directive(
            &directive_name(prefix, suffix),
            Rc::new(move |el, binding, modifiers, scope| {
                kinds::bind_kind(descriptor, el, binding, modifiers, scope)
            }),
        );
    }

    registrar.directive(&directive_name(prefix, "model"), Rc::new(model::setup_model));
    registrar.directive(&directive_name(prefix, "dismiss"), Rc::new(kinds::bind_dismiss));
    registrar.directive(&directive_name(prefix, "init"), Rc::new(kinds::bind_init));

    registrar.magic(
        prefix,
        Rc::new(|el| Value::Bool(descriptor_for(el.tag_name()).is_some())),
    );
}
