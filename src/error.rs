//! Error taxonomy.
//!
//! Nothing in this crate is fatal: every variant here is swallowed at the
//! directive boundary with a `tracing` diagnostic, and the element is left
//! unmanaged. The enum exists so the fallible seams (`try_bind_model`,
//! descriptor lookup) stay inspectable for hosts and tests. Failures inside
//! the host evaluator itself are not represented - those propagate to the
//! host's own error boundary.

/// Engine-local binding failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// The model resolver found no binding descriptor for the element's tag.
    #[error("no binding descriptor for tag `{0}`; element left unmanaged")]
    UnsupportedTag(String),

    /// A two-way directive received a command expression instead of a
    /// state slot.
    #[error("directive `{0}` expects a state slot expression")]
    ExpectedSlot(String),

    /// An action-style directive received a state slot instead of a
    /// command expression.
    #[error("directive `{0}` expects a command expression")]
    ExpectedCommand(String),

    /// A modifier the directive does not support (e.g. `once` on the
    /// model resolver). The modifier is ignored; the binding proceeds.
    #[error("directive `{directive}` does not support the `{modifier}` modifier")]
    UnsupportedModifier {
        /// Directive suffix (e.g. "model").
        directive: String,
        /// Offending modifier name.
        modifier: String,
    },
}
