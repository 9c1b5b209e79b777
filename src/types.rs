//! Core types for ytz-bind.
//!
//! These types define the foundation that everything builds on.
//! They flow across the host boundary and define what the binding
//! engine understands: dynamic values, element events, and modifiers.

use std::time::Duration;

// =============================================================================
// Constants
// =============================================================================

/// Debounce interval applied by the `lazy` modifier.
///
/// A burst of events within this window collapses to the trailing one.
pub const LAZY_DEBOUNCE: Duration = Duration::from_millis(150);

/// Default directive prefix. Directives register as `{prefix}:{suffix}`.
pub const DEFAULT_PREFIX: &str = "ytz";

/// Attribute that marks an element as ready for the `init` directive.
pub const READY_ATTRIBUTE: &str = "ready";

// =============================================================================
// Value - Dynamic value crossing the host boundary
// =============================================================================

/// A dynamic value read from or written into host state.
///
/// Mirrors the value space of the host expression language. `Undefined`
/// is distinct from every other variant: a reactive write that evaluates
/// to `Undefined` is skipped rather than clearing attribute state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// No value. Writes of `Undefined` are skipped, never applied.
    #[default]
    Undefined,
    /// Boolean.
    Bool(bool),
    /// Number (f64, like the host expression language).
    Number(f64),
    /// String.
    Str(String),
}

impl Value {
    /// Check for `Undefined`.
    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Truthiness, following the host expression language:
    /// `Undefined`, `false`, `0`, `NaN`, and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::Str(s) => !s.is_empty(),
        }
    }

    /// Serialize for a value-based attribute write.
    ///
    /// Returns `None` for `Undefined` (the write is skipped). Integral
    /// numbers render without a fraction (`42`, not `42.0`) so attribute
    /// round-trips stay stable.
    pub fn as_attribute(&self) -> Option<String> {
        match self {
            Value::Undefined => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Number(n) => Some(format_number(*n)),
            Value::Str(s) => Some(s.clone()),
        }
    }

    /// Coerce to a number, following the host expression language:
    /// booleans become 0/1, unparseable strings become NaN.
    pub fn to_number(&self) -> Value {
        let n = match self {
            Value::Undefined => f64::NAN,
            Value::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            Value::Number(n) => *n,
            Value::Str(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        };
        Value::Number(n)
    }

    /// Strip surrounding whitespace from string values; other variants
    /// pass through unchanged.
    pub fn trimmed(self) -> Value {
        match self {
            Value::Str(s) => Value::Str(s.trim().to_string()),
            other => other,
        }
    }
}

/// Format a number the way the host expression language stringifies it.
fn format_number(n: f64) -> String {
    if n.is_finite() && n == n.trunc() && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{n}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

// =============================================================================
// Event Detail - Structured event payload
// =============================================================================

/// Structured payload carried by element events.
///
/// Custom elements emit events whose `detail` exposes a small set of
/// known keys (`value`, `checked`, `open`, `count`). Kept as a flat
/// key/value list - payloads have at most a handful of entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDetail {
    entries: Vec<(String, Value)>,
}

impl EventDetail {
    /// Empty payload (close/cancel-style events carry none).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style entry insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.push((key.into(), value.into()));
        self
    }

    /// Look up a key. Missing keys are the caller's defaulting problem.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True when the payload carries no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// An event dispatched by a bound element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementEvent {
    /// Event name (e.g. "change", "close", "input").
    pub name: String,
    /// Structured payload.
    pub detail: EventDetail,
}

impl ElementEvent {
    /// Create an event with an empty payload.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            detail: EventDetail::new(),
        }
    }

    /// Create an event with a payload.
    pub fn with_detail(name: impl Into<String>, detail: EventDetail) -> Self {
        Self {
            name: name.into(),
            detail,
        }
    }
}

// =============================================================================
// Modifiers (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Directive modifiers as a bitfield, parsed once at setup.
    ///
    /// Combine with bitwise OR: `Modifiers::LAZY | Modifiers::NUMBER`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        /// No modifiers.
        const NONE = 0;
        /// Apply state→DOM exactly once at setup; no event binding,
        /// no ongoing subscription.
        const ONCE = 1 << 0;
        /// Debounce DOM→state writes by [`LAZY_DEBOUNCE`].
        const LAZY = 1 << 1;
        /// Coerce incoming values to numbers.
        const NUMBER = 1 << 2;
        /// Strip surrounding whitespace from incoming strings.
        const TRIM = 1 << 3;
    }
}

impl Modifiers {
    /// Parse a modifier name list as supplied by the host.
    ///
    /// Unknown names are diagnosed and ignored rather than failing the
    /// whole binding.
    pub fn parse<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let mut flags = Modifiers::NONE;
        for name in names {
            match name {
                "once" => flags |= Modifiers::ONCE,
                "lazy" => flags |= Modifiers::LAZY,
                "number" => flags |= Modifiers::NUMBER,
                "trim" => flags |= Modifiers::TRIM,
                other => {
                    tracing::debug!(modifier = other, "ignoring unknown modifier");
                }
            }
        }
        flags
    }
}
