//! Binding descriptors for the supported component kinds.
//!
//! One static, immutable descriptor per custom-element tag. The table is
//! configuration data, not mutable shared state: it is a const slice, and
//! lookups hand out `&'static` references.
//!
//! Supported kinds:
//! - dialog / drawer / popover / toast (presence `open`, closes via `close`)
//! - toggle (presence `checked`, syncs via `change`)
//! - accordion (presence `open`, syncs via `toggle`)
//! - tabs / rating / stepper (value `value`, syncs via `change`)
//! - slider (value `value`, syncs via `change` + `input`)
//! - combo-box (value `value`, syncs via `input` + `select`)
//! - progress / counter (write-only displays, no events)

// =============================================================================
// BindingDescriptor
// =============================================================================

/// Static rule mapping a component kind to its attribute/event contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BindingDescriptor {
    /// Custom-element tag name, lowercase.
    pub tag: &'static str,
    /// DOM attribute that mirrors state.
    pub attribute: &'static str,
    /// Events that signal a state change, in order. Empty means the
    /// binding is unidirectional (state → DOM only).
    pub events: &'static [&'static str],
    /// Events whose firing means "off" regardless of payload (closing a
    /// dialog implies `open = false`). Always a subset of `events`.
    pub closing_events: &'static [&'static str],
    /// Key read from the event payload to obtain the new value.
    pub detail_key: &'static str,
    /// Presence-based attribute (set/removed) vs value-based (stringified).
    pub boolean: bool,
}

impl BindingDescriptor {
    /// Whether the binding carries a DOM → state direction at all.
    pub fn is_two_way(&self) -> bool {
        !self.events.is_empty()
    }

    /// Whether `event` is one of this kind's closing events.
    pub fn is_closing(&self, event: &str) -> bool {
        self.closing_events.contains(&event)
    }
}

// =============================================================================
// Descriptor Table
// =============================================================================

const DESCRIPTORS: &[BindingDescriptor] = &[
    BindingDescriptor {
        tag: "ytz-dialog",
        attribute: "open",
        events: &["close", "cancel"],
        closing_events: &["close", "cancel"],
        detail_key: "open",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-drawer",
        attribute: "open",
        events: &["close"],
        closing_events: &["close"],
        detail_key: "open",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-popover",
        attribute: "open",
        events: &["close"],
        closing_events: &["close"],
        detail_key: "open",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-toast",
        attribute: "open",
        events: &["close"],
        closing_events: &["close"],
        detail_key: "open",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-toggle",
        attribute: "checked",
        events: &["change"],
        closing_events: &[],
        detail_key: "checked",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-accordion",
        attribute: "open",
        events: &["toggle"],
        closing_events: &[],
        detail_key: "open",
        boolean: true,
    },
    BindingDescriptor {
        tag: "ytz-tabs",
        attribute: "value",
        events: &["change"],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    BindingDescriptor {
        tag: "ytz-slider",
        attribute: "value",
        events: &["change", "input"],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    BindingDescriptor {
        tag: "ytz-rating",
        attribute: "value",
        events: &["change"],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    BindingDescriptor {
        tag: "ytz-stepper",
        attribute: "value",
        events: &["change"],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    BindingDescriptor {
        tag: "ytz-combo-box",
        attribute: "value",
        events: &["input", "select"],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    // Write-only displays: state flows in, nothing flows back.
    BindingDescriptor {
        tag: "ytz-progress",
        attribute: "value",
        events: &[],
        closing_events: &[],
        detail_key: "value",
        boolean: false,
    },
    BindingDescriptor {
        tag: "ytz-counter",
        attribute: "count",
        events: &[],
        closing_events: &[],
        detail_key: "count",
        boolean: false,
    },
];

// =============================================================================
// Lookup
// =============================================================================

/// Look up the descriptor for a tag name.
///
/// Case-insensitive: DOM `tagName` is conventionally uppercase while the
/// table stores lowercase tags.
pub fn descriptor_for(tag: &str) -> Option<&'static BindingDescriptor> {
    let tag = tag.to_ascii_lowercase();
    DESCRIPTORS.iter().find(|d| d.tag == tag)
}

/// Iterate every registered descriptor (registry uses this to build the
/// per-kind directive aliases).
pub fn descriptors() -> impl Iterator<Item = &'static BindingDescriptor> {
    DESCRIPTORS.iter()
}

/// List all supported tag names.
pub fn supported_tags() -> impl Iterator<Item = &'static str> {
    DESCRIPTORS.iter().map(|d| d.tag)
}
