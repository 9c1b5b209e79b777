//! Element Boundary - The attribute/event surface of a bound element.
//!
//! Custom elements are opaque to the engine: all it needs is a tag name,
//! attribute mutation, and event listeners. Framework adapters implement
//! [`BoundElement`] over their real DOM node type; tests implement it over
//! an in-memory mock.

use std::rc::Rc;

use crate::types::ElementEvent;

// =============================================================================
// Listener Types
// =============================================================================

/// Event listener callback (Rc for shared ownership in closures).
///
/// The same listener instance may be attached to several event names -
/// the model resolver funnels every configured event into one handler.
pub type EventListener = Rc<dyn Fn(&ElementEvent)>;

/// Opaque listener registration id, scoped to (element, event name).
pub type ListenerId = usize;

// =============================================================================
// BoundElement Trait
// =============================================================================

/// The element surface the binding engine operates on.
///
/// Implementations use interior mutability, mirroring a DOM node: the
/// engine only ever holds `Rc<dyn BoundElement>` and calls through shared
/// references. All methods are synchronous; dispatching an event invokes
/// listeners on the caller's stack.
pub trait BoundElement {
    /// The element's tag name (e.g. "ytz-dialog"). Case-insensitive
    /// callers normalize; DOM `tagName` is conventionally uppercase.
    fn tag_name(&self) -> &str;

    /// Set an attribute. Boolean attributes are set with an empty value.
    fn set_attribute(&self, name: &str, value: &str);

    /// Remove an attribute. Removing an absent attribute is a no-op.
    fn remove_attribute(&self, name: &str);

    /// Check attribute presence.
    fn has_attribute(&self, name: &str) -> bool;

    /// Attach a listener for a named event. Returns an id for removal.
    fn add_event_listener(&self, event: &str, listener: EventListener) -> ListenerId;

    /// Detach a previously attached listener. Unknown ids are a no-op.
    /// Safe to call while the same event is being dispatched; removal
    /// takes effect for subsequent dispatches.
    fn remove_event_listener(&self, event: &str, id: ListenerId);
}
