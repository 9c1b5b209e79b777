//! Host Boundary - Interfaces to the reactivity system and the elements.
//!
//! ytz-bind does not own a reactivity system or a DOM. Both are external
//! collaborators reached through the traits and handle types in this module:
//!
//! - **Scope** - per-element host utilities: typed state references
//!   ([`StateRef`]), commands, the `effect`/`cleanup` pair, and directive
//!   registration hooks
//! - **Element** - the attribute/event surface of a bound custom element
//! - **Timers** - cancellable host timers backing the `lazy` debounce

mod element;
mod scope;
mod timers;

pub use element::*;
pub use scope::*;
pub use timers::*;
