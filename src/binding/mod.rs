//! Binding Engine - Attribute writes, coercion, and instance lifecycle.
//!
//! The mechanics shared by every directive:
//!
//! - **apply** - state → attribute writes (presence vs value, undefined guard)
//! - **coerce** - event payload → state value (detail read, closing rule,
//!   `number`, `trim`)
//! - **instance** - per-element ownership of listeners and the pending
//!   debounce timer, disposed exactly once at teardown

mod apply;
mod coerce;
mod instance;

pub use apply::*;
pub use coerce::*;
pub use instance::*;
