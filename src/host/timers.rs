//! Timer Boundary - Cancellable host timers.
//!
//! The engine never sleeps or spawns threads; the `lazy` debounce defers
//! through whatever timer facility the host event loop provides. The only
//! contract is a trailing one-shot callback and a cancel handle.

use std::time::Duration;

// =============================================================================
// TimerHandle
// =============================================================================

/// Handle to a scheduled timer.
///
/// Holds the canceller as a take-once closure. Cancelling a timer that
/// has already fired must be a no-op (scheduler contract). Dropping the
/// handle does NOT cancel - the debouncer cancels explicitly so a
/// replaced handle can be discarded after cancellation.
pub struct TimerHandle {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl TimerHandle {
    /// Wrap a scheduler-provided cancel closure.
    pub fn new(cancel: Box<dyn FnOnce()>) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    /// Cancel the pending timer. Idempotent; no-op after firing.
    pub fn cancel(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

// =============================================================================
// TimerScheduler Trait
// =============================================================================

/// Host timer facility.
///
/// `schedule` arranges for `f` to run once after `delay` on the host
/// event loop. The returned handle cancels the pending callback;
/// cancellation after firing must be a no-op.
pub trait TimerScheduler {
    /// Schedule a one-shot callback.
    fn schedule(&self, delay: Duration, f: Box<dyn FnOnce()>) -> TimerHandle;
}
