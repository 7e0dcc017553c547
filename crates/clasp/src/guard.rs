//! Execute-once exit guard.
//!
//! [`ExitGuard`] is the state machine underneath every scope form. It holds
//! the exit action in an `Option` slot: `Some` while the scope run is live,
//! taken exactly once when the guard drops. A dropped guard is terminal;
//! nothing can re-arm it.

/// Runs its exit action exactly once when dropped.
///
/// Construct one with [`on_exit`] *after* the enter action has completed;
/// from that point the exit action is guaranteed to run when the guard
/// leaves scope, on every exit path (fall-through, early `return`, panic
/// unwinding).
#[must_use = "dropping an ExitGuard immediately runs its exit action"]
pub struct ExitGuard<F: FnOnce()> {
    /// `Some` until the scope exits; taken exactly once in `drop`.
    action: Option<F>,
}

/// Arm `action` to run when the returned guard leaves scope.
///
/// ```rust
/// use std::cell::Cell;
///
/// let fired = Cell::new(false);
/// {
///     let _guard = clasp::on_exit(|| fired.set(true));
///     assert!(!fired.get());
/// }
/// assert!(fired.get());
/// ```
pub fn on_exit<F: FnOnce()>(action: F) -> ExitGuard<F> {
    ExitGuard {
        action: Some(action),
    }
}

impl<F: FnOnce()> Drop for ExitGuard<F> {
    fn drop(&mut self) {
        if let Some(action) = self.action.take() {
            action();
        }
    }
}
