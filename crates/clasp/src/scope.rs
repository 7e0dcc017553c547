//! Higher-order scope forms built on the guards.
//!
//! These functions take the scope body as a closure. Ending the body early
//! is a plain `return` from the closure (or `?` if the body yields a
//! `Result`): the exit action still runs and control continues after the
//! call, which is exactly the explicit-termination contract. The macro
//! forms in [`crate::scoped!`] and friends offer the block-shaped spelling
//! of the same mechanism.

use crate::bound::bind;
use crate::guard::on_exit;

/// Paired-action scope: run `enter`, then `body` exactly once, then `exit`
/// exactly once.
///
/// `enter` completes before the first statement of `body`; `exit` runs
/// after `body` on every exit path, including unwinding. Nested calls tear
/// down innermost-first.
///
/// ```rust
/// use std::cell::RefCell;
///
/// let log = RefCell::new(Vec::new());
/// let sum = clasp::with_scope(
///     || log.borrow_mut().push("enter"),
///     || log.borrow_mut().push("exit"),
///     || 2 + 2,
/// );
/// assert_eq!(sum, 4);
/// assert_eq!(*log.borrow(), ["enter", "exit"]);
/// ```
pub fn with_scope<R>(
    enter: impl FnOnce(),
    exit: impl FnOnce(),
    body: impl FnOnce() -> R,
) -> R {
    enter();
    let _exit = on_exit(exit);
    body()
}

/// Exit-only scope: [`with_scope`] with a no-op enter.
pub fn on_scope_exit<R>(exit: impl FnOnce(), body: impl FnOnce() -> R) -> R {
    with_scope(|| (), exit, body)
}

/// Bound-resource scope: bind `value` for the duration of `body`, then hand
/// it to `release`.
///
/// The body receives a mutable reference to the bound value; `release`
/// receives ownership afterwards and observes every write the body made.
///
/// ```rust
/// use std::cell::Cell;
///
/// let released = Cell::new(0u8);
/// clasp::with_bound(0u8, |v| released.set(v), |v| *v = 42);
/// assert_eq!(released.get(), 42);
/// ```
pub fn with_bound<T, R>(
    value: T,
    release: impl FnOnce(T),
    body: impl FnOnce(&mut T) -> R,
) -> R {
    let mut bound = bind(value, release);
    body(&mut bound)
}
