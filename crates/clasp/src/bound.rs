//! Bound-resource guard: a value whose lifetime is tied to one scope run.
//!
//! [`BoundGuard`] owns an acquired value for the duration of a scope and
//! hands ownership of it to the release action when the scope exits. Because
//! the guard owns the value, use-after-release is a compile error rather
//! than a runtime hazard: the borrow checker ends every borrow of the bound
//! value before the release action can run.

use std::ops::{Deref, DerefMut};

/// Owns a bound value and releases it exactly once at scope exit.
///
/// Dereferences to the bound value, so the body of the scope reads and
/// writes through the guard transparently. Construct one with [`bind`].
#[must_use = "dropping a BoundGuard immediately releases its value"]
pub struct BoundGuard<T, F: FnOnce(T)> {
    /// `Some` until release; ownership moves into the release action.
    value: Option<T>,
    /// `Some` until release; taken exactly once in `drop`.
    release: Option<F>,
}

/// Bind `value` to the current scope, releasing it with `release` when the
/// returned guard leaves scope.
///
/// ```rust
/// use std::cell::RefCell;
///
/// let returned = RefCell::new(Vec::new());
/// {
///     let mut page = clasp::bind(vec![0u8; 4], |v| returned.borrow_mut().push(v));
///     page[0] = 7;
/// }
/// assert_eq!(returned.borrow()[0][0], 7);
/// ```
pub fn bind<T, F: FnOnce(T)>(value: T, release: F) -> BoundGuard<T, F> {
    BoundGuard {
        value: Some(value),
        release: Some(release),
    }
}

impl<T, F: FnOnce(T)> Deref for BoundGuard<T, F> {
    type Target = T;

    fn deref(&self) -> &T {
        self.value
            .as_ref()
            .expect("bound value present until scope exit")
    }
}

impl<T, F: FnOnce(T)> DerefMut for BoundGuard<T, F> {
    fn deref_mut(&mut self) -> &mut T {
        self.value
            .as_mut()
            .expect("bound value present until scope exit")
    }
}

impl<T, F: FnOnce(T)> Drop for BoundGuard<T, F> {
    fn drop(&mut self) {
        if let (Some(value), Some(release)) = (self.value.take(), self.release.take()) {
            release(value);
        }
    }
}
