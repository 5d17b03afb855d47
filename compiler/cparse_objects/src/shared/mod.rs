//! Aliased payload storage for maps and lists.
//!
//! A `Shared<T>` is a handle. Copying the handle never copies the payload:
//! every handle produced by `clone` reads and writes the same `T`, and the
//! payload is freed when the last handle goes away. `detach` is the one way
//! to get a second, independent payload.

#![expect(
    clippy::disallowed_types,
    reason = "Shared<T> is the single owner of Rc/RefCell in the crate"
)]

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Handle to a payload that any number of containers may alias.
///
/// Handles stay on the thread that made them (`Rc` is `!Send`), which is why
/// the default scopes are per thread.
///
/// Writes through `borrow_mut` are seen by every alias. Holding a mutable
/// borrow while re-entering the same payload panics, so callbacks such as
/// `TokenMap::with_entry` must not touch the container they were called on.
pub struct Shared<T>(Rc<RefCell<T>>);

impl<T> Shared<T> {
    /// Wrap `value` in a payload with exactly one handle.
    #[inline]
    pub fn new(value: T) -> Self {
        Shared(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Returns `true` if both handles reach the same payload.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles on this payload.
    #[inline]
    pub fn share_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// A handle to a fresh payload holding a clone of the current one.
    ///
    /// Later writes through either handle are invisible to the other.
    #[must_use]
    pub fn detach(&self) -> Self
    where
        T: Clone,
    {
        Shared::new(self.0.borrow().clone())
    }
}

impl<T> Clone for Shared<T> {
    /// Another handle on the same payload.
    #[inline]
    fn clone(&self) -> Self {
        Shared(Rc::clone(&self.0))
    }
}

impl<T: fmt::Debug> fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Shared")
            .field("handles", &self.share_count())
            .field("payload", &*self.0.borrow())
            .finish()
    }
}

impl<T: Default> Default for Shared<T> {
    fn default() -> Self {
        Shared::new(T::default())
    }
}
