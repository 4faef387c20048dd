//! Listener handle and listener-argument normalization.

use std::fmt;
use std::sync::Arc;

type Callback<T> = dyn Fn(&T) + Send + Sync;

/// A change callback with identity semantics.
///
/// Clones share the same callback and compare equal; independently
/// constructed listeners never compare equal, even for identical closures.
pub struct Listener<T> {
    callback: Arc<Callback<T>>,
}

impl<T> Listener<T> {
    /// Wrap a callback.
    ///
    /// The callback runs while the registry is mutably borrowed (or locked,
    /// for [`default_registry`](crate::default_registry) and other shared
    /// registries). It must not lock that registry again: parking_lot
    /// mutexes are not reentrant and the call deadlocks. Read what you need
    /// from the value passed in, or capture it before registering.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Invoke the callback with the new current value.
    pub fn call(&self, value: &T) {
        (self.callback)(value)
    }

    /// Whether both handles refer to the same callback.
    pub fn same_as(&self, other: &Listener<T>) -> bool {
        // Compare data pointers only; vtable pointers may differ across units.
        std::ptr::eq(
            Arc::as_ptr(&self.callback) as *const (),
            Arc::as_ptr(&other.callback) as *const (),
        )
    }
}

impl<T> Clone for Listener<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

impl<T> PartialEq for Listener<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Listener<T> {}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener({:p})", Arc::as_ptr(&self.callback) as *const ())
    }
}

/// Listeners supplied when a state is added.
///
/// Built through `From`: `()` or `None` for no listeners, a single
/// [`Listener`], or a `Vec` of them (kept as given, duplicates included).
#[derive(Clone, Debug)]
pub struct Listeners<T>(pub(crate) Vec<Listener<T>>);

impl<T> Listeners<T> {
    /// No listeners.
    pub fn none() -> Self {
        Listeners(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> From<()> for Listeners<T> {
    fn from(_: ()) -> Self {
        Self::none()
    }
}

impl<T> From<Listener<T>> for Listeners<T> {
    fn from(listener: Listener<T>) -> Self {
        Listeners(vec![listener])
    }
}

impl<T> From<Vec<Listener<T>>> for Listeners<T> {
    fn from(listeners: Vec<Listener<T>>) -> Self {
        Listeners(listeners)
    }
}

impl<T> From<Option<Listener<T>>> for Listeners<T> {
    fn from(listener: Option<Listener<T>>) -> Self {
        Listeners(listener.into_iter().collect())
    }
}
