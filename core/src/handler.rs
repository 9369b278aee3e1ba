//! Identity-comparable handler references.
//!
//! A [`Handler`] wraps an arbitrary callback in a reference-counted, shared
//! reference. Two handlers compare equal only when they point at the same
//! underlying callback, never by behavior: separately constructed closures
//! with identical bodies are distinct, while clones of one handler share its
//! identity. This is what lets the registry track duplicate registrations
//! independently and remove "by reference" later.

use std::fmt;
use std::sync::Arc;

/// Erased callback type stored behind every [`Handler`].
///
/// Callbacks receive the emitted payload by shared reference, or `None` for
/// payload-less emissions.
pub type HandlerFn<T> = dyn Fn(Option<&T>) + Send + Sync;

/// An identity-comparable callable registered with an
/// [`EventRegistry`](crate::EventRegistry).
///
/// `T` is the payload type handlers receive on emit. The callback's return
/// value, if any, is discarded at construction time — the registry never
/// inspects it.
///
/// # Identity
///
/// Cloning a `Handler` is cheap (a reference-count bump) and preserves
/// identity: a clone registered alongside the original counts as a duplicate
/// occurrence of the *same* handler. Use the clone you kept to remove the
/// registration later.
///
/// # Examples
///
/// ```
/// use event_registry_core::Handler;
///
/// let handler = Handler::new(|data: Option<&u32>| {
///     assert_eq!(data.copied(), Some(7));
/// });
///
/// // Clones share identity; fresh constructions do not.
/// assert!(handler.same_as(&handler.clone()));
/// assert!(!handler.same_as(&Handler::new(|_: Option<&u32>| {})));
/// ```
pub struct Handler<T> {
    callback: Arc<HandlerFn<T>>,
}

impl<T> Handler<T> {
    /// Wrap a callback in a new handler with a fresh identity.
    ///
    /// The callback's return value is ignored, matching the registry's
    /// contract that emitted handlers are invoked for effect only.
    #[must_use]
    pub fn new<F, R>(callback: F) -> Self
    where
        F: Fn(Option<&T>) -> R + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(move |data| {
                callback(data);
            }),
        }
    }

    /// Whether `self` and `other` refer to the same underlying callback.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.callback, &other.callback)
    }

    /// Invoke the callback with the emitted payload.
    pub(crate) fn invoke(&self, data: Option<&T>) {
        (self.callback)(data);
    }
}

impl<T> Clone for Handler<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Arc::clone(&self.callback),
        }
    }
}

/// Identity equality, not behavioral equality.
impl<T> PartialEq for Handler<T> {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl<T> Eq for Handler<T> {}

impl<T> fmt::Debug for Handler<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handler({:p})", Arc::as_ptr(&self.callback))
    }
}
