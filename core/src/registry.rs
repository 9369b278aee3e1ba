//! The event registry: one mapping from event name to its ordered handlers.
//!
//! [`EventRegistry`] owns the name→handlers mapping and exposes registration,
//! dispatch, and removal. All operations are synchronous calls on the
//! caller's thread; the registry schedules nothing and owns no thread of its
//! own.
//!
//! # Locking
//!
//! A single mutex guards the mapping. The lock is released before any handler
//! runs, so handlers are free to call back into the registry (register,
//! remove, even emit) during dispatch. `emit` snapshots the handler list
//! under the lock, which pins the set of handlers invoked in that round:
//! handlers removed mid-dispatch still fire in the current round, handlers
//! added mid-dispatch wait for the next one.
//!
//! # Panics in handlers
//!
//! A handler that panics during `emit` propagates to the caller and aborts
//! the remaining invocations of that round. The registry does not isolate
//! handler failures.

use std::collections::HashMap;
use std::fmt;

use parking_lot::Mutex;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::trace;

use crate::handler::Handler;

/// Errors raised by registry operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The supplied event name was empty or whitespace-only after trimming.
    #[error("event name must contain at least one non-whitespace character")]
    InvalidEventName,
}

/// One registration: the handler plus whether it fires once.
struct Entry<T> {
    handler: Handler<T>,
    once: bool,
}

// Most events carry a handful of handlers, so the list lives inline.
type Entries<T> = SmallVec<[Entry<T>; 2]>;

/// A synchronous registry of named events and their ordered handlers.
///
/// `T` is the payload type passed to handlers on [`emit_with`]. Registries
/// that never carry a payload can use the default `EventRegistry<()>`.
///
/// Handlers fire in registration order. Registering the same [`Handler`]
/// (or a clone of it) twice yields two independent occurrences; removal by
/// reference drops only the first occurrence found.
///
/// The registry is `Send + Sync` and usable behind an `Arc` from multiple
/// threads; one internal lock serializes all mutations.
///
/// # Examples
///
/// ```
/// use event_registry_core::{EventRegistry, Handler};
///
/// let registry: EventRegistry<u32> = EventRegistry::new();
///
/// registry.on("tick", Handler::new(|data: Option<&u32>| {
///     assert_eq!(data.copied(), Some(3));
/// }))?;
///
/// registry.emit_with("tick", &3)?;
/// # Ok::<(), event_registry_core::RegistryError>(())
/// ```
///
/// [`emit_with`]: EventRegistry::emit_with
pub struct EventRegistry<T = ()> {
    events: Mutex<HashMap<String, Entries<T>>>,
}

impl<T> EventRegistry<T> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Mutex::new(HashMap::new()),
        }
    }

    /// The names currently holding at least one handler.
    ///
    /// Returns a snapshot in unspecified order; later mutations do not affect
    /// a previously returned vector. Names whose handlers have all been
    /// removed are excluded.
    #[must_use]
    pub fn event_names(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .filter(|(_, entries)| !entries.is_empty())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// The handlers registered for `name`, in registration order.
    ///
    /// Returns a snapshot copy; callers cannot mutate registry state through
    /// it. Unknown names yield an empty vector. Unlike the mutating
    /// operations this accepts any string, including empty or whitespace-only
    /// ones, and simply reports no handlers for them.
    ///
    /// Handlers registered through [`once`](Self::once) appear under their
    /// original identity.
    #[must_use]
    pub fn handlers_for(&self, name: &str) -> Vec<Handler<T>> {
        match self.events.lock().get(name) {
            Some(entries) => entries.iter().map(|entry| entry.handler.clone()).collect(),
            None => Vec::new(),
        }
    }

    /// Register `handler` for `name`, appending it after any existing
    /// handlers.
    ///
    /// Duplicates are permitted: registering the same handler again adds a
    /// second, independently fired occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidEventName`] if `name` trims to the
    /// empty string. The registry is unchanged in that case.
    pub fn on(&self, name: &str, handler: Handler<T>) -> Result<(), RegistryError> {
        self.register(name, handler, false)
    }

    /// Register `handler` for `name`, to fire at most once.
    ///
    /// On the first emission of `name` after registration, the handler is
    /// removed from the live list before it runs and then invoked with the
    /// emitted payload exactly once. It occupies the same ordering position a
    /// plain [`on`](Self::on) registration would. Exactly-once holds even
    /// when several threads emit concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidEventName`] if `name` trims to the
    /// empty string. The registry is unchanged in that case.
    pub fn once(&self, name: &str, handler: Handler<T>) -> Result<(), RegistryError> {
        self.register(name, handler, true)
    }

    /// Emit `name` with no payload; handlers receive `None`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidEventName`] if `name` trims to the
    /// empty string. No handlers are invoked in that case.
    pub fn emit(&self, name: &str) -> Result<(), RegistryError> {
        self.dispatch(name, None)
    }

    /// Emit `name`, passing `Some(data)` to every registered handler in
    /// registration order.
    ///
    /// The handler list is snapshotted before iteration, so handlers removing
    /// themselves or others during dispatch do not skip or double-invoke the
    /// remaining originally registered handlers. Emitting a name with no
    /// handlers is a no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidEventName`] if `name` trims to the
    /// empty string. No handlers are invoked in that case.
    pub fn emit_with(&self, name: &str, data: &T) -> Result<(), RegistryError> {
        self.dispatch(name, Some(data))
    }

    /// Remove the first occurrence of `handler` from `name`'s list, scanning
    /// in registration order. Later duplicate occurrences stay registered.
    ///
    /// No-op if `name` is unknown or `handler` is not registered for it.
    pub fn remove_handler_for(&self, name: &str, handler: &Handler<T>) {
        let mut events = self.events.lock();
        if let Some(entries) = events.get_mut(name) {
            if let Some(index) = entries
                .iter()
                .position(|entry| entry.handler.same_as(handler))
            {
                entries.remove(index);
                trace!(event = name, remaining = entries.len(), "removed handler");
            }
        }
    }

    /// Remove every handler registered for `name`.
    ///
    /// The name subsequently reports no handlers and is excluded from
    /// [`event_names`](Self::event_names). No-op if `name` is unknown.
    pub fn remove_handlers_for(&self, name: &str) {
        if let Some(entries) = self.events.lock().get_mut(name) {
            entries.clear();
            trace!(event = name, "removed all handlers for event");
        }
    }

    /// Clear the entire registry.
    pub fn remove_all_handlers(&self) {
        self.events.lock().clear();
        trace!("cleared registry");
    }

    fn register(&self, name: &str, handler: Handler<T>, once: bool) -> Result<(), RegistryError> {
        Self::validate(name)?;
        let mut events = self.events.lock();
        // Names are stored as given; trimming applies only to validation.
        let entries = events.entry(name.to_owned()).or_default();
        entries.push(Entry { handler, once });
        trace!(event = name, once, handlers = entries.len(), "registered handler");
        Ok(())
    }

    fn dispatch(&self, name: &str, data: Option<&T>) -> Result<(), RegistryError> {
        Self::validate(name)?;
        let snapshot: SmallVec<[Handler<T>; 2]> = {
            let mut events = self.events.lock();
            let Some(entries) = events.get_mut(name) else {
                return Ok(());
            };
            let snapshot = entries
                .iter()
                .map(|entry| entry.handler.clone())
                .collect();
            // Once-entries leave the live list before any handler runs, so a
            // concurrent emit cannot pick them up a second time.
            entries.retain(|entry| !entry.once);
            snapshot
        };
        trace!(event = name, handlers = snapshot.len(), "dispatching");
        for handler in &snapshot {
            handler.invoke(data);
        }
        Ok(())
    }

    fn validate(name: &str) -> Result<(), RegistryError> {
        if name.trim().is_empty() {
            return Err(RegistryError::InvalidEventName);
        }
        Ok(())
    }
}

impl<T> Default for EventRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EventRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let events = self.events.lock();
        let live = events.values().filter(|entries| !entries.is_empty()).count();
        write!(f, "EventRegistry {{ events: {live} }}")
    }
}
