//! Capture-style handler doubles for registry tests.
//!
//! Both doubles hand out a single [`Handler`] created at construction time,
//! so every call to `handler()` returns the same identity. That matters for
//! duplicate-registration and remove-by-reference scenarios: registering the
//! returned handler twice creates two occurrences of one handler, exactly as
//! production code would.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use event_registry_core::Handler;
use parking_lot::Mutex;

/// Records every invocation, payload included, in arrival order.
///
/// # Example
///
/// ```
/// use event_registry_core::EventRegistry;
/// use event_registry_testing::RecordingHandler;
///
/// let registry: EventRegistry<u32> = EventRegistry::new();
/// let recorder = RecordingHandler::new();
///
/// registry.on("metric", recorder.handler())?;
/// registry.emit_with("metric", &10)?;
/// registry.emit("metric")?;
///
/// assert_eq!(recorder.calls(), vec![Some(10), None]);
/// # Ok::<(), event_registry_core::RegistryError>(())
/// ```
pub struct RecordingHandler<T> {
    calls: Arc<Mutex<Vec<Option<T>>>>,
    handler: Handler<T>,
}

impl<T: Clone + Send + 'static> RecordingHandler<T> {
    /// Create a recorder with an empty call log.
    #[must_use]
    pub fn new() -> Self {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let handler = Handler::new(move |data: Option<&T>| {
            sink.lock().push(data.cloned());
        });
        Self { calls, handler }
    }

    /// The handler to register. Every call returns the same identity.
    #[must_use]
    pub fn handler(&self) -> Handler<T> {
        self.handler.clone()
    }

    /// The payloads received so far, in arrival order. `None` entries mark
    /// payload-less emissions.
    #[must_use]
    pub fn calls(&self) -> Vec<Option<T>> {
        self.calls.lock().clone()
    }

    /// Number of invocations so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    /// Drop the recorded calls (for reuse between test phases).
    pub fn clear(&self) {
        self.calls.lock().clear();
    }
}

impl<T: Clone + Send + 'static> Default for RecordingHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Counts invocations without touching the payload.
///
/// Lighter than [`RecordingHandler`] when a test only cares how many times
/// (or whether) a handler fired, such as once-only semantics.
pub struct CountingHandler<T = ()> {
    count: Arc<AtomicUsize>,
    handler: Handler<T>,
}

impl<T: 'static> CountingHandler<T> {
    /// Create a counter starting at zero.
    #[must_use]
    pub fn new() -> Self {
        let count = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&count);
        let handler = Handler::new(move |_: Option<&T>| {
            hits.fetch_add(1, Ordering::SeqCst);
        });
        Self { count, handler }
    }

    /// The handler to register. Every call returns the same identity.
    #[must_use]
    pub fn handler(&self) -> Handler<T> {
        self.handler.clone()
    }

    /// How many times the handler has fired.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }
}

impl<T: 'static> Default for CountingHandler<T> {
    fn default() -> Self {
        Self::new()
    }
}
