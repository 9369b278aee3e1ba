//! # Event Registry Testing
//!
//! Test doubles and helpers for exercising an
//! [`EventRegistry`](event_registry_core::EventRegistry).
//!
//! This crate provides:
//! - [`RecordingHandler`]: captures every payload it receives, in order
//! - [`CountingHandler`]: counts invocations without looking at payloads
//!
//! ## Example
//!
//! ```
//! use event_registry_core::EventRegistry;
//! use event_registry_testing::RecordingHandler;
//!
//! let registry: EventRegistry<String> = EventRegistry::new();
//! let recorder = RecordingHandler::new();
//!
//! registry.on("saved", recorder.handler())?;
//! registry.emit_with("saved", &"draft-1".to_string())?;
//!
//! assert_eq!(recorder.calls(), vec![Some("draft-1".to_string())]);
//! # Ok::<(), event_registry_core::RegistryError>(())
//! ```

pub mod mocks;

pub use mocks::{CountingHandler, RecordingHandler};
