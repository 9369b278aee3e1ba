//! # Event Registry Core
//!
//! A minimal in-process publish/subscribe registry: named events, each with
//! zero or more ordered handlers, registered, invoked synchronously, and
//! deregistered through one component.
//!
//! This crate is a building block for decoupling producers of state changes
//! from consumers within a single process. There is no networking, no
//! persistence, and no background thread of control: every operation is a
//! synchronous method call on [`EventRegistry`].
//!
//! ## Core Concepts
//!
//! - **Event name**: a string key identifying a class of occurrences. Names
//!   must contain at least one non-whitespace character.
//! - **[`Handler`]**: an identity-comparable callable invoked when its event
//!   is emitted. The same handler may be registered multiple times and each
//!   occurrence fires independently.
//! - **Emit**: synchronous, in-registration-order invocation of every handler
//!   currently registered for a name.
//! - **Once-handler**: a handler auto-removed after its first invocation.
//!
//! ## Example
//!
//! ```
//! use event_registry_core::{EventRegistry, Handler};
//!
//! let registry: EventRegistry<String> = EventRegistry::new();
//!
//! let greeter = Handler::new(|data: Option<&String>| {
//!     if let Some(name) = data {
//!         println!("hello, {name}");
//!     }
//! });
//!
//! registry.on("user-joined", greeter.clone())?;
//! registry.emit_with("user-joined", &"alice".to_string())?;
//!
//! registry.remove_handler_for("user-joined", &greeter);
//! assert!(registry.event_names().is_empty());
//! # Ok::<(), event_registry_core::RegistryError>(())
//! ```

pub mod handler;
pub mod registry;

pub use handler::Handler;
pub use registry::{EventRegistry, RegistryError};
