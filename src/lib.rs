//! # Service Registry
//!
//! A thread-safe, keyed service registry with three lifecycles: pre-built
//! instances, per-resolve factories, and cached-once singletons.
//!
//! Services are addressed by an opaque [`ServiceKey`] and stored type-erased;
//! resolution returns `Arc<T>` after a checked downcast.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_registry::ServiceRegistry;
//! use std::sync::Arc;
//!
//! let registry = ServiceRegistry::new();
//!
//! // A pre-built instance: the same value on every resolve.
//! registry.register("motd", "Hello, World!".to_string());
//!
//! // A singleton: constructed on first resolve, then cached.
//! registry.register_singleton("request-count", || 0u64);
//!
//! let motd: Arc<String> = registry.resolve("motd").unwrap();
//! assert_eq!(&*motd, "Hello, World!");
//! ```
//!
//! ## Lifecycles
//!
//! - [`register`](ServiceRegistry::register) — store a value, return it
//!   verbatim on every resolve
//! - [`register_factory`](ServiceRegistry::register_factory) — invoke the
//!   constructor fresh on every resolve
//! - [`register_singleton`](ServiceRegistry::register_singleton) — invoke
//!   the constructor at most once, cache the result
//!
//! Registering under an already-used key overwrites the prior registration,
//! last write wins.
//!
//! ## Entry points
//!
//! Prefer owning a [`ServiceRegistry`] and passing it around; that keeps test
//! isolation explicit. For code that wants a shared entry point, [`global`]
//! holds a process-wide default and [`define_registry!`] declares additional
//! isolated module-scoped registries.
//!
//! ## Logging
//!
//! Operations emit `tracing` events at trace/debug level. The crate installs
//! no subscriber.

mod registration;
mod registry;
mod registry_error;
mod service_key;

mod macros;

pub mod global;

pub use registry::ServiceRegistry;
pub use registry_error::RegistryError;
pub use service_key::ServiceKey;
