//! Process-wide default registry.
//!
//! Most code is better served by owning a [`ServiceRegistry`] and passing it
//! to whatever needs resolution; that keeps test isolation explicit. This
//! module exists for the cases that genuinely want one shared entry point:
//! the registry is constructed lazily on first access, lives for the process
//! lifetime, and is emptied only by [`clear`].
//!
//! Tests touching this module share mutable state with every other test in
//! the process and should be serialized (see the `serial_test` crate).

use std::sync::{Arc, LazyLock};

use crate::{RegistryError, ServiceKey, ServiceRegistry};

static GLOBAL: LazyLock<ServiceRegistry> = LazyLock::new(ServiceRegistry::new);

/// Returns the process-wide registry, constructing it on first call.
///
/// Every call returns the same reference.
pub fn registry() -> &'static ServiceRegistry {
    &GLOBAL
}

/// Registers a pre-built instance in the process-wide registry.
pub fn register<T: Send + Sync + 'static>(key: impl Into<ServiceKey>, instance: T) {
    registry().register(key, instance);
}

/// Registers an `Arc`-wrapped instance in the process-wide registry.
pub fn register_arc<T: Send + Sync + 'static>(key: impl Into<ServiceKey>, instance: Arc<T>) {
    registry().register_arc(key, instance);
}

/// Registers a per-resolve constructor in the process-wide registry.
pub fn register_factory<T, F>(key: impl Into<ServiceKey>, ctor: F)
where
    T: Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    registry().register_factory(key, ctor);
}

/// Registers a cached-once constructor in the process-wide registry.
pub fn register_singleton<T, F>(key: impl Into<ServiceKey>, ctor: F)
where
    T: Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    registry().register_singleton(key, ctor);
}

/// Resolves a service from the process-wide registry.
///
/// # Errors
///
/// Same conditions as [`ServiceRegistry::resolve`].
pub fn resolve<T: Send + Sync + 'static>(
    key: impl Into<ServiceKey>,
) -> Result<Arc<T>, RegistryError> {
    registry().resolve(key)
}

/// Resolves a service from the process-wide registry as an owned clone.
///
/// # Errors
///
/// Same conditions as [`ServiceRegistry::resolve`].
pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
    key: impl Into<ServiceKey>,
) -> Result<T, RegistryError> {
    registry().resolve_cloned(key)
}

/// Whether the process-wide registry holds a registration for `key`.
pub fn is_registered(key: impl Into<ServiceKey>) -> bool {
    registry().is_registered(key)
}

/// Empties the process-wide registry. Primarily for test isolation.
pub fn clear() {
    registry().clear();
}
