//! The service registry: registration store, singleton cache, and resolver.
//!
//! A [`ServiceRegistry`] maps opaque [`ServiceKey`]s to registrations with
//! one of three lifecycles:
//!
//! - **instance** — a pre-built value returned verbatim on every resolve
//! - **factory** — a constructor invoked fresh on every resolve
//! - **singleton** — a constructor invoked at most once, result cached
//!
//! Registries are plain values: construct one, pass it to whatever needs
//! service resolution, drop it when done. A process-wide default lives in
//! [`crate::global`] for code that wants a shared entry point.
//!
//! # Examples
//!
//! ```rust
//! use service_registry::ServiceRegistry;
//! use std::sync::Arc;
//!
//! struct Mailer {
//!     from: String,
//! }
//!
//! let registry = ServiceRegistry::new();
//! registry.register_singleton("mailer", || Mailer {
//!     from: "noreply@example.com".to_string(),
//! });
//!
//! let mailer: Arc<Mailer> = registry.resolve("mailer").unwrap();
//! assert_eq!(mailer.from, "noreply@example.com");
//! ```

use std::any::type_name;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use tracing::{debug, trace};

use crate::registration::{ErasedCtor, ErasedInstance, Registration};
use crate::{RegistryError, ServiceKey};

/// Registration store and singleton cache, guarded by a single lock so that
/// [`ServiceRegistry::clear`] is atomic: no resolve can observe one map
/// cleared and the other not.
#[derive(Default)]
struct Inner {
    registrations: HashMap<ServiceKey, Registration>,
    singletons: HashMap<ServiceKey, Arc<OnceLock<ErasedInstance>>>,
}

/// What a resolve must do once the lock is released.
enum Resolved {
    Ready(ErasedInstance),
    Fresh(ErasedCtor),
    Memoized(Arc<OnceLock<ErasedInstance>>, ErasedCtor),
}

/// A keyed service registry with instance, factory, and singleton lifecycles.
///
/// All operations are synchronous and safe to call from any thread. The
/// internal lock is never held while a registered constructor runs, so a
/// constructor may itself resolve *other* keys from the same registry.
/// Resolving the key currently under construction from inside its own
/// singleton constructor is unsupported and will block. Avoiding such cycles
/// is the caller's responsibility.
pub struct ServiceRegistry {
    inner: Mutex<Inner>,
    defaults: Option<Arc<dyn Fn(&ServiceRegistry) + Send + Sync>>,
}

impl ServiceRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        ServiceRegistry {
            inner: Mutex::new(Inner::default()),
            defaults: None,
        }
    }

    /// Creates a registry pre-wired by `wire`, and retains `wire` so that
    /// [`reset`](Self::reset) can reproduce the same defaults later.
    ///
    /// The wiring closure runs once before this constructor returns. It must
    /// be idempotent: `reset` invokes it again on an emptied registry and the
    /// outcome is expected to match the original wiring.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use service_registry::ServiceRegistry;
    ///
    /// let registry = ServiceRegistry::with_defaults(|r| {
    ///     r.register("greeting", "hello".to_string());
    /// });
    /// assert!(registry.is_registered("greeting"));
    /// ```
    pub fn with_defaults(wire: impl Fn(&ServiceRegistry) + Send + Sync + 'static) -> Self {
        let registry = ServiceRegistry {
            inner: Mutex::new(Inner::default()),
            defaults: Some(Arc::new(wire)),
        };
        if let Some(wire) = &registry.defaults {
            wire(&registry);
        }
        registry
    }

    /// Registers a pre-built instance under `key`.
    ///
    /// Overwrites any prior registration for the key. Every subsequent
    /// [`resolve`](Self::resolve) returns this exact value, bypassing the
    /// singleton cache entirely.
    pub fn register<T: Send + Sync + 'static>(&self, key: impl Into<ServiceKey>, instance: T) {
        self.register_arc(key, Arc::new(instance));
    }

    /// Registers an `Arc`-wrapped instance under `key`.
    ///
    /// More efficient than [`register`](Self::register) when you already
    /// hold an `Arc`, as it avoids an extra allocation.
    pub fn register_arc<T: Send + Sync + 'static>(
        &self,
        key: impl Into<ServiceKey>,
        instance: Arc<T>,
    ) {
        self.insert(key.into(), Registration::instance(instance));
    }

    /// Registers a constructor invoked fresh on every resolve of `key`.
    ///
    /// Overwrites any prior registration for the key. No identity guarantee
    /// holds between two resolves: each call to `resolve` invokes `ctor`
    /// again and returns whatever it produced. The registry does not verify
    /// that `ctor` is pure; that contract is the caller's to keep.
    pub fn register_factory<T, F>(&self, key: impl Into<ServiceKey>, ctor: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(key.into(), Registration::factory(ctor));
    }

    /// Registers a constructor invoked at most once for `key`; the result is
    /// cached and shared by every subsequent resolve.
    ///
    /// Overwrites any prior registration for the key *and* drops any
    /// previously cached instance, so the first resolve after this call
    /// reconstructs. The cached instance is never refreshed otherwise, even
    /// if the constructor would now produce a different value.
    pub fn register_singleton<T, F>(&self, key: impl Into<ServiceKey>, ctor: F)
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.insert(key.into(), Registration::singleton(ctor));
    }

    /// Whether any registration exists for `key`. Pure query, no side effect.
    pub fn is_registered(&self, key: impl Into<ServiceKey>) -> bool {
        let key = key.into();
        self.lock().registrations.contains_key(&key)
    }

    /// Resolves `key` to an instance of `T`, honoring the registration's
    /// lifecycle.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NotRegistered`] if no registration exists for the
    ///   key. This signals a missing registration at startup; fix the wiring
    ///   rather than catching and retrying.
    /// - [`RegistryError::Resolution`] if a registration exists but its value
    ///   is not a `T`.
    ///
    /// A panic raised by the registered constructor propagates to the caller
    /// unchanged. For a singleton, nothing is cached on panic, so a later
    /// resolve of the same key re-invokes the constructor.
    pub fn resolve<T: Send + Sync + 'static>(
        &self,
        key: impl Into<ServiceKey>,
    ) -> Result<Arc<T>, RegistryError> {
        let key = key.into();

        let mut inner = self.lock();
        let resolved = match inner.registrations.get(&key) {
            None => {
                drop(inner);
                debug!(key = %key, "resolve failed, key not registered");
                return Err(RegistryError::NotRegistered { key });
            }
            Some(Registration::Instance(value)) => Resolved::Ready(value.clone()),
            Some(Registration::Factory(ctor)) => Resolved::Fresh(ctor.clone()),
            Some(Registration::Singleton(ctor)) => {
                let ctor = ctor.clone();
                let slot = inner.singletons.entry(key.clone()).or_default().clone();
                Resolved::Memoized(slot, ctor)
            }
        };
        // Constructors run with the lock released so they may resolve other
        // keys. The OnceLock slot serializes first-time singleton
        // construction per key: concurrent resolvers race to the same slot
        // and the constructor runs at most once.
        drop(inner);

        let value = match resolved {
            Resolved::Ready(value) => value,
            Resolved::Fresh(ctor) => ctor(),
            Resolved::Memoized(slot, ctor) => slot.get_or_init(|| ctor()).clone(),
        };

        trace!(key = %key, "service resolved");
        value
            .downcast::<T>()
            .map_err(|_| RegistryError::Resolution {
                key,
                requested: type_name::<T>(),
            })
    }

    /// Resolves `key` and returns an owned clone of the instance.
    ///
    /// Useful when the caller wants to own the value rather than share it
    /// through an `Arc`. For a factory registration this clones the freshly
    /// constructed value.
    ///
    /// # Errors
    ///
    /// Same conditions as [`resolve`](Self::resolve).
    pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
        &self,
        key: impl Into<ServiceKey>,
    ) -> Result<T, RegistryError> {
        let arc = self.resolve::<T>(key)?;
        Ok((*arc).clone())
    }

    /// Removes all registrations and all cached singleton instances.
    ///
    /// Both maps live behind one lock, so no resolve observes a partially
    /// cleared registry. Already-resolved `Arc`s held by callers stay valid.
    /// The default wiring retained by
    /// [`with_defaults`](Self::with_defaults), if any, is untouched; use
    /// [`reset`](Self::reset) to clear and re-apply it.
    pub fn clear(&self) {
        debug!("registry cleared");
        let mut inner = self.lock();
        inner.registrations.clear();
        inner.singletons.clear();
    }

    /// Clears the registry and re-applies the default wiring, if any.
    ///
    /// On a registry built with [`new`](Self::new) this is equivalent to
    /// [`clear`](Self::clear).
    pub fn reset(&self) {
        self.clear();
        if let Some(wire) = &self.defaults {
            wire(self);
        }
    }

    fn insert(&self, key: ServiceKey, registration: Registration) {
        trace!(key = %key, kind = registration.kind(), "service registered");
        let mut inner = self.lock();
        // An overwrite invalidates whatever the old registration cached, so
        // the next resolve follows the new registration's semantics.
        inner.singletons.remove(&key);
        inner.registrations.insert(key, registration);
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // Constructors never run under this lock, so poisoning can only come
        // from a panicking trace subscriber; recover and carry on.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        ServiceRegistry::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("ServiceRegistry")
            .field("registrations", &inner.registrations.len())
            .field("cached_singletons", &inner.singletons.len())
            .finish()
    }
}
