//! Macro for declaring additional isolated registries.

/// Declares a module holding one isolated [`ServiceRegistry`](crate::ServiceRegistry).
///
/// The generated module owns a lazily constructed registry and exposes free
/// functions mirroring the registry's API. Registries declared this way are
/// completely independent of each other and of [`crate::global`].
///
/// # Examples
///
/// ```rust
/// use service_registry::define_registry;
/// use std::sync::Arc;
///
/// define_registry!(app);
///
/// app::register_singleton("greeting", || "hello".to_string());
///
/// let greeting: Arc<String> = app::resolve("greeting").unwrap();
/// assert_eq!(&*greeting, "hello");
/// ```
///
/// # Default wiring
///
/// A registry can carry default registrations that survive a reset. The
/// `defaults` expression is evaluated inside the generated module, which
/// imports `super::*`, so a sibling function resolves by its bare name:
///
/// ```rust
/// use service_registry::{define_registry, ServiceRegistry};
///
/// fn wire(r: &ServiceRegistry) {
///     r.register("api-base", "https://api.example.com".to_string());
/// }
///
/// define_registry!(app, defaults = wire);
///
/// fn main() {
///     assert!(app::is_registered("api-base"));
///     app::registry().reset();
///     assert!(app::is_registered("api-base"));
/// }
/// ```
///
/// # Isolation
///
/// ```rust
/// use service_registry::define_registry;
///
/// define_registry!(tenant_a);
/// define_registry!(tenant_b);
///
/// tenant_a::register("db-url", "postgres://a".to_string());
/// assert!(!tenant_b::is_registered("db-url"));
/// ```
#[macro_export]
macro_rules! define_registry {
    ($name:ident) => {
        $crate::define_registry!(@module $name, $crate::ServiceRegistry::new);
    };
    ($name:ident, defaults = $wire:expr) => {
        $crate::define_registry!(@module $name, || $crate::ServiceRegistry::with_defaults($wire));
    };
    (@module $name:ident, $init:expr) => {
        pub mod $name {
            #[allow(unused_imports)]
            use super::*;

            use std::sync::{Arc, LazyLock};

            static REGISTRY: LazyLock<$crate::ServiceRegistry> = LazyLock::new($init);

            /// Returns this module's registry.
            pub fn registry() -> &'static $crate::ServiceRegistry {
                &REGISTRY
            }

            /// Registers a pre-built instance.
            pub fn register<T: Send + Sync + 'static>(
                key: impl Into<$crate::ServiceKey>,
                instance: T,
            ) {
                registry().register(key, instance);
            }

            /// Registers an `Arc`-wrapped instance.
            pub fn register_arc<T: Send + Sync + 'static>(
                key: impl Into<$crate::ServiceKey>,
                instance: Arc<T>,
            ) {
                registry().register_arc(key, instance);
            }

            /// Registers a per-resolve constructor.
            pub fn register_factory<T, F>(key: impl Into<$crate::ServiceKey>, ctor: F)
            where
                T: Send + Sync + 'static,
                F: Fn() -> T + Send + Sync + 'static,
            {
                registry().register_factory(key, ctor);
            }

            /// Registers a cached-once constructor.
            pub fn register_singleton<T, F>(key: impl Into<$crate::ServiceKey>, ctor: F)
            where
                T: Send + Sync + 'static,
                F: Fn() -> T + Send + Sync + 'static,
            {
                registry().register_singleton(key, ctor);
            }

            /// Resolves a service from this module's registry.
            pub fn resolve<T: Send + Sync + 'static>(
                key: impl Into<$crate::ServiceKey>,
            ) -> Result<Arc<T>, $crate::RegistryError> {
                registry().resolve(key)
            }

            /// Resolves a service as an owned clone.
            pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
                key: impl Into<$crate::ServiceKey>,
            ) -> Result<T, $crate::RegistryError> {
                registry().resolve_cloned(key)
            }

            /// Whether a registration exists for `key`.
            pub fn is_registered(key: impl Into<$crate::ServiceKey>) -> bool {
                registry().is_registered(key)
            }

            /// Empties this module's registry.
            pub fn clear() {
                registry().clear();
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    #[test]
    fn test_define_registry_macro() {
        define_registry!(test_reg);

        test_reg::register("count", 100i32);
        let value: Arc<i32> = test_reg::resolve("count").unwrap();
        assert_eq!(*value, 100);

        assert!(test_reg::is_registered("count"));
        assert!(!test_reg::is_registered("other"));
    }

    #[test]
    fn test_registries_are_isolated() {
        define_registry!(reg_a);
        define_registry!(reg_b);

        reg_a::register("shared-key", 1i32);
        reg_b::register("shared-key", 2i32);

        let a: Arc<i32> = reg_a::resolve("shared-key").unwrap();
        let b: Arc<i32> = reg_b::resolve("shared-key").unwrap();

        assert_eq!(*a, 1);
        assert_eq!(*b, 2);
    }

    #[test]
    fn test_defaults_reapplied_on_reset() {
        define_registry!(wired, defaults = |r: &crate::ServiceRegistry| {
            r.register("base-url", "https://example.com".to_string());
        });

        assert!(wired::is_registered("base-url"));

        wired::register("extra", 1u8);
        wired::registry().reset();

        assert!(wired::is_registered("base-url"));
        assert!(!wired::is_registered("extra"));
    }
}
