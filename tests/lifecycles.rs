//! Integration tests for the three registration lifecycles.
//!
//! Every test owns its registry, so nothing here needs serialization.

use service_registry::{RegistryError, ServiceKey, ServiceRegistry};
use std::panic::AssertUnwindSafe;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Debug, PartialEq)]
struct Ticket {
    id: u32,
}

#[test]
fn test_unregistered_key_fails_with_not_registered() {
    let registry = ServiceRegistry::new();

    assert!(!registry.is_registered("stats"));
    let result: Result<Arc<Ticket>, _> = registry.resolve("stats");
    assert_eq!(
        result.unwrap_err(),
        RegistryError::NotRegistered {
            key: ServiceKey::from_static("stats"),
        }
    );
}

#[test]
fn test_instance_registration_preserves_identity() {
    let registry = ServiceRegistry::new();
    let shared = Arc::new(Ticket { id: 7 });
    registry.register_arc("ticket", shared.clone());

    for _ in 0..3 {
        let resolved: Arc<Ticket> = registry.resolve("ticket").unwrap();
        assert!(Arc::ptr_eq(&resolved, &shared));
    }
}

#[test]
fn test_factory_yields_sequential_instances() {
    let registry = ServiceRegistry::new();
    let count = Arc::new(AtomicU32::new(0));
    let count_in_ctor = count.clone();
    registry.register_factory("ticket", move || Ticket {
        id: count_in_ctor.fetch_add(1, Ordering::SeqCst),
    });

    let first: Arc<Ticket> = registry.resolve("ticket").unwrap();
    let second: Arc<Ticket> = registry.resolve("ticket").unwrap();

    assert_eq!(first.id, 0);
    assert_eq!(second.id, 1);
    assert!(!Arc::ptr_eq(&first, &second));
}

#[test]
fn test_singleton_identity_across_resolves() {
    let registry = ServiceRegistry::new();
    let built = Arc::new(AtomicU32::new(0));
    let built_in_ctor = built.clone();
    registry.register_singleton("counter", move || Ticket {
        id: built_in_ctor.fetch_add(1, Ordering::SeqCst),
    });

    let first: Arc<Ticket> = registry.resolve("counter").unwrap();
    let second: Arc<Ticket> = registry.resolve("counter").unwrap();
    let third: Arc<Ticket> = registry.resolve("counter").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert!(Arc::ptr_eq(&second, &third));
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_reregistration_before_first_resolve_wins() {
    let registry = ServiceRegistry::new();
    registry.register_singleton("value", || 1u32);
    registry.register_factory("value", || 2u32);

    let a: Arc<u32> = registry.resolve("value").unwrap();
    let b: Arc<u32> = registry.resolve("value").unwrap();

    // Factory semantics now apply: fresh instance each time.
    assert_eq!(*a, 2);
    assert_eq!(*b, 2);
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_clear_then_new_singleton_reconstructs() {
    let registry = ServiceRegistry::new();
    let serial = Arc::new(AtomicU32::new(1));
    let serial_in_ctor = serial.clone();
    registry.register_singleton("session", move || Ticket {
        id: serial_in_ctor.fetch_add(1, Ordering::SeqCst),
    });

    let before_a: Arc<Ticket> = registry.resolve("session").unwrap();
    let before_b: Arc<Ticket> = registry.resolve("session").unwrap();
    assert!(Arc::ptr_eq(&before_a, &before_b));

    registry.clear();
    assert!(matches!(
        registry.resolve::<Ticket>("session"),
        Err(RegistryError::NotRegistered { .. })
    ));

    registry.register_singleton("session", || Ticket { id: 42 });
    let after: Arc<Ticket> = registry.resolve("session").unwrap();

    assert_eq!(after.id, 42);
    assert!(!Arc::ptr_eq(&before_a, &after));
}

#[test]
fn test_panicking_singleton_ctor_is_retried() {
    let registry = ServiceRegistry::new();
    let attempts = Arc::new(AtomicU32::new(0));
    let attempts_in_ctor = attempts.clone();
    registry.register_singleton("flaky", move || {
        if attempts_in_ctor.fetch_add(1, Ordering::SeqCst) == 0 {
            panic!("first construction fails");
        }
        "ready".to_string()
    });

    // The first resolve propagates the ctor's panic unchanged.
    let outcome = std::panic::catch_unwind(AssertUnwindSafe(|| {
        registry.resolve::<String>("flaky")
    }));
    assert!(outcome.is_err());

    // Nothing was cached, so the second resolve re-invokes the ctor.
    let value: Arc<String> = registry.resolve("flaky").unwrap();
    assert_eq!(&*value, "ready");
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn test_ctor_may_resolve_other_keys() {
    let registry = Arc::new(ServiceRegistry::new());
    registry.register("db-url", "postgres://localhost/feedback".to_string());

    let handle = registry.clone();
    registry.register_singleton("repository", move || {
        let url: Arc<String> = handle.resolve("db-url").unwrap();
        format!("repository({url})")
    });

    let repo: Arc<String> = registry.resolve("repository").unwrap();
    assert_eq!(&*repo, "repository(postgres://localhost/feedback)");
}

#[test]
fn test_singleton_is_not_refreshed_by_factory_state_changes() {
    let registry = ServiceRegistry::new();
    let source = Arc::new(AtomicU32::new(10));
    let source_in_ctor = source.clone();
    registry.register_singleton("snapshot", move || {
        source_in_ctor.load(Ordering::SeqCst)
    });

    let first: Arc<u32> = registry.resolve("snapshot").unwrap();
    source.store(99, Ordering::SeqCst);
    let second: Arc<u32> = registry.resolve("snapshot").unwrap();

    // The cached instance is never refreshed, even though the ctor would now
    // produce a different value.
    assert_eq!(*first, 10);
    assert_eq!(*second, 10);
}
