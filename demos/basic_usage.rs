//! Basic usage walkthrough for service-registry.
//!
//! Demonstrates:
//! - The three lifecycles: instance, factory, singleton
//! - Resolving with `resolve()` (returns `Arc<T>`) and `resolve_cloned()`
//! - Error behavior for unregistered keys
//!
//! Run with: `cargo run --example basic_usage`

use service_registry::ServiceRegistry;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
struct AppConfig {
    name: String,
    debug_mode: bool,
}

fn main() {
    println!("=== service-registry: Basic Usage ===\n");

    let registry = ServiceRegistry::new();

    // -------------------------------------------------------------------------
    // 1. Instance registration: a pre-built value
    // -------------------------------------------------------------------------
    println!("1. Registering a pre-built config...");

    registry.register(
        "config",
        AppConfig {
            name: "feedback-portal".to_string(),
            debug_mode: false,
        },
    );

    let config: Arc<AppConfig> = registry.resolve("config").unwrap();
    println!("   Resolved: {config:?}");

    // -------------------------------------------------------------------------
    // 2. Factory registration: a fresh instance per resolve
    // -------------------------------------------------------------------------
    println!("\n2. Registering a request-id factory...");

    let counter = Arc::new(AtomicU32::new(0));
    let counter_in_ctor = counter.clone();
    registry.register_factory("request-id", move || {
        counter_in_ctor.fetch_add(1, Ordering::SeqCst)
    });

    let first: Arc<u32> = registry.resolve("request-id").unwrap();
    let second: Arc<u32> = registry.resolve("request-id").unwrap();
    println!("   Two resolves, two instances: {first} then {second}");

    // -------------------------------------------------------------------------
    // 3. Singleton registration: constructed once, cached
    // -------------------------------------------------------------------------
    println!("\n3. Registering a lazily built connection pool...");

    registry.register_singleton("pool", || {
        println!("   (constructing the pool now)");
        vec!["conn-1".to_string(), "conn-2".to_string()]
    });

    println!("   Nothing constructed yet.");
    let pool_a: Arc<Vec<String>> = registry.resolve("pool").unwrap();
    let pool_b: Arc<Vec<String>> = registry.resolve("pool").unwrap();
    println!(
        "   Same instance on both resolves: {}",
        Arc::ptr_eq(&pool_a, &pool_b)
    );

    // -------------------------------------------------------------------------
    // 4. Owned access and failure behavior
    // -------------------------------------------------------------------------
    println!("\n4. Cloned access and errors...");

    let owned: AppConfig = registry.resolve_cloned("config").unwrap();
    println!("   Owned clone of config: {}", owned.name);

    match registry.resolve::<String>("not-wired") {
        Ok(_) => unreachable!(),
        Err(err) => println!("   Resolving an unknown key: {err}"),
    }
}
