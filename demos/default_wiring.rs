//! Default wiring and registry entry points.
//!
//! Demonstrates:
//! - `ServiceRegistry::with_defaults` and `reset()`
//! - The process-wide registry in `service_registry::global`
//! - Module-scoped registries via `define_registry!`
//!
//! Run with: `cargo run --example default_wiring`

use service_registry::{define_registry, global, ServiceRegistry};
use std::sync::Arc;

define_registry!(tenant, defaults = |r: &ServiceRegistry| {
    r.register("plan", "starter".to_string());
});

fn main() {
    println!("=== service-registry: Default Wiring ===\n");

    // -------------------------------------------------------------------------
    // 1. A registry with retained default wiring
    // -------------------------------------------------------------------------
    println!("1. with_defaults + reset...");

    let registry = ServiceRegistry::with_defaults(|r| {
        r.register("api-base", "https://api.example.com".to_string());
        r.register_singleton("retry-limit", || 3u8);
    });

    registry.register("session-token", "abc123".to_string());
    println!(
        "   Before reset: api-base={}, session-token={}",
        registry.is_registered("api-base"),
        registry.is_registered("session-token"),
    );

    registry.reset();
    println!(
        "   After reset:  api-base={}, session-token={}",
        registry.is_registered("api-base"),
        registry.is_registered("session-token"),
    );

    // -------------------------------------------------------------------------
    // 2. The process-wide registry
    // -------------------------------------------------------------------------
    println!("\n2. The global facade...");

    global::register_singleton("motd", || "welcome to the portal".to_string());
    let motd: Arc<String> = global::resolve("motd").unwrap();
    println!("   Resolved from the global registry: {motd}");
    global::clear();

    // -------------------------------------------------------------------------
    // 3. A module-scoped registry with defaults
    // -------------------------------------------------------------------------
    println!("\n3. define_registry! with defaults...");

    let plan: Arc<String> = tenant::resolve("plan").unwrap();
    println!("   tenant::plan = {plan}");

    tenant::register("plan", "enterprise".to_string());
    let plan: Arc<String> = tenant::resolve("plan").unwrap();
    println!("   After overwrite: {plan}");

    tenant::registry().reset();
    let plan: Arc<String> = tenant::resolve("plan").unwrap();
    println!("   After reset, defaults are back: {plan}");
}
