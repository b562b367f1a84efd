//! Opaque keys naming service contracts.
//!
//! A [`ServiceKey`] is the only way to address a registration. Collapsing
//! everything to one branded string type avoids accidental collisions between
//! ad-hoc string literals and symbolic constants referring to the same
//! logical service.

use std::borrow::Cow;
use std::fmt;

/// An opaque, globally unique identifier naming a service contract.
///
/// Keys are cheap to build from string literals (no allocation) and from
/// owned strings. Uniqueness is the only invariant the registry relies on:
/// two registrations sharing a key overwrite one another, last write wins.
///
/// # Examples
///
/// ```rust
/// use service_registry::ServiceKey;
///
/// const USER_STORE: ServiceKey = ServiceKey::from_static("user-store");
///
/// let dynamic = ServiceKey::new(format!("tenant-{}", 42));
/// assert_ne!(USER_STORE, dynamic);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceKey(Cow<'static, str>);

impl ServiceKey {
    /// Builds a key from a static string, usable in `const` contexts.
    pub const fn from_static(name: &'static str) -> Self {
        ServiceKey(Cow::Borrowed(name))
    }

    /// Builds a key from any string-like value.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        ServiceKey(name.into())
    }

    /// The key's name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ServiceKey {
    fn from(name: &'static str) -> Self {
        ServiceKey(Cow::Borrowed(name))
    }
}

impl From<String> for ServiceKey {
    fn from(name: String) -> Self {
        ServiceKey(Cow::Owned(name))
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
