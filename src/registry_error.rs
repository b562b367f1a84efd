use thiserror::Error;

use crate::ServiceKey;

/// Errors returned by [`resolve`](crate::ServiceRegistry::resolve).
///
/// Both variants indicate a configuration bug (a missing registration at
/// startup, or asking for a key under the wrong type), not a recoverable
/// runtime condition. Callers should fix the wiring rather than catch and
/// retry. Panics raised by a constructor are never wrapped in this type;
/// they propagate to the resolver's caller unchanged.
#[derive(Debug, Error, PartialEq)]
pub enum RegistryError {
    /// No registration exists for the requested key.
    #[error("no service registered for key `{key}`")]
    NotRegistered {
        /// The key that was requested.
        key: ServiceKey,
    },

    /// A registration exists but cannot be resolved as the requested type.
    #[error("service `{key}` is registered but does not resolve as `{requested}`")]
    Resolution {
        /// The key that was requested.
        key: ServiceKey,
        /// The type the caller asked for.
        requested: &'static str,
    },
}
