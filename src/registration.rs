//! Registration descriptors: how a key maps to a value.
//!
//! The three lifecycles are modeled as a sum type so the resolver's branching
//! is exhaustive and compiler-checked. A registration that is "present but
//! malformed" is unrepresentable here; the remaining failure mode is asking
//! for a key under the wrong type, which surfaces as a downcast error.

use std::any::Any;
use std::sync::Arc;

/// A type-erased stored value.
pub(crate) type ErasedInstance = Arc<dyn Any + Send + Sync>;

/// A type-erased zero-argument constructor.
pub(crate) type ErasedCtor = Arc<dyn Fn() -> ErasedInstance + Send + Sync>;

/// One registration, covering exactly one of the three lifecycles.
pub(crate) enum Registration {
    /// A pre-built value, returned verbatim on every resolve.
    Instance(ErasedInstance),
    /// A constructor invoked fresh on every resolve.
    Factory(ErasedCtor),
    /// A constructor invoked at most once; the result is cached.
    Singleton(ErasedCtor),
}

impl Registration {
    pub(crate) fn instance<T: Send + Sync + 'static>(value: Arc<T>) -> Self {
        Registration::Instance(value)
    }

    pub(crate) fn factory<T, F>(ctor: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Registration::Factory(erase(ctor))
    }

    pub(crate) fn singleton<T, F>(ctor: F) -> Self
    where
        T: Send + Sync + 'static,
        F: Fn() -> T + Send + Sync + 'static,
    {
        Registration::Singleton(erase(ctor))
    }

    /// Lifecycle name, used in log events.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Registration::Instance(_) => "instance",
            Registration::Factory(_) => "factory",
            Registration::Singleton(_) => "singleton",
        }
    }
}

fn erase<T, F>(ctor: F) -> ErasedCtor
where
    T: Send + Sync + 'static,
    F: Fn() -> T + Send + Sync + 'static,
{
    Arc::new(move || {
        let value: ErasedInstance = Arc::new(ctor());
        value
    })
}
