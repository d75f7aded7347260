//! Base object contract: capability sets and reference counting.

use std::any::Any;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::types::Guid;

use super::dispatch::Dispatch;

/// Atomic reference count, starting at 1 for the creator's reference.
///
/// Increments and decrements are single atomic read-modify-writes, safe
/// under concurrent invocation without external locking. The decrement
/// that returns zero is the object's destruction signal; it fires exactly
/// once.
#[derive(Debug)]
pub struct RefCount(AtomicU32);

impl RefCount {
    pub fn new() -> Self {
        Self(AtomicU32::new(1))
    }

    /// Increment and return the new count.
    pub fn increment(&self) -> u32 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Decrement and return the new count.
    pub fn decrement(&self) -> u32 {
        self.0.fetch_sub(1, Ordering::SeqCst) - 1
    }

    /// Current count.
    pub fn get(&self) -> u32 {
        self.0.load(Ordering::SeqCst)
    }
}

impl Default for RefCount {
    fn default() -> Self {
        Self::new()
    }
}

/// Base contract every component object implements.
pub trait Unknown: Send + Sync + 'static {
    /// Interface identifiers reachable through a capability query. Every
    /// entry aliases the same instance; the set is fixed per concrete
    /// type.
    fn iids(&self) -> &[Guid];

    /// The count cell backing this object's shared lifetime.
    fn ref_count(&self) -> &RefCount;
}

/// Erasure support for objects handed out by class factories.
pub trait ComObject: Unknown {
    /// The object as `Any`, for typed recovery from an erased handle.
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;

    /// The object's automation view, if it exposes one.
    fn into_dispatch(self: Arc<Self>) -> Option<Arc<dyn Dispatch>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_starts_at_one() {
        let refs = RefCount::new();
        assert_eq!(refs.get(), 1);
    }

    #[test]
    fn test_increment_decrement_report_new_value() {
        let refs = RefCount::new();
        assert_eq!(refs.increment(), 2);
        assert_eq!(refs.increment(), 3);
        assert_eq!(refs.decrement(), 2);
        assert_eq!(refs.decrement(), 1);
        assert_eq!(refs.decrement(), 0);
    }
}
