//! Error types for list storage growth.

use std::collections::TryReserveError;
use std::fmt;

use thiserror::Error;

/// The slot array could not be grown to the requested capacity.
///
/// The list is left exactly as it was before the failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot grow list storage to {requested} slots")]
pub struct ReserveError {
    requested: usize,
    #[source]
    source: TryReserveError,
}

impl ReserveError {
    pub(crate) fn new(requested: usize, source: TryReserveError) -> Self {
        Self { requested, source }
    }

    /// Capacity, in slots, that could not be allocated.
    pub fn requested(&self) -> usize {
        self.requested
    }
}

/// Error returned when a handle could not be inserted.
///
/// Carries the rejected handle back to the caller, who still owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    value: T,
    error: ReserveError,
}

impl<T> Rejected<T> {
    pub(crate) fn new(value: T, error: ReserveError) -> Self {
        Self { value, error }
    }

    /// Returns the handle that could not be inserted.
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Returns the underlying allocation failure.
    pub fn reserve_error(&self) -> &ReserveError {
        &self.error
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle rejected: {}", self.error)
    }
}

impl<T: fmt::Debug> std::error::Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve_failure() -> ReserveError {
        let mut v: Vec<u64> = Vec::new();
        let source = v.try_reserve_exact(usize::MAX).unwrap_err();
        ReserveError::new(usize::MAX, source)
    }

    #[test]
    fn reserve_error_message() {
        let err = reserve_failure();
        assert_eq!(err.requested(), usize::MAX);
        assert_eq!(
            err.to_string(),
            format!("cannot grow list storage to {} slots", usize::MAX)
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn rejected_returns_value() {
        let rejected = Rejected::new(42u32, reserve_failure());
        assert!(rejected.to_string().starts_with("handle rejected: "));
        assert!(std::error::Error::source(&rejected).is_some());
        assert_eq!(rejected.into_inner(), 42);
    }
}
