//! Resolver failure policy.
//!
//! Resolvers never surface a fault to the caller: a failed store call is
//! logged here and replaced by an empty, well-typed value.

use std::fmt::Display;

pub trait FailSoft<T> {
    /// Unwrap the value, or log the error against `operation` and fall back
    /// to `T::default()`.
    fn or_empty(self, operation: &'static str) -> T;
}

impl<T: Default, E: Display> FailSoft<T> for Result<T, E> {
    fn or_empty(self, operation: &'static str) -> T {
        self.unwrap_or_else(|e| {
            tracing::error!(operation, error = %e, "resolver failed, returning empty result");
            T::default()
        })
    }
}
