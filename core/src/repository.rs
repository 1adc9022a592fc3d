//! The session repository seam.
//!
//! Everything that touches persisted session state goes through
//! [`SessionRepository`]: the HTTP pipeline reads the token from it on every
//! outbound request, the auth manager commits and rolls back sessions
//! through it, and the navigation guard snapshots it per transition.
//! Injecting the trait (rather than reaching for ambient global storage)
//! keeps all of those independently testable.

/// Durable string key-value storage for session state.
///
/// Implementations must be cheap to read: the pipeline consults the store
/// on every request. Writes are best-effort; a store that cannot persist
/// logs the failure instead of propagating it, so callers never observe a
/// partial write error mid-flow.
pub trait SessionRepository: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove the value stored under `key`.
    ///
    /// Returns `true` if a value was actually removed. The pipeline relies
    /// on this to notify session-expiry subscribers exactly once when
    /// several concurrent requests hit an expired token.
    fn clear(&self, key: &str) -> bool;
}

impl<T: SessionRepository + ?Sized> SessionRepository for std::sync::Arc<T> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn clear(&self, key: &str) -> bool {
        (**self).clear(key)
    }
}
