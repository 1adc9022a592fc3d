//! Session-expiry signal.
//!
//! The pipeline is the only place that can detect an expired session (an
//! HTTP 401), but it must not know anything about navigation. It clears the
//! persisted session itself and emits a typed signal through this seam; the
//! subscriber decides what "go to the login page" means.

/// Subscriber for the pipeline's session-expired signal.
///
/// Invoked synchronously, before the rejected call propagates to its
/// caller, and at most once per expiry: when several concurrent requests
/// observe a 401, only the one that actually cleared the persisted session
/// fires the signal. A 401 received while the session is already empty
/// fires no signal at all — there is no session to expire, and the caller
/// still gets [`ApiError::SessionExpired`](crate::ApiError::SessionExpired).
pub trait SessionExpiredObserver: Send + Sync {
    /// The persisted session was just cleared in response to a 401.
    fn on_session_expired(&self);
}

/// Observer that ignores the signal.
///
/// Used when no navigation wiring exists, e.g. in one-shot scripts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SessionExpiredObserver for NoopObserver {
    fn on_session_expired(&self) {}
}
