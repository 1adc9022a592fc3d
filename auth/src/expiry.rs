//! Session-expiry handling.
//!
//! The HTTP pipeline clears the persisted session when the server rejects
//! a token; this module supplies the subscriber that turns that signal
//! into a navigation to the login route.

use std::sync::Arc;

use storefront_client::SessionExpiredObserver;
use storefront_router::{NavigationTarget, Navigator};

/// Sends the user to the login route when the pipeline reports an expired
/// session.
///
/// Storage has already been cleared by the time this fires; the subscriber
/// only navigates. The pipeline guarantees at most one notification per
/// expiry, so a burst of concurrent rejected requests produces a single
/// redirect.
pub struct SessionExpiryRedirect {
    navigator: Arc<dyn Navigator>,
}

impl SessionExpiryRedirect {
    /// Create a subscriber that redirects through `navigator`.
    #[must_use]
    pub fn new(navigator: Arc<dyn Navigator>) -> Self {
        Self { navigator }
    }
}

impl SessionExpiredObserver for SessionExpiryRedirect {
    fn on_session_expired(&self) {
        tracing::warn!("session expired, redirecting to login");
        self.navigator
            .navigate(NavigationTarget::Login { redirect: None });
    }
}
