//! Outbound request stages.
//!
//! Stages are composable middleware applied deterministically front-to-back
//! to every built request before it leaves the process. The two built-in
//! stages cover the cross-cutting concerns every call shares: bearer
//! credential injection and cache defeat for reads.

use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Method, Request};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use storefront_core::{SessionRepository, session};

/// A mutation applied to an outbound request.
pub trait RequestStage: Send + Sync {
    /// Apply this stage to `request`.
    fn apply(&self, request: &mut Request);
}

/// Attach the persisted bearer token, when one is present at send time.
///
/// Requests issued without a stored token carry no authorization header at
/// all.
pub struct BearerAuth {
    repo: Arc<dyn SessionRepository>,
}

impl BearerAuth {
    /// Create the stage over the given session repository.
    #[must_use]
    pub fn new(repo: Arc<dyn SessionRepository>) -> Self {
        Self { repo }
    }
}

impl RequestStage for BearerAuth {
    fn apply(&self, request: &mut Request) {
        let Some(token) = session::stored_token(&self.repo) else {
            return;
        };

        match HeaderValue::from_str(&format!("Bearer {token}")) {
            Ok(value) => {
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            Err(err) => {
                // A token with non-header characters cannot authenticate
                // anything; send the request anonymously.
                tracing::warn!(error = %err, "stored token is not a valid header value");
            }
        }
    }
}

/// Append a monotonically increasing `_t` parameter to GET requests so
/// intermediate caches never serve stale reads.
///
/// The value is the current wall clock in milliseconds with a monotonic
/// floor: two requests issued at different instants always carry different
/// values, even when the clock resolution cannot tell them apart.
pub struct CacheBust {
    last: AtomicI64,
}

impl CacheBust {
    /// Create the stage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            last: AtomicI64::new(0),
        }
    }

    fn next(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |prev| {
                Some(prev.max(now - 1) + 1)
            })
            .unwrap_or(now - 1);
        prev.max(now - 1) + 1
    }
}

impl Default for CacheBust {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestStage for CacheBust {
    fn apply(&self, request: &mut Request) {
        if request.method() != Method::GET {
            return;
        }

        let stamp = self.next();
        request
            .url_mut()
            .query_pairs_mut()
            .append_pair("_t", &stamp.to_string());
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use storefront_core::session::keys;
    use storefront_core::stores::MemoryStore;

    fn get_request(url: &str) -> Request {
        Request::new(Method::GET, url.parse().unwrap())
    }

    #[test]
    fn test_bearer_attached_when_token_present() {
        let repo = MemoryStore::new();
        repo.set(keys::TOKEN, "tok-123");

        let stage = BearerAuth::new(Arc::new(repo));
        let mut request = get_request("http://localhost/api/products");
        stage.apply(&mut request);

        let header = request.headers().get(AUTHORIZATION).unwrap();
        assert_eq!(header.to_str().unwrap(), "Bearer tok-123");
    }

    #[test]
    fn test_no_header_without_token() {
        let stage = BearerAuth::new(Arc::new(MemoryStore::new()));
        let mut request = get_request("http://localhost/api/products");
        stage.apply(&mut request);

        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_cache_bust_only_on_get() {
        let stage = CacheBust::new();

        let mut get = get_request("http://localhost/api/products");
        stage.apply(&mut get);
        assert!(get.url().query().unwrap().contains("_t="));

        let mut post = Request::new(Method::POST, "http://localhost/api/orders".parse().unwrap());
        stage.apply(&mut post);
        assert!(post.url().query().is_none());
    }

    #[test]
    fn test_cache_bust_values_are_strictly_increasing() {
        let stage = CacheBust::new();
        let mut values = Vec::new();
        for _ in 0..100 {
            values.push(stage.next());
        }

        for pair in values.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn test_cache_bust_preserves_existing_query() {
        let stage = CacheBust::new();
        let mut request = get_request("http://localhost/api/products?keyword=aspirin");
        stage.apply(&mut request);

        let query = request.url().query().unwrap();
        assert!(query.contains("keyword=aspirin"));
        assert!(query.contains("_t="));
    }
}
