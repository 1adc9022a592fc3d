//! The navigation guard.
//!
//! Runs before each route transition. The guard is a pure function of the
//! target route's requirement flags and a snapshot of the current session;
//! it holds no state of its own and is recomputed on every transition.

use crate::routes::Route;
use storefront_core::{Role, SessionRepository, UserProfile, session};

/// What the session looked like at the instant of a navigation.
///
/// Taken explicitly from the repository rather than read ambiently, so the
/// guard stays independently testable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Bearer token, when logged in.
    pub token: Option<String>,
    /// Role from the stored profile, when parseable.
    pub role: Option<Role>,
}

impl SessionSnapshot {
    /// Snapshot the persisted session.
    ///
    /// A stored profile that fails to parse yields no role: the guard
    /// treats the session as non-admin without touching storage (cleanup
    /// belongs to the auth manager, not the guard).
    #[must_use]
    pub fn from_repository(repo: &dyn SessionRepository) -> Self {
        let token = session::stored_token(repo);
        let role = repo
            .get(session::keys::USER)
            .and_then(|raw| serde_json::from_str::<UserProfile>(&raw).ok())
            .map(|profile| profile.role);

        Self { token, role }
    }

    /// Whether a token is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Whether the snapshot carries the privileged role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin)
    }
}

/// Outcome of guarding one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardDecision {
    /// Proceed to the requested route.
    Allow,
    /// Not logged in; go to login, remembering where the user wanted to go.
    RedirectToLogin {
        /// The originally requested path, to return to after login.
        redirect: String,
    },
    /// Logged in but not privileged enough; go home.
    RedirectToHome,
}

/// Decide whether a navigation to `route` (requested as `requested_path`)
/// may proceed.
///
/// The authentication check is evaluated strictly before the admin check:
/// an anonymous user requesting an admin-only route is sent to login, not
/// home.
#[must_use]
pub fn evaluate(route: &Route, requested_path: &str, session: &SessionSnapshot) -> GuardDecision {
    if route.requires_auth && !session.is_authenticated() {
        return GuardDecision::RedirectToLogin {
            redirect: requested_path.to_string(),
        };
    }

    if route.requires_admin && !session.is_admin() {
        return GuardDecision::RedirectToHome;
    }

    GuardDecision::Allow
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::routes::resolve;
    use storefront_core::session::keys;
    use storefront_core::stores::MemoryStore;

    fn anonymous() -> SessionSnapshot {
        SessionSnapshot::default()
    }

    fn customer() -> SessionSnapshot {
        SessionSnapshot {
            token: Some("tok".to_string()),
            role: Some(Role::User),
        }
    }

    fn admin() -> SessionSnapshot {
        SessionSnapshot {
            token: Some("tok".to_string()),
            role: Some(Role::Admin),
        }
    }

    #[test]
    fn test_public_route_always_allowed() {
        let route = resolve("/products");
        assert_eq!(evaluate(route, "/products", &anonymous()), GuardDecision::Allow);
        assert_eq!(evaluate(route, "/products", &admin()), GuardDecision::Allow);
    }

    #[test]
    fn test_authed_route_redirects_anonymous_to_login() {
        let route = resolve("/orders/7");
        assert_eq!(
            evaluate(route, "/orders/7", &anonymous()),
            GuardDecision::RedirectToLogin {
                redirect: "/orders/7".to_string()
            }
        );
    }

    #[test]
    fn test_admin_route_anonymous_goes_to_login_not_home() {
        // Tie-break: the auth check runs strictly first.
        let route = resolve("/admin/products");
        assert_eq!(
            evaluate(route, "/admin/products", &anonymous()),
            GuardDecision::RedirectToLogin {
                redirect: "/admin/products".to_string()
            }
        );
    }

    #[test]
    fn test_admin_route_customer_goes_home() {
        let route = resolve("/admin/products");
        assert_eq!(
            evaluate(route, "/admin/products", &customer()),
            GuardDecision::RedirectToHome
        );
    }

    #[test]
    fn test_admin_route_admin_allowed() {
        let route = resolve("/admin/products");
        assert_eq!(evaluate(route, "/admin/products", &admin()), GuardDecision::Allow);
    }

    #[test]
    fn test_snapshot_reads_repository() {
        let repo = MemoryStore::new();
        repo.set(keys::TOKEN, "tok");
        repo.set(keys::USER, r#"{"id":1,"username":"root","role":"ADMIN"}"#);

        let snapshot = SessionSnapshot::from_repository(&repo);
        assert!(snapshot.is_authenticated());
        assert!(snapshot.is_admin());
    }

    #[test]
    fn test_corrupt_profile_is_not_admin_and_storage_untouched() {
        let repo = MemoryStore::new();
        repo.set(keys::TOKEN, "tok");
        repo.set(keys::USER, "garbage{");

        let snapshot = SessionSnapshot::from_repository(&repo);
        assert!(snapshot.is_authenticated());
        assert!(!snapshot.is_admin());
        // The guard never mutates storage.
        assert_eq!(repo.get(keys::USER).as_deref(), Some("garbage{"));
    }
}
