//! # Storefront Router
//!
//! Route table and navigation guard for the storefront client.
//!
//! The guard runs before each route transition and is a pure function of
//! the target route's requirement flags and a [`SessionSnapshot`] taken
//! from the session repository:
//!
//! 1. Route requires auth and no token is present → redirect to login,
//!    preserving the originally requested path.
//! 2. Otherwise, route requires admin and the role is not privileged →
//!    redirect home.
//! 3. Otherwise → allow.
//!
//! The auth check is evaluated strictly before the admin check, so an
//! anonymous user requesting an admin-only route lands on login, not home.
//!
//! ## Example
//!
//! ```
//! use storefront_core::stores::MemoryStore;
//! use storefront_router::{SessionSnapshot, guard, routes};
//!
//! let repo = MemoryStore::new();
//! let route = routes::resolve("/admin/orders");
//! let snapshot = SessionSnapshot::from_repository(&repo);
//!
//! let decision = guard::evaluate(route, "/admin/orders", &snapshot);
//! assert_eq!(
//!     decision,
//!     guard::GuardDecision::RedirectToLogin {
//!         redirect: "/admin/orders".to_string()
//!     }
//! );
//! ```

pub mod guard;
pub mod navigator;
pub mod routes;

pub use guard::{GuardDecision, SessionSnapshot, evaluate};
pub use navigator::{NavigationTarget, Navigator};
#[cfg(feature = "test-utils")]
pub use navigator::RecordingNavigator;
pub use routes::{APP_TITLE, NOT_FOUND, ROUTES, Route, resolve};
