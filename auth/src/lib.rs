//! # Storefront Auth
//!
//! The session and authorization layer of the storefront client.
//!
//! [`AuthManager`] owns the login/registration/logout lifecycle over the
//! persistent session repository, keeping the bearer token and the cached
//! profile committed or cleared together. [`SessionExpiryRedirect`]
//! bridges the HTTP pipeline's expiry signal to the router, sending the
//! user back to the login route when the server rejects their token.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_auth::AuthManager;
//! use storefront_client::{ClientConfig, Http};
//! use storefront_core::stores::FileStore;
//!
//! let repo = Arc::new(FileStore::open("session.json")?);
//! let http = Arc::new(Http::new(ClientConfig::from_env(), repo.clone())?);
//! let auth = AuthManager::new(http, repo);
//!
//! if auth.login("alice", "secret").await {
//!     println!("logged in as {:?}", auth.profile());
//! }
//! ```

pub mod expiry;
pub mod manager;

pub use expiry::SessionExpiryRedirect;
pub use manager::{AuthManager, ProfileUpdate};
