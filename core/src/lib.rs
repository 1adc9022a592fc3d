//! # Storefront Core
//!
//! Session data model and persistent session storage for the storefront
//! client SDK.
//!
//! This crate is the leaf dependency of the workspace: it defines what a
//! [`Session`] is, the [`SessionRepository`] key-value seam it is persisted
//! through, and the concrete stores ([`stores::FileStore`] for durable
//! storage, [`stores::MemoryStore`] for tests and ephemeral use).
//!
//! ## Invariant
//!
//! The persisted `token` and `user` keys are always set and cleared
//! together. The [`session`] helpers enforce this: restoring a session with
//! only one key present, or with an unparseable profile, clears both keys
//! and yields no session.
//!
//! ## Example
//!
//! ```
//! use storefront_core::stores::MemoryStore;
//! use storefront_core::{session, Role, Session, UserProfile};
//!
//! let repo = MemoryStore::new();
//! let s = Session::new("tok-1", UserProfile::new(1, "alice", Role::Admin));
//! session::persist(&repo, &s);
//!
//! let restored = session::restore(&repo);
//! assert_eq!(restored.map(|s| s.token), Some("tok-1".to_string()));
//! ```

pub mod error;
pub mod repository;
pub mod session;
pub mod stores;

pub use error::StoreError;
pub use repository::SessionRepository;
pub use session::{Role, Session, UserProfile};
