//! # Storefront Client
//!
//! The HTTP request/response pipeline of the storefront SDK.
//!
//! Every outbound call goes through one chokepoint, [`Http`], which applies
//! two interception stages:
//!
//! - **Outbound** ([`stage`]): attach the persisted bearer credential,
//!   append a cache-defeating parameter to GET requests.
//! - **Inbound**: unwrap the uniform `{success, message, data}` server
//!   [`Envelope`], classify every failure into exactly one [`ApiError`]
//!   variant, and turn an HTTP 401 into a cleared session plus a
//!   [`SessionExpiredObserver`] signal before the error propagates.
//!
//! The pipeline performs exactly one network attempt per call: no retries,
//! no deduplication, no caching, and a fixed 10-second upper bound per
//! request.
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use storefront_client::{ClientConfig, Http};
//! use storefront_core::stores::FileStore;
//!
//! let repo = Arc::new(FileStore::open("session.json")?);
//! let http = Http::new(ClientConfig::from_env(), repo)?;
//! let products: Vec<Product> = http.get("/products").await?;
//! ```

pub mod config;
pub mod envelope;
pub mod error;
pub mod http;
pub mod observer;
pub mod stage;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use envelope::Envelope;
pub use error::{ApiError, Result};
pub use http::Http;
pub use observer::{NoopObserver, SessionExpiredObserver};
pub use stage::{BearerAuth, CacheBust, RequestStage};
