//! # Storefront API
//!
//! Thin typed clients for every backend resource. Each function issues
//! exactly one call through the [`storefront_client::Http`] pipeline and
//! returns the envelope payload; all cross-cutting behavior (credentials,
//! cache-busting, error classification, session expiry) happens in the
//! pipeline, never here.
//!
//! Admin-prefixed paths (`/admin/...`) require the privileged role; that is
//! enforced server-side, the client only gates navigation.

pub mod banners;
pub mod cart;
pub mod categories;
pub mod files;
pub mod orders;
pub mod products;
pub mod users;

pub use banners::BannersApi;
pub use cart::CartApi;
pub use categories::CategoriesApi;
pub use files::FilesApi;
pub use orders::OrdersApi;
pub use products::ProductsApi;
pub use users::UsersApi;
