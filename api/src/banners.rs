//! Home page banner endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};

/// Carousel banner.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    /// Banner id.
    pub id: i64,
    /// Display title.
    pub title: Option<String>,
    /// Image URL.
    pub image_url: String,
    /// Click-through URL.
    pub link_url: Option<String>,
    /// Sort weight.
    pub sort_order: Option<i32>,
    /// Visibility status flag.
    pub status: Option<i32>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last-update timestamp.
    pub update_time: Option<String>,
}

/// Payload for creating or updating a banner (admin).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BannerPayload {
    /// Display title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Image URL.
    pub image_url: String,
    /// Click-through URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    /// Sort weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Visibility status flag; only meaningful on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Serialize)]
struct StatusPayload {
    status: i32,
}

/// Client for `/banners` and `/admin/banners`.
pub struct BannersApi<'a> {
    http: &'a Http,
}

impl<'a> BannersApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List visible banners.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn list(&self) -> Result<Vec<Banner>> {
        self.http.get("/banners").await
    }

    /// List all banners (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_list(&self) -> Result<Vec<Banner>> {
        self.http.get("/admin/banners").await
    }

    /// Create a banner (admin). Returns the new banner id.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_create(&self, payload: &BannerPayload) -> Result<i64> {
        self.http.post("/admin/banners", payload).await
    }

    /// Update a banner (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_update(&self, id: i64, payload: &BannerPayload) -> Result<String> {
        self.http.put(&format!("/admin/banners/{id}"), payload).await
    }

    /// Toggle a banner's visibility (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_update_status(&self, id: i64, status: i32) -> Result<String> {
        self.http
            .patch(
                &format!("/admin/banners/{id}/status"),
                &StatusPayload { status },
            )
            .await
    }

    /// Delete a banner (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_delete(&self, id: i64) -> Result<String> {
        self.http.delete(&format!("/admin/banners/{id}")).await
    }
}
