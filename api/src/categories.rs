//! Category endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};

/// Product category.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Category id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Sort weight.
    pub sort_order: Option<i32>,
    /// Visibility status flag.
    pub status: Option<i32>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last-update timestamp.
    pub update_time: Option<String>,
}

/// Payload for creating or updating a category (admin).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    /// Display name.
    pub name: String,
    /// Sort weight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
    /// Visibility status flag; only meaningful on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

/// Client for `/categories` and `/admin/categories`.
pub struct CategoriesApi<'a> {
    http: &'a Http,
}

impl<'a> CategoriesApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List visible categories.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn list(&self) -> Result<Vec<Category>> {
        self.http.get("/categories").await
    }

    /// List all categories (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_list(&self) -> Result<Vec<Category>> {
        self.http.get("/admin/categories").await
    }

    /// Create a category (admin). Returns the new category id.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_create(&self, payload: &CategoryPayload) -> Result<i64> {
        self.http.post("/admin/categories", payload).await
    }

    /// Update a category (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_update(&self, id: i64, payload: &CategoryPayload) -> Result<String> {
        self.http
            .put(&format!("/admin/categories/{id}"), payload)
            .await
    }

    /// Delete a category (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_delete(&self, id: i64) -> Result<String> {
        self.http.delete(&format!("/admin/categories/{id}")).await
    }
}
