//! Product catalog endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};

/// Catalog product.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product id.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Owning category id.
    pub category_id: i64,
    /// Owning category name, when the backend joins it in.
    pub category_name: Option<String>,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i64,
    /// Listing status flag.
    pub status: Option<i32>,
    /// Cover image URL.
    pub cover_url: Option<String>,
    /// Long description.
    pub description: Option<String>,
    /// Manufacturer name.
    pub manufacturer: Option<String>,
    /// Package specification (e.g. "0.25g*24").
    pub specification: Option<String>,
    /// Drug approval number.
    pub approval_number: Option<String>,
    /// Secondary display name.
    pub sub_name: Option<String>,
    /// Whether a prescription is required.
    pub is_prescription: Option<i32>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last-update timestamp.
    pub update_time: Option<String>,
}

/// Query parameters for the public catalog listing.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Full-text keyword.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    /// Restrict to one category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<i64>,
    /// Minimum unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,
    /// Maximum unit price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
    /// Filter on prescription requirement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prescription: Option<bool>,
    /// 1-based page number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Payload for creating or updating a product (admin).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    /// Owning category id.
    pub category_id: i64,
    /// Display name.
    pub name: String,
    /// Secondary display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_name: Option<String>,
    /// Manufacturer name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    /// Package specification.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specification: Option<String>,
    /// Drug approval number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_number: Option<String>,
    /// Whether a prescription is required (0/1 flag on the wire).
    pub is_prescription: i32,
    /// Unit price.
    pub price: f64,
    /// Units in stock.
    pub stock: i64,
    /// Cover image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    /// Long description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Listing status flag; only meaningful on update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AdminListQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    category_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a str>,
}

#[derive(Serialize)]
struct StatusPayload {
    status: i32,
}

/// Client for `/products` and `/admin/products`.
pub struct ProductsApi<'a> {
    http: &'a Http,
}

impl<'a> ProductsApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// List catalog products matching `query`.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn list(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.http.get_query("/products", query).await
    }

    /// Fetch a single product.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn get(&self, id: i64) -> Result<Product> {
        self.http.get(&format!("/products/{id}")).await
    }

    /// Fetch reviews for a product.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn reviews(&self, id: i64) -> Result<Vec<serde_json::Value>> {
        self.http.get(&format!("/products/{id}/reviews")).await
    }

    /// List products for the back-office (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_list(
        &self,
        category_id: Option<i64>,
        keyword: Option<&str>,
    ) -> Result<Vec<Product>> {
        self.http
            .get_query(
                "/admin/products",
                &AdminListQuery {
                    category_id,
                    keyword,
                },
            )
            .await
    }

    /// Create a product (admin). Returns the new product id.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_create(&self, payload: &ProductPayload) -> Result<i64> {
        self.http.post("/admin/products", payload).await
    }

    /// Replace a product (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_update(&self, id: i64, payload: &ProductPayload) -> Result<String> {
        self.http.put(&format!("/admin/products/{id}"), payload).await
    }

    /// Toggle a product's listing status (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_update_status(&self, id: i64, status: i32) -> Result<String> {
        self.http
            .patch(
                &format!("/admin/products/{id}/status"),
                &StatusPayload { status },
            )
            .await
    }

    /// Delete a product (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_delete(&self, id: i64) -> Result<String> {
        self.http.delete(&format!("/admin/products/{id}")).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_query_skips_unset_fields() {
        let query = ProductQuery {
            keyword: Some("aspirin".to_string()),
            page: Some(2),
            ..ProductQuery::default()
        };
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json["keyword"], "aspirin");
        assert_eq!(json["page"], 2);
        assert!(json.get("categoryId").is_none());
        assert!(json.get("minPrice").is_none());
    }

    #[test]
    fn test_product_decodes_wire_payload() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "id": 3,
            "name": "布洛芬缓释胶囊",
            "categoryId": 1,
            "price": 12.5,
            "stock": 100,
            "isPrescription": 0,
        }))
        .unwrap();

        assert_eq!(product.name, "布洛芬缓释胶囊");
        assert_eq!(product.is_prescription, Some(0));
        assert!(product.cover_url.is_none());
    }
}
