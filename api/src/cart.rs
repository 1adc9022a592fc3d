//! Shopping cart endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};

/// One line in the cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Cart line id.
    pub item_id: i64,
    /// Product id.
    pub product_id: i64,
    /// Product display name.
    pub product_name: Option<String>,
    /// Product cover image URL.
    pub product_cover_url: Option<String>,
    /// Unit price at the time of adding.
    pub unit_price: Option<f64>,
    /// Quantity in the cart.
    pub quantity: i64,
    /// Line total.
    pub amount: Option<f64>,
}

/// The whole cart.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartData {
    /// Cart lines.
    pub items: Vec<CartItem>,
    /// Cart total.
    pub total_amount: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddItemPayload {
    product_id: i64,
    quantity: i64,
}

#[derive(Serialize)]
struct QuantityPayload {
    quantity: i64,
}

/// Client for `/cart`.
pub struct CartApi<'a> {
    http: &'a Http,
}

impl<'a> CartApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Fetch the current user's cart.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn list(&self) -> Result<CartData> {
        self.http.get("/cart").await
    }

    /// Add a product to the cart.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure (commonly a
    /// business rejection such as insufficient stock).
    pub async fn add(&self, product_id: i64, quantity: i64) -> Result<String> {
        self.http
            .post(
                "/cart/items",
                &AddItemPayload {
                    product_id,
                    quantity,
                },
            )
            .await
    }

    /// Change the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn update_quantity(&self, item_id: i64, quantity: i64) -> Result<String> {
        self.http
            .patch(&format!("/cart/items/{item_id}"), &QuantityPayload { quantity })
            .await
    }

    /// Remove one cart line.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn remove(&self, item_id: i64) -> Result<String> {
        self.http.delete(&format!("/cart/items/{item_id}")).await
    }

    /// Empty the cart.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn clear(&self) -> Result<String> {
        self.http.delete("/cart").await
    }
}
