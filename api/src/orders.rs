//! Order endpoints.

use serde::{Deserialize, Serialize};
use storefront_client::{Http, Result};

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Awaiting payment.
    PendingPay,
    /// Paid, awaiting shipment.
    PendingShip,
    /// Shipped, awaiting receipt confirmation.
    PendingReceive,
    /// Received and closed.
    Completed,
    /// Canceled before completion.
    Canceled,
}

/// One line of an order.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// Order line id.
    pub id: Option<i64>,
    /// Owning order id.
    pub order_id: Option<i64>,
    /// Product id.
    pub product_id: i64,
    /// Product display name at purchase time.
    pub product_name: Option<String>,
    /// Quantity ordered.
    pub quantity: Option<i64>,
}

/// An order header.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Order id.
    pub id: i64,
    /// Human-facing order number.
    pub order_no: Option<String>,
    /// Owning user id.
    pub user_id: Option<i64>,
    /// Order total.
    pub total_amount: Option<f64>,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Receiver name.
    pub receiver_name: Option<String>,
    /// Receiver phone.
    pub receiver_phone: Option<String>,
    /// Receiver address.
    pub receiver_address: Option<String>,
    /// Payment timestamp.
    pub pay_time: Option<String>,
    /// Shipment timestamp.
    pub ship_time: Option<String>,
    /// Receipt timestamp.
    pub receive_time: Option<String>,
    /// Creation timestamp.
    pub create_time: Option<String>,
    /// Last-update timestamp.
    pub update_time: Option<String>,
}

/// Order header plus its lines.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDetail {
    /// The order header.
    pub order: Order,
    /// The order lines.
    pub items: Vec<OrderItem>,
}

/// `POST /orders` payload; the order is created from the current cart.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// Receiver name.
    pub receiver_name: String,
    /// Receiver phone.
    pub receiver_phone: String,
    /// Receiver address.
    pub receiver_address: String,
}

#[derive(Serialize)]
struct StatusQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
}

#[derive(Serialize)]
struct AdminOrderQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keyword: Option<&'a str>,
}

/// Client for `/orders` and `/admin/orders`.
pub struct OrdersApi<'a> {
    http: &'a Http,
}

impl<'a> OrdersApi<'a> {
    /// Create the resource client.
    #[must_use]
    pub const fn new(http: &'a Http) -> Self {
        Self { http }
    }

    /// Create an order from the current cart. Returns the order id.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn create_from_cart(&self, request: &CreateOrderRequest) -> Result<i64> {
        self.http.post("/orders", request).await
    }

    /// List the current user's orders, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn list_mine(&self, status: Option<&str>) -> Result<Vec<Order>> {
        self.http.get_query("/orders", &StatusQuery { status }).await
    }

    /// Fetch an order with its lines.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn detail(&self, id: i64) -> Result<OrderDetail> {
        self.http.get(&format!("/orders/{id}")).await
    }

    /// Pay an order.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn pay(&self, id: i64) -> Result<String> {
        self.http
            .post(&format!("/orders/{id}/pay"), &serde_json::json!({}))
            .await
    }

    /// Confirm receipt of a shipped order.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn confirm_receive(&self, id: i64) -> Result<String> {
        self.http
            .post(&format!("/orders/{id}/receive"), &serde_json::json!({}))
            .await
    }

    /// Cancel an order.
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn cancel(&self, id: i64) -> Result<String> {
        self.http
            .post(&format!("/orders/{id}/cancel"), &serde_json::json!({}))
            .await
    }

    /// List all orders (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_list(
        &self,
        status: Option<&str>,
        keyword: Option<&str>,
    ) -> Result<Vec<Order>> {
        self.http
            .get_query("/admin/orders", &AdminOrderQuery { status, keyword })
            .await
    }

    /// Mark an order shipped (admin).
    ///
    /// # Errors
    ///
    /// Returns the pipeline's classified error on failure.
    pub async fn admin_ship(&self, id: i64) -> Result<String> {
        self.http
            .post(&format!("/admin/orders/{id}/ship"), &serde_json::json!({}))
            .await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_value(OrderStatus::PendingPay).unwrap(),
            "PENDING_PAY"
        );
        assert_eq!(
            serde_json::from_str::<OrderStatus>(r#""PENDING_RECEIVE""#).unwrap(),
            OrderStatus::PendingReceive
        );
    }

    #[test]
    fn test_create_order_wire_names() {
        let request = CreateOrderRequest {
            receiver_name: "Alice".to_string(),
            receiver_phone: "13800000000".to_string(),
            receiver_address: "1 Main St".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["receiverName"], "Alice");
        assert_eq!(json["receiverPhone"], "13800000000");
        assert_eq!(json["receiverAddress"], "1 Main St");
    }
}
