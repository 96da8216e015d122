//! User profile, address, balance, and order-history bodies.
//!
//! Shapes mirror the backend user schemas: optional fields stay optional
//! because a freshly signed-up account has no address on file yet.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::Pagination;

/// Response of `GET /v1/user` and `GET /v1/user/{id}`; also the payload
/// of `PUT /v1/user`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUser {
    /// User identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Label for the stored address (e.g. "Home").
    pub address_name: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Account balance in the smallest currency unit.
    pub balance: i64,
}

/// Response of `GET /v1/user/shipping_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserAddress {
    /// User identifier.
    pub id: Uuid,
    /// Label for the stored address.
    pub address_name: Option<String>,
    /// Contact phone number.
    pub phone_number: Option<String>,
    /// Street address.
    pub address: Option<String>,
    /// City.
    pub city: Option<String>,
}

/// Payload for `POST /v1/user/shipping_address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutUserAddress {
    /// Label for the address.
    pub address_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
}

/// Response of `GET /v1/user/balance`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetUserBalance {
    /// User identifier.
    pub id: Uuid,
    /// Account balance.
    pub balance: i64,
}

/// Payload for `POST /v1/user/balance` (top-up amount).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PutUserBalance {
    /// Amount to add to the balance.
    pub balance: i64,
}

/// Quantity of one size within an ordered product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItemDetail {
    /// Units ordered in this size.
    pub quantity: u32,
    /// Size label (e.g. "M").
    pub size: String,
}

/// A product line within an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderProduct {
    /// Product identifier.
    pub id: Uuid,
    /// Per-size quantities.
    pub details: Vec<OrderItemDetail>,
    /// Unit price at order time.
    pub price: i64,
    /// Absolute image URL.
    pub image: String,
    /// Product title.
    pub name: String,
}

/// One order in the signed-in user's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Ordered products.
    pub products: Vec<OrderProduct>,
    /// Chosen shipping method name.
    pub shipping_method: String,
    /// Shipping cost charged.
    pub shipping_price: i64,
    /// Contact phone number.
    pub phone_number: String,
    /// Destination city.
    pub city: String,
    /// Fulfilment status.
    pub status: String,
    /// Destination street address.
    pub shipping_address: String,
}

/// Response of `GET /v1/user/order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetOrders {
    /// Orders on the requested page.
    pub data: Vec<Order>,
    /// Page metadata.
    pub pagination: Pagination,
}
