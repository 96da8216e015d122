//! Checkout and order bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::OrderProduct;

/// Destination address embedded in a checkout request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrderAddress {
    /// Label for the address.
    pub address_name: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
}

/// Payload for `POST /v1/order`. The cart contents are read server-side;
/// the client only supplies shipping choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Shipping method name ("Regular" or "Next Day").
    pub shipping_method: String,
    /// Destination address.
    pub shipping_address: CreateOrderAddress,
    /// Whether to send a confirmation email.
    pub send_email: bool,
}

/// Response of `GET /v1/orders/{id}`. Includes the buyer's identity,
/// which the admin console renders next to the order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetDetailOrder {
    /// Order identifier.
    pub id: Uuid,
    /// Creation date, pre-formatted server-side (e.g. "Mon, 02 June 2025").
    pub created_at: String,
    /// Chosen shipping method name.
    pub shipping_method: String,
    /// Shipping cost charged.
    pub shipping_price: i64,
    /// Fulfilment status.
    pub status: String,
    /// Destination street address.
    pub shipping_address: String,
    /// Destination city.
    pub city: String,
    /// Contact phone number.
    pub phone_number: String,
    /// Ordered products.
    pub products: Vec<OrderProduct>,
    /// Buyer display name.
    pub name: String,
    /// Buyer email.
    pub email: String,
}

/// A server-side shipping quote for one method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPrice {
    /// Method name ("Regular" or "Next Day").
    pub name: String,
    /// Quoted cost for the current cart.
    pub price: i64,
}

/// Response of `GET /v1/shipping_price`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetShippingPrices {
    /// One quote per available method.
    pub data: Vec<ShippingPrice>,
}

/// One row of the admin order listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminOrder {
    /// Order identifier.
    pub id: Uuid,
    /// Creation date, pre-formatted server-side.
    pub created_at: String,
    /// Buyer display name.
    pub user_name: String,
    /// Buyer email.
    pub user_email: String,
    /// Fulfilment status.
    pub status: String,
    /// Order total including shipping.
    pub total: i64,
}

/// Response of `GET /v1/orders`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetAdminOrders {
    /// Orders on the requested page.
    pub data: Vec<AdminOrder>,
}
