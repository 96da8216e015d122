//! Cart bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line in the signed-in user's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Cart line identifier.
    pub id: Uuid,
    /// Product title.
    pub name: String,
    /// Unit price.
    pub price: i64,
    /// Absolute image URL.
    pub image: String,
    /// Units in the cart.
    pub quantity: u32,
    /// Chosen size label.
    pub size: String,
}

/// Response of `GET /v1/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCart {
    /// Cart lines.
    pub data: Vec<CartItem>,
}

/// Payload for `POST /v1/cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCart {
    /// Product to add.
    pub product_id: Uuid,
    /// Units to add.
    pub quantity: u32,
    /// Size label.
    pub size: String,
}

/// Payload for `PUT /v1/cart`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCart {
    /// Cart line to update.
    pub id: Uuid,
    /// Replacement quantity.
    pub quantity: u32,
}
