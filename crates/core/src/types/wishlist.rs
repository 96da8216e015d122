//! Wishlist bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One saved product in the signed-in user's wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Wishlist entry identifier.
    pub id: Uuid,
    /// Saved product identifier.
    pub product_id: Uuid,
    /// Product title.
    pub name: String,
    /// Unit price.
    pub price: i64,
    /// Absolute image URL.
    pub image: String,
}

/// Response of `GET /v1/wishlist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetWishlist {
    /// Saved products.
    pub data: Vec<WishlistItem>,
}

/// Payload for `POST /v1/wishlist`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateWishlist {
    /// Product to save.
    pub id: Uuid,
}
