//! Wishlist endpoints for the signed-in user.

use thriftwear_core::{CreateWishlist, DefaultResponse, GetWishlist};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Fetch the wishlist.
    ///
    /// `GET /v1/wishlist`
    #[must_use]
    pub fn get_wishlist(&self) -> Call<GetWishlist> {
        self.call(Endpoint::get("/v1/wishlist"))
    }

    /// Save a product to the wishlist.
    ///
    /// `POST /v1/wishlist`
    #[must_use]
    pub fn add_wishlist(&self, product_id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/wishlist").json(&CreateWishlist { id: product_id }))
    }

    /// Remove one saved product.
    ///
    /// `DELETE /v1/wishlist/{product_id}`
    #[must_use]
    pub fn delete_wishlist_item(&self, product_id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::delete("/v1/wishlist/{product_id}").path_param("product_id", product_id))
    }

    /// Empty the wishlist.
    ///
    /// `DELETE /v1/wishlist/clear`
    #[must_use]
    pub fn clear_wishlist(&self) -> Call<DefaultResponse> {
        self.call(Endpoint::delete("/v1/wishlist/clear"))
    }
}
