//! Cart endpoints for the signed-in user.

use thriftwear_core::{CreateCart, DefaultResponse, GetCart, UpdateCart};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Fetch the cart contents.
    ///
    /// `GET /v1/cart`
    #[must_use]
    pub fn get_cart(&self) -> Call<GetCart> {
        self.call(Endpoint::get("/v1/cart"))
    }

    /// Add a product to the cart. Adding an existing product/size pair
    /// increments its quantity server-side.
    ///
    /// `POST /v1/cart`
    #[must_use]
    pub fn create_cart(&self, body: &CreateCart) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/cart").json(body))
    }

    /// Set the quantity of a cart line.
    ///
    /// `PUT /v1/cart`
    #[must_use]
    pub fn update_cart(&self, body: UpdateCart) -> Call<DefaultResponse> {
        self.call(Endpoint::put("/v1/cart").json(&body))
    }

    /// Remove a cart line.
    ///
    /// `DELETE /v1/cart/{id}`
    #[must_use]
    pub fn delete_cart_item(&self, id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::delete("/v1/cart/{id}").path_param("id", id))
    }
}
