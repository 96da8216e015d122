//! Checkout and order endpoints.

use thriftwear_core::{CreateOrder, DefaultResponse, GetAdminOrders, GetDetailOrder, GetShippingPrices};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Place an order for the current cart contents.
    ///
    /// `POST /v1/order`
    #[must_use]
    pub fn create_order(&self, body: &CreateOrder) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/order").json(body))
    }

    /// Fetch one order with its product lines and buyer identity.
    ///
    /// `GET /v1/orders/{id}`
    #[must_use]
    pub fn get_detail_order(&self, id: Uuid) -> Call<GetDetailOrder> {
        self.call(Endpoint::get("/v1/orders/{id}").path_param("id", id))
    }

    /// Server-side shipping quotes for the current cart.
    ///
    /// `GET /v1/shipping_price`
    ///
    /// The checkout page also computes this locally via
    /// [`thriftwear_core::ShippingMethod::quote`] for a live estimate.
    #[must_use]
    pub fn get_shipping_price(&self) -> Call<GetShippingPrices> {
        self.call(Endpoint::get("/v1/shipping_price"))
    }

    /// Confirm delivery of one of the caller's shipped orders, moving
    /// it to `completed`.
    ///
    /// `PUT /v1/order/{order_id}`
    #[must_use]
    pub fn update_order_status(&self, order_id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::put("/v1/order/{order_id}").path_param("order_id", order_id))
    }

    /// Set any order's status (admin only). The server accepts
    /// `processed`, `shipped`, `cancelled`, or `completed`.
    ///
    /// `PUT /v1/orders/{id}?order_status=...`
    #[must_use]
    pub fn update_orders(&self, id: Uuid, order_status: &str) -> Call<DefaultResponse> {
        self.call(
            Endpoint::put("/v1/orders/{id}")
                .path_param("id", id)
                .query("order_status", Some(order_status)),
        )
    }

    /// Page through every order (admin only).
    ///
    /// `GET /v1/orders?sort_by=...&page=...&page_size=...`
    #[must_use]
    pub fn get_orders_admin(
        &self,
        sort_by: Option<&str>,
        page: Option<u32>,
        page_size: Option<u32>,
    ) -> Call<GetAdminOrders> {
        self.call(
            Endpoint::get("/v1/orders")
                .query("sort_by", sort_by)
                .query("page", page)
                .query("page_size", page_size),
        )
    }
}
