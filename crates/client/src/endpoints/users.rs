//! User profile, address, balance, and order-history endpoints.
//!
//! All of these operate on the signed-in user except
//! [`ApiClient::get_detail_user`], which is admin-only.

use thriftwear_core::{
    DefaultResponse, GetOrders, GetUser, GetUserAddress, GetUserBalance, PutUserAddress,
    PutUserBalance,
};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Fetch the signed-in user's profile.
    ///
    /// `GET /v1/user`
    #[must_use]
    pub fn get_user(&self) -> Call<GetUser> {
        self.call(Endpoint::get("/v1/user"))
    }

    /// Update the signed-in user's profile.
    ///
    /// `PUT /v1/user`
    #[must_use]
    pub fn update_user(&self, body: &GetUser) -> Call<DefaultResponse> {
        self.call(Endpoint::put("/v1/user").json(body))
    }

    /// Delete a user account.
    ///
    /// `DELETE /v1/user?id=...`
    #[must_use]
    pub fn delete_user(&self, id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::delete("/v1/user").query("id", Some(id)))
    }

    /// Fetch the stored shipping address.
    ///
    /// `GET /v1/user/shipping_address`
    #[must_use]
    pub fn get_user_shipping_address(&self) -> Call<GetUserAddress> {
        self.call(Endpoint::get("/v1/user/shipping_address"))
    }

    /// Replace the stored shipping address.
    ///
    /// `POST /v1/user/shipping_address`
    #[must_use]
    pub fn update_user_shipping_address(&self, body: &PutUserAddress) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/user/shipping_address").json(body))
    }

    /// Fetch the account balance.
    ///
    /// `GET /v1/user/balance`
    #[must_use]
    pub fn get_user_balance(&self) -> Call<GetUserBalance> {
        self.call(Endpoint::get("/v1/user/balance"))
    }

    /// Top up the account balance.
    ///
    /// `POST /v1/user/balance`
    #[must_use]
    pub fn update_user_balance(&self, body: PutUserBalance) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/user/balance").json(&body))
    }

    /// Page through the signed-in user's order history.
    ///
    /// `GET /v1/user/order?page=...&page_size=...`
    ///
    /// `None` values are omitted from the URL; the server then applies
    /// its defaults (page 1, 25 per page).
    #[must_use]
    pub fn get_orders_user(&self, page: Option<u32>, page_size: Option<u32>) -> Call<GetOrders> {
        self.call(
            Endpoint::get("/v1/user/order")
                .query("page", page)
                .query("page_size", page_size),
        )
    }

    /// Fetch another user's profile by id (admin only).
    ///
    /// `GET /v1/user/{id}`
    #[must_use]
    pub fn get_detail_user(&self, id: Uuid) -> Call<GetUser> {
        self.call(Endpoint::get("/v1/user/{id}").path_param("id", id))
    }
}
