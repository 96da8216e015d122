//! Category CRUD endpoints. The write operations require an admin token.

use thriftwear_core::{CreateCategory, DefaultResponse, DetailCategory, GetCategory, UpdateCategory};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// List every category.
    ///
    /// `GET /v1/categories`
    #[must_use]
    pub fn get_category(&self) -> Call<GetCategory> {
        self.call(Endpoint::get("/v1/categories"))
    }

    /// Fetch one category.
    ///
    /// `GET /v1/categories/detail?id=...`
    #[must_use]
    pub fn get_detail_category(&self, id: Uuid) -> Call<DetailCategory> {
        self.call(Endpoint::get("/v1/categories/detail").query("id", Some(id)))
    }

    /// Create a category.
    ///
    /// `POST /v1/categories`
    #[must_use]
    pub fn create_category(&self, body: &CreateCategory) -> Call<DefaultResponse> {
        self.call(Endpoint::post("/v1/categories").json(body))
    }

    /// Update a category's title and type.
    ///
    /// `PUT /v1/categories?id=...`
    #[must_use]
    pub fn update_category(&self, id: Uuid, body: &UpdateCategory) -> Call<DefaultResponse> {
        self.call(
            Endpoint::put("/v1/categories")
                .query("id", Some(id))
                .json(body),
        )
    }

    /// Delete a category.
    ///
    /// `DELETE /v1/categories?id=...`
    #[must_use]
    pub fn delete_category(&self, id: Uuid) -> Call<DefaultResponse> {
        self.call(Endpoint::delete("/v1/categories").query("id", Some(id)))
    }
}
