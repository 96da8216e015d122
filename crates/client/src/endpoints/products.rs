//! Product catalogue endpoints.

use thriftwear_core::{GetDetailProduct, GetProducts, ProductListParams};
use uuid::Uuid;

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Browse the catalogue with optional filters, sort, and pagination.
    ///
    /// `GET /v1/products`
    #[must_use]
    pub fn get_products(&self, params: &ProductListParams) -> Call<GetProducts> {
        self.call(
            Endpoint::get("/v1/products")
                .query("page", params.page)
                .query("page_size", params.page_size)
                .query("sort_by", params.sort_by.as_deref())
                .query("category", params.category)
                .query("condition", params.condition.as_deref())
                .query("product_name", params.product_name.as_deref()),
        )
    }

    /// Fetch one product's full listing.
    ///
    /// `GET /v1/products/{id}`
    #[must_use]
    pub fn get_detail_product(&self, id: Uuid) -> Call<GetDetailProduct> {
        self.call(Endpoint::get("/v1/products/{id}").path_param("id", id))
    }
}
