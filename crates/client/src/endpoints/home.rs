//! Landing-page aggregate endpoints.

use thriftwear_core::{GetBestSeller, GetCategories};

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Categories with display images for the landing page.
    ///
    /// `GET /v1/home/category`
    #[must_use]
    pub fn get_category_with_image(&self) -> Call<GetCategories> {
        self.call(Endpoint::get("/v1/home/category"))
    }

    /// Best-selling products for the landing page.
    ///
    /// `GET /v1/home/best-seller`
    #[must_use]
    pub fn get_best_seller(&self) -> Call<GetBestSeller> {
        self.call(Endpoint::get("/v1/home/best-seller"))
    }
}
