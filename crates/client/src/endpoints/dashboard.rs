//! Admin dashboard endpoints.

use thriftwear_core::{GetDashboard, GetSales};

use crate::call::Call;
use crate::client::ApiClient;
use crate::request::Endpoint;

impl ApiClient {
    /// Headline totals for the admin dashboard.
    ///
    /// `GET /v1/admin/dashboard`
    #[must_use]
    pub fn get_dashboard(&self) -> Call<GetDashboard> {
        self.call(Endpoint::get("/v1/admin/dashboard"))
    }

    /// Monthly sales buckets for the dashboard chart.
    ///
    /// `GET /v1/admin/sales`
    #[must_use]
    pub fn get_sales(&self) -> Call<GetSales> {
        self.call(Endpoint::get("/v1/admin/sales"))
    }
}
