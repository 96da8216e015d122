//! Landing-page aggregate bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A category enriched with a display image for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeCategory {
    /// Category identifier.
    pub id: Uuid,
    /// Display title.
    pub title: String,
    /// Category type.
    #[serde(rename = "type")]
    pub kind: String,
    /// Absolute image URL.
    pub image: String,
}

/// Response of `GET /v1/home/category`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetCategories {
    /// Categories with images.
    pub data: Vec<HomeCategory>,
}

/// A best-selling product teaser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestSeller {
    /// Product identifier.
    pub id: Uuid,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: i64,
    /// Absolute image URL.
    pub image: String,
}

/// Response of `GET /v1/home/best-seller`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetBestSeller {
    /// Best sellers, ordered by units sold.
    pub data: Vec<BestSeller>,
}
