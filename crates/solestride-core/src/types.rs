//! Core types for the Solestride storefront

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single shoe as displayed on the listing page.
///
/// This is plain display data: the UI clones it into card components and
/// never mutates it. Field validity (e.g. `sale_price < price`) is the
/// responsibility of whoever produces the catalog, not of the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shoe {
    /// URL-safe identifier used to build the detail-page route.
    /// Opaque to the card; never interpreted.
    pub slug: String,
    /// Display name shown on the card
    pub name: String,
    /// Image reference (asset path or URL), passed through untouched
    pub image_src: String,
    /// Base price, always present
    pub price: f64,
    /// Active discount price. Presence alone marks the shoe as on sale;
    /// zero is a valid sale price.
    #[serde(default)]
    pub sale_price: Option<f64>,
    /// When the shoe was released, compared against a one-month window
    pub release_date: DateTime<Utc>,
    /// Number of colorways available
    pub num_of_colors: u32,
}

impl Shoe {
    /// Route path to this shoe's detail page.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.slug)
    }
}
