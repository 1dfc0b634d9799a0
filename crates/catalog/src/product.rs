use aromes_core::ProductId;
use serde::{Deserialize, Serialize};

/// Read-only product snapshot entity.
///
/// One record of the storefront catalog, as served by the listing endpoint
/// or lifted from an already-rendered page. The engine never mutates these;
/// filtered and sorted views are index lists over the snapshot, not copies.
///
/// `brand`, `category`, `size` and `format` may be empty (the feed omits
/// them for some products); `rating` and `review_count` default to zero when
/// absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub brand: String,
    /// Non-negative, currency-agnostic unit (the storefront prices in a
    /// fixed local currency).
    pub price: f64,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub format: String,
    /// Average rating in `[0, 5]`; zero when unrated.
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
}
