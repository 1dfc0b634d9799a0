//! Remote catalog access for the Quartier d'Arômes storefront.
//!
//! The filter engine itself never does IO; when a page starts without a
//! local product snapshot, the snapshot comes from the listing endpoint via
//! this crate. One [`CatalogSource`] seam, one `reqwest` implementation.

pub mod http;
pub mod source;

pub use http::CatalogClient;
pub use source::CatalogSource;

use aromes_catalog::{FilterCriteria, FilterEngine, Product};
use aromes_core::CatalogResult;

/// Build a [`FilterEngine`] from a page-local snapshot, falling back to a
/// remote fetch only when the snapshot is empty.
///
/// The fetch uses default criteria (the whole catalog); filtering then
/// happens locally. A fetch failure surfaces as
/// [`CatalogUnavailable`](aromes_core::CatalogError::CatalogUnavailable) and
/// is the caller's to handle — no retry happens here.
pub async fn engine_from_snapshot<S: CatalogSource>(
    source: &mut S,
    snapshot: Vec<Product>,
    page_size: usize,
) -> CatalogResult<FilterEngine> {
    let products = if snapshot.is_empty() {
        source.fetch(&FilterCriteria::default()).await?
    } else {
        snapshot
    };
    Ok(FilterEngine::new(products, page_size))
}
