//! Seam between the engine's callers and whatever serves the catalog.

use async_trait::async_trait;

use aromes_catalog::{FilterCriteria, Product};
use aromes_core::CatalogResult;

/// Anything that can produce a product snapshot for the given criteria.
///
/// Implementations must not retry internally: a failure surfaces as
/// [`CatalogUnavailable`](aromes_core::CatalogError::CatalogUnavailable) and
/// retry policy, if any, belongs to the caller. `fetch` takes `&mut self` so
/// a single source cannot have two requests in flight at once.
#[async_trait]
pub trait CatalogSource {
    async fn fetch(&mut self, criteria: &FilterCriteria) -> CatalogResult<Vec<Product>>;
}
