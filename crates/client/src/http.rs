//! HTTP consumer of the product-listing endpoint.

use async_trait::async_trait;
use serde::Deserialize;

use aromes_catalog::{FilterCriteria, Product};
use aromes_core::{CatalogError, CatalogResult};

use crate::source::CatalogSource;

/// Wire shape of the listing response. A missing `products` list means an
/// empty catalog, not an error.
#[derive(Debug, Deserialize)]
struct ProductListBody {
    #[serde(default)]
    products: Vec<Product>,
}

/// `reqwest`-backed [`CatalogSource`] for `GET {base_url}/api/products`.
///
/// Active criteria become query parameters (all optional on the wire). Any
/// transport error or non-success status maps to
/// [`CatalogError::CatalogUnavailable`]; the body of a failed response is
/// never parsed for partial data.
///
/// One outstanding request at a time: `fetch` takes `&mut self`, which rules
/// out concurrent duplicates at compile time. [`is_busy`](Self::is_busy) is
/// an advisory flag for callers polling across await points; a fetch future
/// discarded mid-flight leaves it set until the next call.
///
/// No retries and no timeout live here. A caller that wants a timeout
/// configures it on the `reqwest::Client` passed to
/// [`with_client`](Self::with_client).
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    in_flight: bool,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http,
            base_url,
            in_flight: false,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    async fn get_products(&self, criteria: &FilterCriteria) -> CatalogResult<Vec<Product>> {
        let url = format!("{}/api/products", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&criteria.active())
            .send()
            .await
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::unavailable(format!(
                "{url} returned {status}"
            )));
        }

        let body: ProductListBody = response
            .json()
            .await
            .map_err(|e| CatalogError::unavailable(e.to_string()))?;

        tracing::debug!(count = body.products.len(), "catalog fetched");
        Ok(body.products)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    async fn fetch(&mut self, criteria: &FilterCriteria) -> CatalogResult<Vec<Product>> {
        self.in_flight = true;
        let result = self.get_products(criteria).await;
        self.in_flight = false;

        if let Err(err) = &result {
            tracing::warn!(error = %err, "catalog fetch failed");
        }
        result
    }
}
