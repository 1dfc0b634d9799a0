//! The deterministic filter/sort/paginate core.

use std::cmp::Ordering;

use aromes_core::CatalogResult;

use crate::criteria::{Criterion, FilterCriteria, SortOrder};
use crate::page::Page;
use crate::product::Product;

/// Products per page in the storefront grid.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Client-side filtering, sorting and pagination over an immutable product
/// snapshot.
///
/// The engine is synchronous and single-owner: construct one at page init
/// and hand it by reference to whatever layer renders the result. That layer
/// calls [`set`](FilterEngine::set) /
/// [`apply_filters`](FilterEngine::apply_filters) / [`page`](FilterEngine::page)
/// and draws what comes back; it never reads engine internals.
///
/// Criteria edits alone do not change the visible view — recomputation is
/// explicit via `apply_filters`, so a batch of edits (say, both price
/// bounds) costs one pass.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    products: Vec<Product>,
    criteria: FilterCriteria,
    /// Indices into `products`: the filtered view, in sorted order.
    filtered: Vec<usize>,
    current_page: usize,
    page_size: usize,
}

impl FilterEngine {
    /// Build an engine over an already-fetched snapshot (possibly empty).
    ///
    /// The initial view is the full snapshot under default criteria, i.e.
    /// sorted by name. A zero `page_size` is bumped to 1.
    pub fn new(products: Vec<Product>, page_size: usize) -> Self {
        let mut engine = Self {
            products,
            criteria: FilterCriteria::default(),
            filtered: Vec::new(),
            current_page: 1,
            page_size: page_size.max(1),
        };
        engine.apply_filters();
        engine
    }

    pub fn with_default_page_size(products: Vec<Product>) -> Self {
        Self::new(products, DEFAULT_PAGE_SIZE)
    }

    /// Update a single criteria field without recomputing the view.
    pub fn set(&mut self, criterion: Criterion) -> CatalogResult<()> {
        self.criteria.set(criterion)
    }

    /// Recompute the filtered view from (snapshot, criteria) and reset to
    /// page 1.
    ///
    /// Pure in its inputs: same snapshot and criteria always yield the same
    /// view, and applying twice changes nothing further. An empty result is
    /// a valid state, not an error.
    pub fn apply_filters(&mut self) {
        self.filtered = self
            .products
            .iter()
            .enumerate()
            .filter(|(_, product)| self.criteria.matches(product))
            .map(|(index, _)| index)
            .collect();
        self.sort_filtered();
        self.current_page = 1;

        tracing::debug!(
            filtered = self.filtered.len(),
            total = self.products.len(),
            sort = self.criteria.sort.as_str(),
            "filters applied"
        );
    }

    /// Serve a page of the filtered view.
    ///
    /// Any integer is accepted; out-of-range numbers are clamped into
    /// `[1, total_pages]`, never rejected. The clamped number becomes the
    /// engine's current page.
    pub fn page(&mut self, number: i64) -> Page<'_> {
        let total_pages = self.total_pages();
        let clamped = number.clamp(1, total_pages as i64) as usize;
        self.current_page = clamped;

        let start = (clamped - 1) * self.page_size;
        let products = self
            .filtered
            .iter()
            .skip(start)
            .take(self.page_size)
            .map(|&index| &self.products[index])
            .collect();

        Page {
            products,
            number: clamped,
            total_pages,
            filtered_count: self.filtered.len(),
            total_count: self.products.len(),
        }
    }

    /// Restore default criteria, recompute, back to page 1.
    pub fn reset(&mut self) {
        self.criteria = FilterCriteria::default();
        self.apply_filters();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// The full snapshot, in feed order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The filtered view in sorted order, for callers rendering without
    /// pagination.
    pub fn filtered(&self) -> impl Iterator<Item = &Product> {
        self.filtered.iter().map(|&index| &self.products[index])
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn total_count(&self) -> usize {
        self.products.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        self.filtered.len().div_ceil(self.page_size).max(1)
    }

    fn sort_filtered(&mut self) {
        let products = &self.products;
        // Vec::sort_by is stable: equal keys keep snapshot-relative order.
        match self.criteria.sort {
            SortOrder::Name => self
                .filtered
                .sort_by(|&a, &b| compare_names(&products[a].name, &products[b].name)),
            SortOrder::PriceAsc => self
                .filtered
                .sort_by(|&a, &b| products[a].price.total_cmp(&products[b].price)),
            SortOrder::PriceDesc => self
                .filtered
                .sort_by(|&a, &b| products[b].price.total_cmp(&products[a].price)),
            SortOrder::Rating => self
                .filtered
                .sort_by(|&a, &b| products[b].rating.total_cmp(&products[a].rating)),
            SortOrder::Popularity => self
                .filtered
                .sort_by(|&a, &b| products[b].review_count.cmp(&products[a].review_count)),
        }
    }
}

/// Case-insensitive name ordering.
///
/// Stands in for the browser's locale-aware comparison; for a catalog of
/// mostly-ASCII names with the odd accented character, case folding is the
/// part that matters.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
