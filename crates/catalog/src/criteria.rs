//! Filter criteria: the current set of user-selected constraints.

use aromes_core::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Sort order applied after filtering.
///
/// Serialized with the storefront's sort-select values (`"price-asc"`,
/// `"popularity"`, ...).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Case-insensitive lexicographic on name. The default.
    #[default]
    Name,
    /// Ascending numeric on price.
    PriceAsc,
    /// Descending numeric on price.
    PriceDesc,
    /// Descending numeric on rating.
    Rating,
    /// Descending numeric on review count.
    Popularity,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Rating => "rating",
            SortOrder::Popularity => "popularity",
        }
    }
}

/// One settable criteria field.
///
/// A closed enum, so an unknown field is a compile-time error rather than a
/// silent no-op. String fields clear with an empty value; price bounds clear
/// with `None`.
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    Category(String),
    Brand(String),
    Size(String),
    Format(String),
    PriceMin(Option<f64>),
    PriceMax(Option<f64>),
    Search(String),
    Sort(SortOrder),
}

/// Mutable filter/sort state, one instance per engine.
///
/// Empty strings mean "no constraint"; an absent price bound means an
/// effective 0 (min) or +∞ (max).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub category: String,
    pub brand: String,
    pub size: String,
    pub format: String,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub search: String,
    pub sort: SortOrder,
}

impl FilterCriteria {
    /// Update exactly one field; every other field is untouched.
    ///
    /// Price bounds are validated strictly here: a negative or non-finite
    /// bound is rejected with [`CatalogError::InvalidCriterion`]. Callers
    /// wiring raw text inputs and wanting the storefront's lenient historical
    /// behavior go through [`parse_price_input`] first.
    pub fn set(&mut self, criterion: Criterion) -> CatalogResult<()> {
        match criterion {
            Criterion::Category(v) => self.category = v,
            Criterion::Brand(v) => self.brand = v,
            Criterion::Size(v) => self.size = v,
            Criterion::Format(v) => self.format = v,
            Criterion::PriceMin(v) => self.price_min = validated_bound("priceMin", v)?,
            Criterion::PriceMax(v) => self.price_max = validated_bound("priceMax", v)?,
            Criterion::Search(v) => self.search = v,
            Criterion::Sort(v) => self.sort = v,
        }
        Ok(())
    }

    pub fn effective_price_min(&self) -> f64 {
        self.price_min.unwrap_or(0.0)
    }

    pub fn effective_price_max(&self) -> f64 {
        self.price_max.unwrap_or(f64::INFINITY)
    }

    /// Conjunction of the active predicate groups.
    ///
    /// Category/brand/size/format are exact, case-sensitive matches (the
    /// storefront's filter values come from its own data, so case always
    /// agrees). Search is a case-insensitive substring over name or brand.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.is_empty() && product.category != self.category {
            return false;
        }
        if !self.brand.is_empty() && product.brand != self.brand {
            return false;
        }
        if !self.size.is_empty() && product.size != self.size {
            return false;
        }
        if !self.format.is_empty() && product.format != self.format {
            return false;
        }
        if product.price < self.effective_price_min() || product.price > self.effective_price_max()
        {
            return false;
        }
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let name_match = product.name.to_lowercase().contains(&needle);
            let brand_match = product.brand.to_lowercase().contains(&needle);
            if !name_match && !brand_match {
                return false;
            }
        }
        true
    }

    /// Active (non-default) constraints as wire-name/value pairs, in a
    /// stable order.
    ///
    /// Enough for a UI to render the filter-pill row, and exactly the query
    /// parameters a listing-endpoint request needs.
    pub fn active(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if !self.category.is_empty() {
            pairs.push(("category", self.category.clone()));
        }
        if !self.brand.is_empty() {
            pairs.push(("brand", self.brand.clone()));
        }
        if !self.size.is_empty() {
            pairs.push(("size", self.size.clone()));
        }
        if !self.format.is_empty() {
            pairs.push(("format", self.format.clone()));
        }
        if let Some(min) = self.price_min {
            pairs.push(("priceMin", min.to_string()));
        }
        if let Some(max) = self.price_max {
            pairs.push(("priceMax", max.to_string()));
        }
        if !self.search.is_empty() {
            pairs.push(("search", self.search.clone()));
        }
        if self.sort != SortOrder::Name {
            pairs.push(("sort", self.sort.as_str().to_string()));
        }
        pairs
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

fn validated_bound(field: &str, value: Option<f64>) -> CatalogResult<Option<f64>> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(CatalogError::invalid_criterion(format!(
            "{field} must be a non-negative number, got {v}"
        ))),
        other => Ok(other),
    }
}

/// Lenient price-input parsing for raw text fields.
///
/// Text that does not parse as a positive finite number means "no
/// constraint", matching the storefront's historical `parseFloat(x) || 0`
/// treatment (where a zero or malformed bound collapses to no bound).
pub fn parse_price_input(input: &str) -> Option<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() && v > 0.0 => Some(v),
        _ => None,
    }
}
