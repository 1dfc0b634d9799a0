//! Catalog error model.

use thiserror::Error;

/// Result type used across the catalog crates.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The deterministic engine operations are total over well-typed input, so
/// the variants here only cover the remote-fetch boundary and strict
/// criteria validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CatalogError {
    /// The remote product listing could not be retrieved (transport failure
    /// or a non-success HTTP status). Recoverable; never retried
    /// automatically.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A criteria value failed validation (e.g. a negative price bound).
    #[error("invalid criterion: {0}")]
    InvalidCriterion(String),

    /// A product identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl CatalogError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::CatalogUnavailable(msg.into())
    }

    pub fn invalid_criterion(msg: impl Into<String>) -> Self {
        Self::InvalidCriterion(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
