//! Client-side catalog filtering for the Quartier d'Arômes storefront.
//!
//! This crate contains the deterministic core only: an immutable product
//! snapshot, mutable filter criteria, and derived (filtered, sorted,
//! paginated) views over the snapshot. No IO, no HTTP, no rendering —
//! fetching the snapshot and drawing the result are collaborator concerns.

pub mod criteria;
pub mod engine;
pub mod page;
pub mod product;

pub use criteria::{Criterion, FilterCriteria, SortOrder, parse_price_input};
pub use engine::{DEFAULT_PAGE_SIZE, FilterEngine};
pub use page::{Page, PageLink, page_links};
pub use product::Product;
