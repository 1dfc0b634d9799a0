//! Paginated views over the filtered catalog.

use crate::product::Product;

/// One page of the filtered view, with enough bounds information for a
/// caller to render pagination controls without recomputing anything.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// Products on this page, in filtered/sorted order.
    pub products: Vec<&'a Product>,
    /// The 1-based page number actually served (clamped).
    pub number: usize,
    pub total_pages: usize,
    /// Products passing the current criteria, across all pages.
    pub filtered_count: usize,
    /// Snapshot size, for "N of M products" badges.
    pub total_count: usize,
}

impl Page<'_> {
    pub fn has_prev(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    /// True when no product passes the current criteria (the storefront's
    /// "empty state").
    pub fn is_empty(&self) -> bool {
        self.filtered_count == 0
    }
}

/// One slot in a pagination control row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A direct link; `current` marks the page being viewed.
    Number { page: usize, current: bool },
    /// An elided run of pages, rendered as an ellipsis.
    Gap,
}

/// Compute the pagination control row for `current` of `total_pages`.
///
/// First and last pages are always shown, plus a window of two pages around
/// the current one; each elided run collapses into a single [`PageLink::Gap`].
/// A single page (or none) yields no controls at all.
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let current = current.clamp(1, total_pages);
    let mut links = Vec::new();
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || page.abs_diff(current) <= 2 {
            links.push(PageLink::Number {
                page,
                current: page == current,
            });
        } else if page.abs_diff(current) == 3 {
            links.push(PageLink::Gap);
        }
    }
    links
}
