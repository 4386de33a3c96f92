//! Filter, sort and paginate the catalog into a [`QueryPage`].

use std::num::NonZeroUsize;

use estate_model::Listing;
use tracing::debug;

use super::predicate::PredicateBuilder;
use super::sorting::sort_listing_slice;
use super::types::{FilterCriteria, QueryPage};
use crate::catalog::CatalogStore;
use crate::error::{EstateError, Result};

/// Validate a raw page size. Zero is a configuration error.
pub fn validate_page_size(raw: usize) -> Result<NonZeroUsize> {
    NonZeroUsize::new(raw).ok_or_else(|| {
        EstateError::InvalidConfiguration(
            "page size must be greater than zero".to_string(),
        )
    })
}

/// Requested 1-based page and a validated page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub page_size: NonZeroUsize,
}

/// Clamped page plus the slice bounds it covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub start: usize,
    pub end: usize,
}

impl PageRequest {
    pub fn new(page: usize, page_size: usize) -> Result<Self> {
        Ok(Self {
            page,
            page_size: validate_page_size(page_size)?,
        })
    }

    /// Clamp the page into `[1, max(total_pages, 1)]` and compute the slice
    /// `[(page - 1) * size, page * size)` capped at `total_count`.
    pub fn resolve(&self, total_count: usize) -> PageWindow {
        let size = self.page_size.get();
        let total_pages = total_count.div_ceil(size);
        let page = self.page.clamp(1, total_pages.max(1));
        let start = ((page - 1) * size).min(total_count);
        let end = start.saturating_add(size).min(total_count);
        PageWindow {
            page,
            total_pages,
            start,
            end,
        }
    }
}

/// Stateless query executor over a [`CatalogStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryEngine;

impl QueryEngine {
    /// See [`execute`].
    pub fn execute(
        catalog: &CatalogStore,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<QueryPage> {
        execute(catalog, criteria, page, page_size)
    }

    /// Run a query whose page size is already validated. Infallible.
    pub fn run(
        catalog: &CatalogStore,
        criteria: &FilterCriteria,
        request: PageRequest,
    ) -> QueryPage {
        let predicate = PredicateBuilder::build(criteria);

        let mut matched: Vec<&Listing> = catalog
            .iter()
            .filter(|listing| predicate.matches(listing))
            .collect();
        sort_listing_slice(&mut matched, criteria.sort_order);

        let total_count = matched.len();
        let window = request.resolve(total_count);
        let items: Vec<Listing> = matched[window.start..window.end]
            .iter()
            .map(|listing| (*listing).clone())
            .collect();

        debug!(
            total_count,
            page = window.page,
            total_pages = window.total_pages,
            requested_page = request.page,
            sort = ?criteria.sort_order,
            "catalog query executed"
        );

        QueryPage {
            items,
            total_count,
            total_pages: window.total_pages,
            page: window.page,
            page_size: request.page_size.get(),
        }
    }
}

/// Filter `catalog` by `criteria`, order by `criteria.sort_order`, and
/// return the requested page. Out-of-range pages are clamped; the only
/// error is a zero `page_size`.
pub fn execute(
    catalog: &CatalogStore,
    criteria: &FilterCriteria,
    page: usize,
    page_size: usize,
) -> Result<QueryPage> {
    let request = PageRequest::new(page, page_size)?;
    Ok(QueryEngine::run(catalog, criteria, request))
}

impl CatalogStore {
    /// Shorthand for [`execute`] against this catalog.
    pub fn query(
        &self,
        criteria: &FilterCriteria,
        page: usize,
        page_size: usize,
    ) -> Result<QueryPage> {
        execute(self, criteria, page, page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: usize, size: usize) -> PageRequest {
        PageRequest::new(page, size).unwrap()
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(EstateError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn window_covers_partial_last_page() {
        let window = request(3, 2).resolve(5);
        assert_eq!(
            window,
            PageWindow {
                page: 3,
                total_pages: 3,
                start: 4,
                end: 5
            }
        );
    }

    #[test]
    fn window_clamps_out_of_range_pages() {
        assert_eq!(request(0, 2).resolve(4).page, 1);
        assert_eq!(request(9, 2).resolve(4).page, 2);
        assert_eq!(request(usize::MAX, 3).resolve(4).page, 2);
    }

    #[test]
    fn empty_result_has_zero_pages_and_page_one() {
        let window = request(4, 2).resolve(0);
        assert_eq!(window.total_pages, 0);
        assert_eq!(window.page, 1);
        assert_eq!((window.start, window.end), (0, 0));
    }

    #[test]
    fn total_pages_is_ceiling_division() {
        for size in 1..=5 {
            for count in 0..=12 {
                let expected = (count + size - 1) / size;
                assert_eq!(request(1, size).resolve(count).total_pages, expected);
            }
        }
    }
}
