//! # Estate Core
//!
//! Client-side search, filter, sort and pagination engine for a catalog of
//! real-estate listings.
//!
//! ## Overview
//!
//! The presentation layer feeds user input into a [`ViewStateController`],
//! which normalizes it into [`FilterCriteria`], composes a
//! [`ListingPredicate`], and runs the query engine against an immutable
//! [`CatalogStore`]. Every transition yields a fresh [`QueryPage`].
//!
//! ## Architecture
//!
//! - [`catalog`]: read-only listing store and record loading
//! - [`query`]: criteria normalization, predicate building, sorting and
//!   pagination
//! - [`view_state`]: session state and its transitions
//! - [`error`]: error types
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use estate_core::{CatalogStore, SortOrder, ViewStateController};
//!
//! let catalog = Arc::new(CatalogStore::sample());
//! let mut view = ViewStateController::new(catalog, 2)?;
//!
//! let page = view.set_sort_order(SortOrder::PriceDesc);
//! let prices: Vec<u64> = page.items.iter().map(|l| l.price()).collect();
//! assert_eq!(prices, vec![1_350_000, 850_000]);
//!
//! let page = view.set_max_price("900000");
//! assert_eq!(page.total_count, 3);
//! # Ok::<(), estate_core::EstateError>(())
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Read-only listing store
pub mod catalog;

/// Error types
pub mod error;

/// Criteria normalization, predicates, sorting and pagination
pub mod query;

/// Session view state and transitions
pub mod view_state;

pub use catalog::CatalogStore;
pub use error::{EstateError, Result};
pub use estate_config::EngineConfig;
pub use estate_model::{
    Listing, ListingId, ListingRecord, PriceAmount, PropertyType, RoomFilter,
    SortOrder,
};
pub use query::{
    CriteriaNormalizer, FilterCriteria, FilterCriteriaBuilder, ListingPredicate,
    PredicateBuilder, PriceInput, QueryEngine, QueryPage, RawCriteria, execute,
};
pub use view_state::{ViewMessage, ViewState, ViewStateController};
