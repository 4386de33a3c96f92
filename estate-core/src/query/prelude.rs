//! Intentional query surface consumed by presentation layers.

pub use super::builder::FilterCriteriaBuilder;
pub use super::engine::{QueryEngine, execute};
pub use super::filtering::{CriteriaNormalizer, PriceInput, RawCriteria};
pub use super::sorting::compare_listings;
pub use super::types::{FilterCriteria, QueryPage, ScalarRange};
pub use estate_model::{PropertyType, RoomFilter, SortOrder};
