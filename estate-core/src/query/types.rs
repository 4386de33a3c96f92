use estate_config::{DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR};
use estate_model::{Listing, PropertyType, RoomFilter, SortOrder};
use serde::{Deserialize, Serialize};

/// Inclusive `[min, max]` bounds. `min > max` is a legal, empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScalarRange<T> {
    pub min: T,
    pub max: T,
}

impl<T> ScalarRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: PartialOrd> ScalarRange<T> {
    pub fn contains(&self, value: &T) -> bool {
        *value >= self.min && *value <= self.max
    }

    pub fn is_empty(&self) -> bool {
        self.min > self.max
    }
}

/// Canonical filter and sort parameters for one query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Trimmed, case-folded search text. Empty matches everything.
    pub text_query: String,
    pub min_price: u64,
    pub max_price: u64,
    pub room_filter: RoomFilter,
    /// `None` leaves the property type unconstrained.
    pub type_filter: Option<PropertyType>,
    pub sort_order: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            text_query: String::new(),
            min_price: DEFAULT_PRICE_FLOOR,
            max_price: DEFAULT_PRICE_CEILING,
            room_filter: RoomFilter::Any,
            type_filter: None,
            sort_order: SortOrder::Relevance,
        }
    }
}

impl FilterCriteria {
    pub fn price_range(&self) -> ScalarRange<u64> {
        ScalarRange::new(self.min_price, self.max_price)
    }
}

/// One page of query output, re-emitted after every state transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPage {
    pub items: Vec<Listing>,
    /// Size of the whole filtered set, not just this page.
    pub total_count: usize,
    /// `0` exactly when `total_count` is `0`.
    pub total_pages: usize,
    /// 1-based page actually served after clamping.
    pub page: usize,
    pub page_size: usize,
}

impl QueryPage {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page links for the pager, `1..=total_pages`.
    pub fn page_numbers(&self) -> Vec<usize> {
        (1..=self.total_pages).collect()
    }

    /// Result-count caption shown above the grid.
    pub fn summary(&self) -> String {
        format!("Mostrando {} resultados", self.total_count)
    }
}
