use estate_model::{PropertyType, RoomFilter, SortOrder};

use super::filtering::normalize_text;
use super::types::FilterCriteria;

/// Fluent API for building filter criteria
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    criteria: FilterCriteria,
}

impl FilterCriteriaBuilder {
    /// Start from unnarrowed criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing criteria
    pub fn from_criteria(criteria: FilterCriteria) -> Self {
        Self { criteria }
    }

    // === Filter methods ===

    /// Search title and location; the text is trimmed and case-folded
    pub fn search(mut self, text: impl AsRef<str>) -> Self {
        self.criteria.text_query = normalize_text(text.as_ref());
        self
    }

    pub fn min_price(mut self, amount: u64) -> Self {
        self.criteria.min_price = amount;
        self
    }

    pub fn max_price(mut self, amount: u64) -> Self {
        self.criteria.max_price = amount;
        self
    }

    /// Set both price bounds (inclusive)
    pub fn price_range(self, min: u64, max: u64) -> Self {
        self.min_price(min).max_price(max)
    }

    pub fn rooms(mut self, rooms: RoomFilter) -> Self {
        self.criteria.room_filter = rooms;
        self
    }

    pub fn property_type(mut self, property_type: PropertyType) -> Self {
        self.criteria.type_filter = Some(property_type);
        self
    }

    /// Drop any type constraint
    pub fn any_type(mut self) -> Self {
        self.criteria.type_filter = None;
        self
    }

    // === Sort methods ===

    pub fn sort_by(mut self, order: SortOrder) -> Self {
        self.criteria.sort_order = order;
        self
    }

    /// Cheapest first
    pub fn cheapest_first(self) -> Self {
        self.sort_by(SortOrder::PriceAsc)
    }

    /// Most expensive first
    pub fn priciest_first(self) -> Self {
        self.sort_by(SortOrder::PriceDesc)
    }

    pub fn build(self) -> FilterCriteria {
        self.criteria
    }
}

// === Convenience constructors ===

impl FilterCriteria {
    /// Text search with every other filter left open
    pub fn search(text: impl AsRef<str>) -> Self {
        FilterCriteriaBuilder::new().search(text).build()
    }

    /// Price window with every other filter left open
    pub fn within_price(min: u64, max: u64) -> Self {
        FilterCriteriaBuilder::new().price_range(min, max).build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_every_field() {
        let criteria = FilterCriteriaBuilder::new()
            .search("  Surco ")
            .price_range(100, 200)
            .rooms(RoomFilter::Two)
            .property_type(PropertyType::House)
            .priciest_first()
            .build();

        assert_eq!(criteria.text_query, "surco");
        assert_eq!(criteria.min_price, 100);
        assert_eq!(criteria.max_price, 200);
        assert_eq!(criteria.room_filter, RoomFilter::Two);
        assert_eq!(criteria.type_filter, Some(PropertyType::House));
        assert_eq!(criteria.sort_order, SortOrder::PriceDesc);
    }

    #[test]
    fn convenience_constructors_leave_other_fields_default() {
        let criteria = FilterCriteria::within_price(300_000, 900_000);
        assert_eq!(criteria.text_query, "");
        assert_eq!(criteria.sort_order, SortOrder::Relevance);

        let cleared = FilterCriteriaBuilder::from_criteria(
            FilterCriteriaBuilder::new()
                .property_type(PropertyType::Land)
                .build(),
        )
        .any_type()
        .build();
        assert_eq!(cleared, FilterCriteria::default());
    }
}
