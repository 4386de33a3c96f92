//! Compose [`FilterCriteria`] into a single matching test over a listing.
//!
//! A listing matches only when every clause holds:
//!
//! 1. text: the query is empty, or it occurs in the case-folded title or
//!    location;
//! 2. price: `min_price <= price_amount <= max_price`;
//! 3. rooms: the room selector accepts the listing's bedroom count;
//! 4. type: unconstrained, or the listing carries exactly that type.

use estate_model::{Listing, PropertyType, RoomFilter};

use super::filtering::{fold_case, normalize_text};
use super::types::{FilterCriteria, ScalarRange};

/// Conjunction of the per-field clauses built from one set of criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPredicate {
    text: String,
    price: ScalarRange<u64>,
    rooms: RoomFilter,
    property_type: Option<PropertyType>,
}

impl ListingPredicate {
    pub fn matches(&self, listing: &Listing) -> bool {
        self.matches_text(listing)
            && self.matches_price(listing)
            && self.matches_rooms(listing)
            && self.matches_type(listing)
    }

    pub fn matches_text(&self, listing: &Listing) -> bool {
        self.text.is_empty()
            || fold_case(&listing.title).contains(&self.text)
            || fold_case(&listing.location).contains(&self.text)
    }

    pub fn matches_price(&self, listing: &Listing) -> bool {
        self.price.contains(&listing.price())
    }

    pub fn matches_rooms(&self, listing: &Listing) -> bool {
        self.rooms.accepts(listing.rooms)
    }

    pub fn matches_type(&self, listing: &Listing) -> bool {
        match self.property_type {
            None => true,
            Some(wanted) => listing.property_type == Some(wanted),
        }
    }

    /// Borrow as a plain closure for iterator adapters.
    pub fn as_fn(&self) -> impl Fn(&Listing) -> bool + '_ {
        move |listing| self.matches(listing)
    }
}

/// Stateless builder; identical criteria always yield identical predicates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PredicateBuilder;

impl PredicateBuilder {
    pub fn build(criteria: &FilterCriteria) -> ListingPredicate {
        ListingPredicate {
            // Criteria assembled by hand may skip the normalizer.
            text: normalize_text(&criteria.text_query),
            price: criteria.price_range(),
            rooms: criteria.room_filter,
            property_type: criteria.type_filter,
        }
    }
}
