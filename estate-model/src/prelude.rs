//! Flat snapshot of the model surface for presentation layers.

pub use super::filter_types::{PropertyType, RoomFilter, SortOrder};
pub use super::ids::ListingId;
pub use super::listing::{Listing, ListingRecord};
pub use super::price::{PriceAmount, price_digits};
