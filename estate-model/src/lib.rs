//! Listing data model shared across the estate crates.
#![allow(missing_docs)]

pub mod error;
pub mod filter_types;
pub mod ids;
pub mod listing;
pub mod prelude;
pub mod price;

pub use error::{ModelError, Result as ModelResult};
pub use filter_types::{PropertyType, RoomFilter, SortOrder};
pub use ids::ListingId;
pub use listing::{Listing, ListingRecord};
pub use price::{PriceAmount, price_digits};
