//! Ordering of filtered listings.
//!
//! `Relevance` keeps catalog load order. Price orders break ties on
//! ascending listing id so repeated queries never reshuffle equal prices.

pub mod simple;

#[cfg(test)]
mod tests;

pub use simple::{compare_listings, is_sorted, sort_listing_slice};
