//! Read-only store holding the session's listings in load order.

use std::collections::HashSet;

use estate_model::{Listing, ListingId, ListingRecord, price_digits};
use tracing::{debug, warn};

use crate::error::{EstateError, Result};

/// Immutable collection of listings. Populated once, never mutated; share
/// it behind an `Arc` when several controllers read the same catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStore {
    listings: Vec<Listing>,
}

impl CatalogStore {
    /// Build a store from already-normalized listings. Ids must be unique.
    pub fn from_listings(listings: Vec<Listing>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id) {
                return Err(EstateError::DuplicateListing(listing.id));
            }
        }

        debug!(listings = listings.len(), "catalog loaded");
        Ok(Self { listings })
    }

    /// Build a store from provider records, deriving each price amount once.
    pub fn from_records(records: Vec<ListingRecord>) -> Result<Self> {
        let listings = records
            .into_iter()
            .map(|record| {
                if price_digits(&record.price).is_none() {
                    warn!(
                        listing_id = %record.id,
                        price = %record.price,
                        "price has no digits; treating listing as zero-priced"
                    );
                }
                Listing::from_record(record)
            })
            .collect();
        Self::from_listings(listings)
    }

    /// Parse a JSON array of provider records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<ListingRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Every listing, in load order.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter()
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// The four-unit demo catalog shown by the storefront mockup.
    pub fn sample() -> Self {
        let record = |id: u64,
                      title: &str,
                      price: &str,
                      area: &str,
                      rooms: u32,
                      location: &str| ListingRecord {
            id: ListingId(id),
            title: title.to_string(),
            price: price.to_string(),
            area: area.to_string(),
            rooms,
            image: format!("https://picsum.photos/seed/{id}/800/600"),
            location: location.to_string(),
            property_type: None,
        };

        let listings = [
            record(
                1,
                "Departamento moderno en Miraflores",
                "S/ 420,000",
                "85 m²",
                3,
                "Miraflores, Lima",
            ),
            record(
                2,
                "Casa familiar en Surco",
                "S/ 850,000",
                "220 m²",
                5,
                "Surco, Lima",
            ),
            record(
                3,
                "Penthouse con vista al mar",
                "S/ 1,350,000",
                "160 m²",
                4,
                "San Isidro, Lima",
            ),
            record(
                4,
                "Departamento económico cerca a transporte",
                "S/ 210,000",
                "48 m²",
                2,
                "Ate, Lima",
            ),
        ]
        .into_iter()
        .map(Listing::from_record)
        .collect();

        Self { listings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_keeps_load_order_and_prices() {
        let catalog = CatalogStore::sample();
        let prices: Vec<u64> = catalog.iter().map(Listing::price).collect();
        assert_eq!(prices, vec![420_000, 850_000, 1_350_000, 210_000]);
        assert_eq!(catalog.all()[1].location, "Surco, Lima");
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut listings = CatalogStore::sample().all().to_vec();
        listings[3].id = ListingId(1);

        let err = CatalogStore::from_listings(listings).unwrap_err();
        assert!(matches!(err, EstateError::DuplicateListing(ListingId(1))));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = CatalogStore::sample();
        assert_eq!(
            catalog.get(ListingId(3)).map(|l| l.title.as_str()),
            Some("Penthouse con vista al mar")
        );
        assert!(catalog.get(ListingId(99)).is_none());
    }

    #[test]
    fn json_records_load_with_lenient_prices() {
        let json = r#"[
            {"id": 10, "title": "Lote en Pachacámac", "price": "A consultar",
             "area": "500 m²", "rooms": 0, "image": "", "location": "Pachacámac, Lima",
             "type": "land"},
            {"id": 11, "title": "Dúplex", "price": "S/ 640,000",
             "area": "120 m²", "rooms": 3, "image": "", "location": "Jesús María, Lima"}
        ]"#;

        let catalog = CatalogStore::from_json_str(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.all()[0].price(), 0);
        assert_eq!(catalog.all()[1].price(), 640_000);
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let err = CatalogStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, EstateError::Serialization(_)));
    }
}
