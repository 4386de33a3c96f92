use super::{compare_listings, is_sorted, sort_listing_slice};
use crate::catalog::CatalogStore;
use estate_model::{Listing, ListingId, PriceAmount, SortOrder};
use std::cmp::Ordering;

fn ids(items: &[Listing]) -> Vec<u64> {
    items.iter().map(|listing| listing.id.value()).collect()
}

fn with_tie() -> Vec<Listing> {
    let mut listings = CatalogStore::sample().all().to_vec();
    // Listing 4 now costs the same as listing 1.
    listings[3].price_amount = PriceAmount::new(420_000);
    listings
}

#[test]
fn relevance_keeps_catalog_order() {
    let mut listings = CatalogStore::sample().all().to_vec();
    sort_listing_slice(&mut listings, SortOrder::Relevance);
    assert_eq!(ids(&listings), vec![1, 2, 3, 4]);
}

#[test]
fn price_ascending() {
    let mut listings = CatalogStore::sample().all().to_vec();
    sort_listing_slice(&mut listings, SortOrder::PriceAsc);
    assert_eq!(ids(&listings), vec![4, 1, 2, 3]);
    assert!(is_sorted(&listings, SortOrder::PriceAsc));
}

#[test]
fn price_descending() {
    let mut listings = CatalogStore::sample().all().to_vec();
    sort_listing_slice(&mut listings, SortOrder::PriceDesc);
    assert_eq!(ids(&listings), vec![3, 2, 1, 4]);
    assert!(!is_sorted(&listings, SortOrder::PriceAsc));
}

#[test]
fn equal_prices_break_ties_by_ascending_id() {
    let mut asc = with_tie();
    sort_listing_slice(&mut asc, SortOrder::PriceAsc);
    assert_eq!(ids(&asc), vec![1, 4, 2, 3]);

    let mut desc = with_tie();
    sort_listing_slice(&mut desc, SortOrder::PriceDesc);
    assert_eq!(ids(&desc), vec![3, 2, 1, 4]);
}

#[test]
fn tie_break_does_not_depend_on_input_order() {
    let mut forward = with_tie();
    let mut backward = with_tie();
    backward.reverse();

    for order in [SortOrder::PriceAsc, SortOrder::PriceDesc] {
        sort_listing_slice(&mut forward, order);
        sort_listing_slice(&mut backward, order);
        assert_eq!(ids(&forward), ids(&backward), "{order:?}");
    }
}

#[test]
fn sorts_borrowed_listings() {
    let catalog = CatalogStore::sample();
    let mut refs: Vec<&Listing> = catalog.iter().collect();
    sort_listing_slice(&mut refs, SortOrder::PriceAsc);
    let order: Vec<ListingId> = refs.iter().map(|listing| listing.id).collect();
    assert_eq!(
        order,
        vec![ListingId(4), ListingId(1), ListingId(2), ListingId(3)]
    );
}

#[test]
fn relevance_comparison_is_always_equal() {
    let catalog = CatalogStore::sample();
    let all = catalog.all();
    assert_eq!(
        compare_listings(&all[0], &all[2], SortOrder::Relevance),
        Ordering::Equal
    );
}
