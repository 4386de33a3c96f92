use estate_model::{Listing, SortOrder};
use std::borrow::Borrow;
use std::cmp::Ordering;

/// Compare two listings under `order`. `Relevance` treats every pair as
/// equal, leaving a stable sort to keep the original order.
pub fn compare_listings(a: &Listing, b: &Listing, order: SortOrder) -> Ordering {
    let by_price = match order {
        SortOrder::Relevance => return Ordering::Equal,
        SortOrder::PriceAsc => a.price_amount.cmp(&b.price_amount),
        SortOrder::PriceDesc => b.price_amount.cmp(&a.price_amount),
    };
    by_price.then_with(|| a.id.cmp(&b.id))
}

/// Stable in-place sort. Works on owned listings or references.
pub fn sort_listing_slice<L: Borrow<Listing>>(items: &mut [L], order: SortOrder) {
    if order == SortOrder::Relevance {
        return;
    }
    items.sort_by(|a, b| {
        compare_listings(
            Borrow::<Listing>::borrow(a),
            Borrow::<Listing>::borrow(b),
            order,
        )
    });
}

/// Whether `items` already respects `order`.
pub fn is_sorted<L: Borrow<Listing>>(items: &[L], order: SortOrder) -> bool {
    items.windows(2).all(|pair| {
        compare_listings(
            Borrow::<Listing>::borrow(&pair[0]),
            Borrow::<Listing>::borrow(&pair[1]),
            order,
        ) != Ordering::Greater
    })
}
