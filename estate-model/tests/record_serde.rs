#![cfg(feature = "serde")]

use estate_model::{Listing, ListingId, ListingRecord, PropertyType, SortOrder};

#[test]
fn record_reads_provider_field_names() {
    let raw = r#"{
        "id": 3,
        "title": "Penthouse con vista al mar",
        "price": "S/ 1,350,000",
        "area": "160 m²",
        "rooms": 4,
        "image": "https://picsum.photos/seed/3/800/600",
        "location": "San Isidro, Lima"
    }"#;

    let record: ListingRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.id, ListingId(3));
    assert_eq!(record.property_type, None);

    let listing = Listing::from_record(record);
    assert_eq!(listing.price(), 1_350_000);
}

#[test]
fn record_accepts_optional_type() {
    let raw = r#"{
        "id": 9, "title": "Lote", "price": "S/ 99,000", "area": "300 m²",
        "rooms": 0, "image": "", "location": "Lurín, Lima", "type": "land"
    }"#;

    let record: ListingRecord = serde_json::from_str(raw).unwrap();
    assert_eq!(record.property_type, Some(PropertyType::Land));
}

#[test]
fn sort_order_uses_camel_case_keys() {
    let order: SortOrder = serde_json::from_str("\"priceDesc\"").unwrap();
    assert_eq!(order, SortOrder::PriceDesc);
    assert_eq!(serde_json::to_string(&SortOrder::PriceAsc).unwrap(), "\"priceAsc\"");
}

#[test]
fn listing_serializes_camel_case() {
    let record = ListingRecord {
        id: ListingId(2),
        title: "Casa familiar en Surco".to_string(),
        price: "S/ 850,000".to_string(),
        area: "220 m²".to_string(),
        rooms: 5,
        image: "https://picsum.photos/seed/2/800/600".to_string(),
        location: "Surco, Lima".to_string(),
        property_type: Some(PropertyType::House),
    };

    let json = serde_json::to_value(Listing::from_record(record)).unwrap();
    assert_eq!(json["priceAmount"], 850_000);
    assert_eq!(json["priceRaw"], "S/ 850,000");
    assert_eq!(json["areaRaw"], "220 m²");
    assert_eq!(json["imageRef"], "https://picsum.photos/seed/2/800/600");
    assert_eq!(json["propertyType"], "house");
    assert!(json.get("price_amount").is_none());
}
