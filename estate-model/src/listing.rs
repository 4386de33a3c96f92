use crate::filter_types::PropertyType;
use crate::ids::ListingId;
use crate::price::PriceAmount;

/// Catalog record as delivered by the data provider.
///
/// Field names follow the provider's wire shape (`price`, `area`, `image`);
/// nothing here is interpreted beyond what [`Listing::from_record`] derives.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListingRecord {
    pub id: ListingId,
    pub title: String,
    pub price: String,
    pub area: String,
    pub rooms: u32,
    pub image: String,
    pub location: String,
    #[cfg_attr(
        feature = "serde",
        serde(rename = "type", default, skip_serializing_if = "Option::is_none")
    )]
    pub property_type: Option<PropertyType>,
}

/// One real-estate unit in the catalog. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    /// Price as displayed, e.g. `"S/ 420,000"`.
    pub price_raw: String,
    /// Derived once from `price_raw` at load time.
    pub price_amount: PriceAmount,
    pub area_raw: String,
    pub rooms: u32,
    pub image_ref: String,
    pub location: String,
    /// `None` never satisfies an explicit type filter.
    pub property_type: Option<PropertyType>,
}

impl Listing {
    pub fn from_record(record: ListingRecord) -> Self {
        let price_amount = PriceAmount::from_raw(&record.price);
        Listing {
            id: record.id,
            title: record.title,
            price_raw: record.price,
            price_amount,
            area_raw: record.area,
            rooms: record.rooms,
            image_ref: record.image,
            location: record.location,
            property_type: record.property_type,
        }
    }

    pub fn price(&self) -> u64 {
        self.price_amount.value()
    }
}

impl From<ListingRecord> for Listing {
    fn from(record: ListingRecord) -> Self {
        Listing::from_record(record)
    }
}
