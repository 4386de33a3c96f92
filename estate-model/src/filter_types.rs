use crate::error::ModelError;
use std::fmt;
use std::str::FromStr;

/// Case-insensitive match against a canonical key or a display label.
fn matches_option(input: &str, key: &str, label: &str) -> bool {
    let input = input.trim();
    input.eq_ignore_ascii_case(key)
        || input.to_lowercase() == label.to_lowercase()
}

/// Bedroom selector ("Ambientes").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoomFilter {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "any"))]
    Any,
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    One,
    #[cfg_attr(feature = "serde", serde(rename = "2"))]
    Two,
    #[cfg_attr(feature = "serde", serde(rename = "3+"))]
    ThreePlus,
}

impl RoomFilter {
    pub fn all() -> &'static [RoomFilter] {
        use RoomFilter::*;
        &[Any, One, Two, ThreePlus]
    }

    pub fn key(&self) -> &'static str {
        match self {
            RoomFilter::Any => "any",
            RoomFilter::One => "1",
            RoomFilter::Two => "2",
            RoomFilter::ThreePlus => "3+",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoomFilter::Any => "Indiferente",
            RoomFilter::One => "1",
            RoomFilter::Two => "2",
            RoomFilter::ThreePlus => "3+",
        }
    }

    /// Whether a listing with `rooms` bedrooms passes this selector.
    pub fn accepts(&self, rooms: u32) -> bool {
        match self {
            RoomFilter::Any => true,
            RoomFilter::One => rooms == 1,
            RoomFilter::Two => rooms == 2,
            RoomFilter::ThreePlus => rooms >= 3,
        }
    }
}

impl fmt::Display for RoomFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RoomFilter {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RoomFilter::all()
            .iter()
            .copied()
            .find(|option| matches_option(s, option.key(), option.label()))
            .ok_or_else(|| ModelError::UnknownOption {
                kind: "room",
                value: s.to_string(),
            })
    }
}

/// Kind of property ("Tipo").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PropertyType {
    Apartment,
    House,
    Land,
}

impl PropertyType {
    pub fn all() -> &'static [PropertyType] {
        use PropertyType::*;
        &[Apartment, House, Land]
    }

    pub fn key(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Land => "land",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Departamento",
            PropertyType::House => "Casa",
            PropertyType::Land => "Terreno",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PropertyType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::all()
            .iter()
            .copied()
            .find(|option| matches_option(s, option.key(), option.label()))
            .ok_or_else(|| ModelError::UnknownOption {
                kind: "property type",
                value: s.to_string(),
            })
    }
}

/// Result ordering ("Ordenar").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SortOrder {
    /// Catalog load order.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        use SortOrder::*;
        &[Relevance, PriceAsc, PriceDesc]
    }

    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "relevance",
            SortOrder::PriceAsc => "priceAsc",
            SortOrder::PriceDesc => "priceDesc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Más relevantes",
            SortOrder::PriceAsc => "Precio: menor a mayor",
            SortOrder::PriceDesc => "Precio: mayor a menor",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept snake_case spellings of the camelCase keys as well.
        let compact = s.trim().replace('_', "");
        SortOrder::all()
            .iter()
            .copied()
            .find(|option| matches_option(&compact, option.key(), option.label()))
            .ok_or_else(|| ModelError::UnknownOption {
                kind: "sort",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_filter_accepts_counts() {
        assert!(RoomFilter::Any.accepts(0));
        assert!(RoomFilter::One.accepts(1));
        assert!(!RoomFilter::One.accepts(2));
        assert!(RoomFilter::Two.accepts(2));
        assert!(!RoomFilter::ThreePlus.accepts(2));
        assert!(RoomFilter::ThreePlus.accepts(3));
        assert!(RoomFilter::ThreePlus.accepts(5));
    }

    #[test]
    fn parses_keys_and_labels() {
        assert_eq!("3+".parse::<RoomFilter>(), Ok(RoomFilter::ThreePlus));
        assert_eq!("indiferente".parse::<RoomFilter>(), Ok(RoomFilter::Any));
        assert_eq!("Casa".parse::<PropertyType>(), Ok(PropertyType::House));
        assert_eq!(" LAND ".parse::<PropertyType>(), Ok(PropertyType::Land));
        assert_eq!("priceDesc".parse::<SortOrder>(), Ok(SortOrder::PriceDesc));
        assert_eq!("price_asc".parse::<SortOrder>(), Ok(SortOrder::PriceAsc));
        assert_eq!(" PRICE_DESC ".parse::<SortOrder>(), Ok(SortOrder::PriceDesc));
        assert_eq!(
            "Precio: mayor a menor".parse::<SortOrder>(),
            Ok(SortOrder::PriceDesc)
        );
        assert_eq!(
            "MÁS RELEVANTES".parse::<SortOrder>(),
            Ok(SortOrder::Relevance)
        );
    }

    #[test]
    fn rejects_unknown_options() {
        assert!("4".parse::<RoomFilter>().is_err());
        assert!("castle".parse::<PropertyType>().is_err());
        assert!("newest".parse::<SortOrder>().is_err());
    }
}
