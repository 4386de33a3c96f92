use crate::error::ModelError;
use std::str::FromStr;

/// Identifier of a listing, unique within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ListingId(pub u64);

impl ListingId {
    pub fn new(id: u64) -> Self {
        ListingId(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ListingId {
    fn from(id: u64) -> Self {
        ListingId(id)
    }
}

impl FromStr for ListingId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(ListingId)
            .map_err(|_| ModelError::InvalidListingId(s.to_string()))
    }
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_trimmed_numeric_ids() {
        assert_eq!(" 42 ".parse::<ListingId>(), Ok(ListingId(42)));
        assert!("abc".parse::<ListingId>().is_err());
        assert!("-1".parse::<ListingId>().is_err());
    }

    #[test]
    fn orders_numerically() {
        assert!(ListingId(2) < ListingId(10));
    }
}
