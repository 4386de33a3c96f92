//! Monetary amounts derived from display strings such as `"S/ 1,350,000"`.

/// Normalized price in base currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PriceAmount(u64);

impl PriceAmount {
    pub const ZERO: PriceAmount = PriceAmount(0);

    pub fn new(amount: u64) -> Self {
        PriceAmount(amount)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Strip every non-digit character and read the rest as a base-10
    /// integer. A string without digits is worth zero.
    pub fn from_raw(raw: &str) -> Self {
        PriceAmount(price_digits(raw).unwrap_or(0))
    }
}

impl std::fmt::Display for PriceAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PriceAmount {
    fn from(amount: u64) -> Self {
        PriceAmount(amount)
    }
}

/// Digits of `raw` read as a base-10 integer, or `None` when `raw` holds no
/// ASCII digit at all. Values past `u64::MAX` saturate.
pub fn price_digits(raw: &str) -> Option<u64> {
    let mut seen_digit = false;
    let mut amount: u64 = 0;
    for digit in raw.chars().filter_map(|c| c.to_digit(10)) {
        seen_digit = true;
        amount = amount
            .saturating_mul(10)
            .saturating_add(u64::from(digit));
    }
    seen_digit.then_some(amount)
}
