//! Translate raw presentation-layer input into canonical [`FilterCriteria`].
//!
//! Every routine here is total. Values the user can mistype fall back to a
//! documented default and are logged, never surfaced as errors:
//!
//! - blank or unparsable price bounds fall back to the configured floor and
//!   ceiling;
//! - unknown room, type or sort selections fall back to "any",
//!   unconstrained and relevance respectively;
//! - an inverted price range is kept as-is and simply matches nothing.

use estate_config::{DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR, EngineConfig};
use estate_model::{PropertyType, RoomFilter, SortOrder};
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use tracing::warn;

use super::types::{FilterCriteria, ScalarRange};

/// Filter form state exactly as the presentation layer holds it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCriteria {
    pub text_query: Option<String>,
    pub min_price: Option<String>,
    pub max_price: Option<String>,
    pub room_filter: Option<String>,
    pub type_filter: Option<String>,
    pub sort_order: Option<String>,
}

/// A price bound as typed or picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PriceInput {
    Amount(u64),
    Text(String),
    Missing,
}

impl From<u64> for PriceInput {
    fn from(amount: u64) -> Self {
        PriceInput::Amount(amount)
    }
}

impl From<&str> for PriceInput {
    fn from(text: &str) -> Self {
        PriceInput::Text(text.to_string())
    }
}

impl From<String> for PriceInput {
    fn from(text: String) -> Self {
        PriceInput::Text(text)
    }
}

impl<T: Into<PriceInput>> From<Option<T>> for PriceInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(PriceInput::Missing, Into::into)
    }
}

/// Case-fold text for substring matching.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// Pure, total normalizer from raw input to [`FilterCriteria`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CriteriaNormalizer {
    defaults: ScalarRange<u64>,
}

impl Default for CriteriaNormalizer {
    fn default() -> Self {
        Self::new(ScalarRange::new(DEFAULT_PRICE_FLOOR, DEFAULT_PRICE_CEILING))
    }
}

impl CriteriaNormalizer {
    /// `defaults` supplies the fallback for missing or invalid price bounds.
    pub fn new(defaults: ScalarRange<u64>) -> Self {
        Self { defaults }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(ScalarRange::new(config.price_floor, config.price_ceiling))
    }

    pub fn defaults(&self) -> ScalarRange<u64> {
        self.defaults
    }

    /// Criteria with nothing narrowed.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            min_price: self.defaults.min,
            max_price: self.defaults.max,
            ..FilterCriteria::default()
        }
    }

    pub fn normalize(&self, raw: &RawCriteria) -> FilterCriteria {
        FilterCriteria {
            text_query: normalize_text(raw.text_query.as_deref().unwrap_or("")),
            min_price: self.normalize_min_price(raw.min_price.clone().into()),
            max_price: self.normalize_max_price(raw.max_price.clone().into()),
            room_filter: raw
                .room_filter
                .as_deref()
                .map(parse_room_filter)
                .unwrap_or_default(),
            type_filter: raw.type_filter.as_deref().and_then(parse_type_filter),
            sort_order: raw
                .sort_order
                .as_deref()
                .map(parse_sort_order)
                .unwrap_or_default(),
        }
    }

    pub fn normalize_min_price(&self, input: PriceInput) -> u64 {
        normalize_price(input, self.defaults.min)
    }

    pub fn normalize_max_price(&self, input: PriceInput) -> u64 {
        normalize_price(input, self.defaults.max)
    }
}

/// Trim and case-fold a search query.
pub fn normalize_text(raw: &str) -> String {
    fold_case(raw.trim())
}

/// Resolve a price bound, falling back to `fallback` when the input is
/// missing, blank, negative or not a number. Fractional amounts are floored
/// and amounts past `u64::MAX` saturate.
pub fn normalize_price(input: PriceInput, fallback: u64) -> u64 {
    match input {
        PriceInput::Amount(amount) => amount,
        PriceInput::Missing => fallback,
        PriceInput::Text(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return fallback;
            }
            match parse_price_text(trimmed) {
                Some(amount) => amount,
                None => {
                    warn!(
                        input = %text,
                        fallback,
                        "non-numeric price bound; using default"
                    );
                    fallback
                }
            }
        }
    }
}

/// Integer text directly, otherwise any finite non-negative decimal or
/// exponent form such as `"900000.5"` or `"1e6"`.
fn parse_price_text(text: &str) -> Option<u64> {
    if let Ok(amount) = text.parse::<u64>() {
        return Some(amount);
    }
    let value = text.parse::<f64>().ok()?;
    // `as` saturates at u64::MAX.
    (value.is_finite() && value >= 0.0).then(|| value.floor() as u64)
}

/// Parse an enum selection; blank means "not selected" and unknown values
/// are logged and treated the same way.
fn parse_selection<T: FromStr>(raw: Option<&str>) -> Option<T>
where
    T::Err: std::fmt::Display,
{
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<T>() {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(%err, "ignoring unrecognized filter selection");
            None
        }
    }
}

impl FilterCriteria {
    /// Stable hash of the criteria for memoizing query results. Search text
    /// is hashed trimmed and case-folded so equivalent input collides.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        normalize_text(&self.text_query).hash(&mut hasher);
        self.min_price.hash(&mut hasher);
        self.max_price.hash(&mut hasher);
        self.room_filter.hash(&mut hasher);
        self.type_filter.hash(&mut hasher);
        self.sort_order.hash(&mut hasher);
        hasher.finish()
    }
}

/// Unconstrained type selections a form may send explicitly.
pub fn is_any_type(raw: &str) -> bool {
    matches!(
        fold_case(raw.trim()).as_str(),
        "" | "any" | "all" | "todos" | "indiferente"
    )
}

/// Parse a type selection where "any"-style values mean unconstrained.
pub fn parse_type_filter(raw: &str) -> Option<PropertyType> {
    if is_any_type(raw) {
        None
    } else {
        parse_selection(Some(raw))
    }
}

/// Parse a room selection, defaulting to [`RoomFilter::Any`].
pub fn parse_room_filter(raw: &str) -> RoomFilter {
    parse_selection(Some(raw)).unwrap_or_default()
}

/// Parse a sort selection, defaulting to [`SortOrder::Relevance`].
pub fn parse_sort_order(raw: &str) -> SortOrder {
    parse_selection(Some(raw)).unwrap_or_default()
}
