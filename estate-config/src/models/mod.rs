pub mod sources;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::loader::error::ConfigLoadError;

/// Listings per page in the storefront grid.
pub const DEFAULT_PAGE_SIZE: usize = 2;
/// Lower price bound used when the user leaves the field blank.
pub const DEFAULT_PRICE_FLOOR: u64 = 0;
/// Upper price bound used when the user leaves the field blank.
pub const DEFAULT_PRICE_CEILING: u64 = 2_000_000;

/// Resolved engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Listings per result page. Must be positive.
    pub page_size: usize,
    /// Fallback for a missing or unparsable minimum price.
    pub price_floor: u64,
    /// Fallback for a missing or unparsable maximum price.
    pub price_ceiling: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            price_floor: DEFAULT_PRICE_FLOOR,
            price_ceiling: DEFAULT_PRICE_CEILING,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.page_size == 0 {
            return Err(ConfigLoadError::Invalid(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if self.price_floor > self.price_ceiling {
            return Err(ConfigLoadError::Invalid(format!(
                "price_floor ({}) exceeds price_ceiling ({})",
                self.price_floor, self.price_ceiling
            )));
        }
        Ok(())
    }
}

/// Where the resolved settings came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    File(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub source: ConfigSource,
    pub env_file_loaded: bool,
    /// Names of the `ESTATE_*` variables that overrode a setting.
    pub env_overrides: Vec<&'static str>,
}
