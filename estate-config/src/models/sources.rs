use serde::{Deserialize, Serialize};

use crate::loader::error::ConfigLoadError;
use crate::util::{parse_number, read_trimmed_var};

pub const PAGE_SIZE_VAR: &str = "ESTATE_PAGE_SIZE";
pub const PRICE_FLOOR_VAR: &str = "ESTATE_PRICE_FLOOR";
pub const PRICE_CEILING_VAR: &str = "ESTATE_PRICE_CEILING";

/// Raw configuration as defined in a TOML file.
///
/// ```toml
/// [engine]
/// page_size = 12
/// price_ceiling = 5000000
/// ```
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub engine: FileEngineConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileEngineConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_floor: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_ceiling: Option<u64>,
}

/// Snapshot of the `ESTATE_*` environment variables.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvConfig {
    pub page_size: Option<usize>,
    pub price_floor: Option<u64>,
    pub price_ceiling: Option<u64>,
}

impl EnvConfig {
    /// Capture the current process environment. Blank variables count as unset.
    pub fn from_env() -> Result<Self, ConfigLoadError> {
        Ok(Self {
            page_size: read_trimmed_var(PAGE_SIZE_VAR)
                .map(|raw| parse_number(PAGE_SIZE_VAR, &raw))
                .transpose()?,
            price_floor: read_trimmed_var(PRICE_FLOOR_VAR)
                .map(|raw| parse_number(PRICE_FLOOR_VAR, &raw))
                .transpose()?,
            price_ceiling: read_trimmed_var(PRICE_CEILING_VAR)
                .map(|raw| parse_number(PRICE_CEILING_VAR, &raw))
                .transpose()?,
        })
    }
}
