//! Configuration loading for the estate catalog engine.
//!
//! Settings are layered as built-in defaults, then an optional TOML file,
//! then `ESTATE_*` environment variables. The resolved [`EngineConfig`] is
//! validated before it is handed to the engine, so a bad page size surfaces
//! at startup instead of on the first query.

pub mod loader;
pub mod models;
pub mod util;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::sources::{EnvConfig, FileConfig};
pub use models::{
    ConfigMetadata, ConfigSource, DEFAULT_PAGE_SIZE, DEFAULT_PRICE_CEILING,
    DEFAULT_PRICE_FLOOR, EngineConfig,
};
