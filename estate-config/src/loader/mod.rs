pub mod error;

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::models::sources::{
    EnvConfig, FileConfig, PAGE_SIZE_VAR, PRICE_CEILING_VAR, PRICE_FLOOR_VAR,
};
use crate::models::{ConfigMetadata, ConfigSource, EngineConfig};
use error::ConfigLoadError;

/// Validated configuration plus a record of how it was assembled.
#[derive(Debug, Clone)]
pub struct ConfigLoad {
    pub config: EngineConfig,
    pub metadata: ConfigMetadata,
}

/// Layers defaults, an optional TOML file and environment overrides.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_file: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    /// Load a `.env` file into the process environment before reading
    /// `ESTATE_*` variables.
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Resolve against the live process environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match self.env_file.as_deref() {
            Some(path) => {
                dotenvy::from_path(path)?;
                true
            }
            None => false,
        };

        let mut load = self.load_with_env(EnvConfig::from_env()?)?;
        load.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolve against an explicit environment snapshot.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut config = EngineConfig::default();
        let mut metadata = ConfigMetadata::default();

        if let Some(path) = self.config_path.as_deref() {
            apply_file(&mut config, read_file_config(path)?);
            metadata.source = ConfigSource::File(path.to_path_buf());
        }

        if let Some(page_size) = env.page_size {
            config.page_size = page_size;
            metadata.env_overrides.push(PAGE_SIZE_VAR);
        }
        if let Some(floor) = env.price_floor {
            config.price_floor = floor;
            metadata.env_overrides.push(PRICE_FLOOR_VAR);
        }
        if let Some(ceiling) = env.price_ceiling {
            config.price_ceiling = ceiling;
            metadata.env_overrides.push(PRICE_CEILING_VAR);
        }

        config.validate()?;

        debug!(
            page_size = config.page_size,
            price_floor = config.price_floor,
            price_ceiling = config.price_ceiling,
            source = ?metadata.source,
            overrides = ?metadata.env_overrides,
            "engine config resolved"
        );

        Ok(ConfigLoad { config, metadata })
    }
}

pub fn parse_file_config(contents: &str) -> Result<FileConfig, ConfigLoadError> {
    Ok(toml::from_str(contents)?)
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigLoadError> {
    let contents =
        read_to_string(path).map_err(|source| ConfigLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    parse_file_config(&contents)
}

fn apply_file(config: &mut EngineConfig, file: FileConfig) {
    let engine = file.engine;
    if let Some(page_size) = engine.page_size {
        config.page_size = page_size;
    }
    if let Some(floor) = engine.price_floor {
        config.price_floor = floor;
    }
    if let Some(ceiling) = engine.price_ceiling {
        config.price_ceiling = ceiling;
    }
}
