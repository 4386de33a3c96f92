use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {source}")]
    Parse {
        #[from]
        source: toml::de::Error,
    },

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidEnvValue { name: &'static str, value: String },

    #[error("failed to load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
