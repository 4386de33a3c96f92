use estate_config::ConfigLoadError;
use estate_model::ListingId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EstateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Duplicate listing id in catalog: {0}")]
    DuplicateListing(ListingId),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigLoadError),
}

pub type Result<T> = std::result::Result<T, EstateError>;
