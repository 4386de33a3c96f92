use std::str::FromStr;

use crate::loader::error::ConfigLoadError;

/// Read an environment variable, treating unset and whitespace-only values
/// alike.
pub fn read_trimmed_var(name: &str) -> Option<String> {
    std::env::var(name).ok().and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

pub fn parse_number<T: FromStr>(
    name: &'static str,
    raw: &str,
) -> Result<T, ConfigLoadError> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| ConfigLoadError::InvalidEnvValue {
            name,
            value: raw.to_string(),
        })
}
