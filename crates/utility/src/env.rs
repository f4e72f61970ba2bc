//! Environment variable lookups.
//!
//! An empty value is treated the same as an unset one.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("{0} environment variable is not set")]
    Missing(String),

    #[error("{key} environment variable is not valid unicode")]
    NotUnicode { key: String },
}

pub fn get(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

pub fn require(key: &str) -> Result<String, EnvError> {
    match std::env::var(key) {
        Ok(v) if !v.is_empty() => Ok(v),
        Ok(_) | Err(std::env::VarError::NotPresent) => Err(EnvError::Missing(key.to_string())),
        Err(std::env::VarError::NotUnicode(_)) => Err(EnvError::NotUnicode { key: key.to_string() }),
    }
}

pub fn exists(key: &str) -> bool {
    get(key).is_some()
}

/// Parse a variable, falling back to `default` when unset or unparsable.
pub fn get_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    get(key).and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

pub fn home_path() -> Option<PathBuf> {
    dirs::home_dir()
}
