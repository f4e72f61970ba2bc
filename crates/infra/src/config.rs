//! Configuration loading and representation.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use pentaledger_utility::env;

pub const DATABASE_URL: &str = "DATABASE_URL";
pub const DB_MAX_CONNECTIONS: &str = "PENTALEDGER_DB_MAX_CONNECTIONS";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Env(#[from] env::EnvError),

    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Postgres connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            acquire_timeout: Duration::from_secs(5),
        }
    }

    /// Read `DATABASE_URL` (required) and `PENTALEDGER_DB_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::require(DATABASE_URL)?;
        let mut cfg = Self::new(url);
        cfg.max_connections = env::get_or(DB_MAX_CONNECTIONS, cfg.max_connections);
        Ok(cfg)
    }

    /// `from_env`, or `None` when `DATABASE_URL` is unset.
    pub fn from_env_optional() -> Option<Self> {
        env::exists(DATABASE_URL).then(Self::from_env).and_then(Result::ok)
    }
}

/// HTTP server settings, read from a JSON file such as
///
/// ```json
/// { "host": "127.0.0.1", "port": 8080, "threadNum": 4, "logLevel": "INFO" }
/// ```
///
/// Keys that are absent keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub thread_num: usize,
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            thread_num: 4,
            log_level: "INFO".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Like [`from_file`](Self::from_file), falling back to defaults with a
    /// warning when the file is missing or malformed.
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::from_file(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "using default server configuration");
                Self::default()
            }
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Worker thread count, never below one.
    pub fn worker_threads(&self) -> usize {
        self.thread_num.max(1)
    }

    /// The configured level as an `EnvFilter` directive (`INFO` → `info`).
    pub fn log_directive(&self) -> String {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "warning" => "warn".to_string(),
            "fatal" | "critical" => "error".to_string(),
            "" => "info".to_string(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        f
    }

    #[test]
    fn defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.thread_num, 4);
        assert_eq!(cfg.log_directive(), "info");
    }

    #[test]
    fn present_keys_override_defaults() {
        let f = write_config(r#"{"port": 9090, "logLevel": "DEBUG"}"#);
        let cfg = ServerConfig::from_file(f.path()).unwrap();
        assert_eq!(cfg.port, 9090);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.thread_num, 4);
        assert_eq!(cfg.log_directive(), "debug");

        let f = write_config(r#"{"host": "127.0.0.1", "threadNum": 0}"#);
        let cfg = ServerConfig::from_file(f.path()).unwrap();
        assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
        assert_eq!(cfg.worker_threads(), 1);
    }

    #[test]
    fn missing_or_invalid_file_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join("config.json");
        assert!(matches!(ServerConfig::from_file(&missing), Err(ConfigError::Read { .. })));
        assert_eq!(ServerConfig::load(&missing), ServerConfig::default());

        let f = write_config("{ not json");
        assert!(matches!(ServerConfig::from_file(f.path()), Err(ConfigError::Parse { .. })));
        assert_eq!(ServerConfig::load(f.path()), ServerConfig::default());
    }

    #[test]
    fn db_config_defaults() {
        let cfg = DbConfig::new("postgres://localhost/pentaledger");
        assert_eq!(cfg.max_connections, 10);
        assert_eq!(cfg.acquire_timeout, Duration::from_secs(5));
    }
}
