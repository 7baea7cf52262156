//! Server configuration, read from environment variables.

use std::path::PathBuf;

use crate::logging::LogFormat;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a valid port number, got {value:?}")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name} must be one of {expected}, got {value:?}")]
    InvalidChoice {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreKind {
    #[default]
    Memory,
    Mongo,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub mongodb_uri: String,
    pub mongodb_database: String,
    /// JSON file of incidents loaded into the in-memory store.
    pub seed_path: Option<PathBuf>,
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            store: StoreKind::Memory,
            mongodb_uri: "mongodb://localhost:27017".to_string(),
            mongodb_database: "ops-status".to_string(),
            seed_path: None,
            cors_origins: Vec::new(),
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let mut config = Self::default();

        if let Some(host) = var("OPS_STATUS_HOST") {
            config.host = host;
        }
        if let Some(port) = var("OPS_STATUS_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort {
                name: "OPS_STATUS_PORT",
                value: port,
            })?;
        }
        if let Some(store) = var("OPS_STATUS_STORE") {
            config.store = match store.to_ascii_lowercase().as_str() {
                "memory" => StoreKind::Memory,
                "mongo" | "mongodb" => StoreKind::Mongo,
                _ => {
                    return Err(ConfigError::InvalidChoice {
                        name: "OPS_STATUS_STORE",
                        expected: "memory, mongo",
                        value: store,
                    })
                }
            };
        }
        if let Some(uri) = var("MONGODB_URI") {
            config.mongodb_uri = uri;
        }
        if let Some(database) = var("MONGODB_DATABASE") {
            config.mongodb_database = database;
        }
        config.seed_path = var("OPS_STATUS_SEED").map(PathBuf::from);
        if let Some(origins) = var("OPS_STATUS_CORS_ORIGINS") {
            config.cors_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(format) = var("OPS_STATUS_LOG_FORMAT") {
            config.log_format = match format.to_ascii_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "json" => LogFormat::Json,
                _ => {
                    return Err(ConfigError::InvalidChoice {
                        name: "OPS_STATUS_LOG_FORMAT",
                        expected: "pretty, json",
                        value: format,
                    })
                }
            };
        }

        Ok(config)
    }
}
