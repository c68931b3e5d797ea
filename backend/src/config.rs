//! Application configuration.
//!
//! Defaults can be overridden by a YAML file named by `NOWA_CONFIG`, and the
//! bind address additionally by `NOWA_BIND_ADDR`.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const CONFIG_PATH_ENV: &str = "NOWA_CONFIG";
pub const BIND_ADDR_ENV: &str = "NOWA_BIND_ADDR";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid bind address {0:?}")]
    BindAddr(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Origin allowed by CORS, i.e. where the dashboard is served from
    pub allowed_origin: String,
    /// Start with the mock children and ledger instead of an empty store
    pub seed_mock_data: bool,
    /// Simulated ZKP processing time
    pub verification_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            allowed_origin: "http://localhost:8080".to_string(),
            seed_mock_data: true,
            verification_delay_ms: 2500,
        }
    }
}

impl AppConfig {
    /// Load from the environment: the YAML file named by `NOWA_CONFIG` if
    /// set, then the `NOWA_BIND_ADDR` override.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };

        if let Ok(addr) = std::env::var(BIND_ADDR_ENV) {
            config.bind_addr = addr
                .parse()
                .map_err(|_| ConfigError::BindAddr(addr.clone()))?;
        }

        Ok(config)
    }

    /// Missing keys fall back to their defaults
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading configuration from {}", path.display());

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn verification_delay(&self) -> Duration {
        Duration::from_millis(self.verification_delay_ms)
    }
}
