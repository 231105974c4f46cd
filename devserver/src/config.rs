//! # Dev Server Configuration
//!
//! Loaded from environment variables (a `.env` file is honored):
//!
//! | Variable           | Default          |
//! |--------------------|------------------|
//! | `STARBOT_BIND`     | `127.0.0.1:8080` |
//! | `STARBOT_DIST_DIR` | `dist`           |
//! | `LOG_LEVEL`        | `info`           |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DevServerConfig {
    /// Address the HTTP listener binds to
    pub bind_address: String,

    /// Directory holding `index.html`, the wasm bundle and assets
    pub dist_dir: PathBuf,

    /// One of `trace`, `debug`, `info`, `warn`, `error`
    pub log_level: String,
}

impl DevServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let bind_address = lookup("STARBOT_BIND").unwrap_or_else(|| "127.0.0.1:8080".to_string());
        let dist_dir = lookup("STARBOT_DIST_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("dist"));
        let log_level = lookup("LOG_LEVEL")
            .unwrap_or_else(|| "info".to_string())
            .to_lowercase();

        Self {
            bind_address,
            dist_dir,
            log_level,
        }
    }

    /// Fail fast on a bad address or a missing build directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_address
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddress(self.bind_address.clone()))?;

        if !self.dist_dir.is_dir() {
            return Err(ConfigError::MissingDistDir(self.dist_dir.display().to_string()));
        }

        if !self.dist_dir.join("index.html").is_file() {
            return Err(ConfigError::MissingIndex(self.dist_dir.display().to_string()));
        }

        Ok(())
    }
}

impl Default for DevServerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
