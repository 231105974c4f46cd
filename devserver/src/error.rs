//! # Configuration Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STARBOT_BIND is not a valid socket address: {0}")]
    InvalidBindAddress(String),

    #[error("STARBOT_DIST_DIR does not exist: {0}")]
    MissingDistDir(String),

    #[error("STARBOT_DIST_DIR has no index.html: {0}")]
    MissingIndex(String),
}
