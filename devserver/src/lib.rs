//! # Dev Server Library
//!
//! Serves the built web page (`trunk build` output) for local development.

pub mod config;
pub mod error;
pub mod server;

pub use config::DevServerConfig;
pub use error::ConfigError;
pub use server::{create_router, start_server};
