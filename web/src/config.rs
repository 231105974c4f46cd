//! # Build-time Configuration
//!
//! The page has no runtime configuration source, so settings are baked in
//! when the wasm bundle is built:
//!
//! - `STARBOT_CHAT_API` - chat endpoint (default [`DEFAULT_CHAT_API_URL`])
//! - `STARBOT_LOG_LEVEL` - `trace`, `debug`, `info`, `warn` or `error` (default `info`)
//!
//! ```bash
//! STARBOT_CHAT_API=http://127.0.0.1:8000/chat/ STARBOT_LOG_LEVEL=debug trunk build
//! ```

use crate::utils::constants::DEFAULT_CHAT_API_URL;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebConfig {
    pub chat_api_url: String,
    pub log_level: log::Level,
}

impl WebConfig {
    /// Read the values captured by `option_env!` at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("STARBOT_CHAT_API"), option_env!("STARBOT_LOG_LEVEL"))
    }

    fn from_values(chat_api_url: Option<&str>, log_level: Option<&str>) -> Self {
        let chat_api_url = chat_api_url
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_CHAT_API_URL)
            .to_string();

        Self {
            chat_api_url,
            log_level: parse_level(log_level.unwrap_or("info")),
        }
    }
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::from_values(None, None)
    }
}

fn parse_level(level: &str) -> log::Level {
    match level.trim().to_lowercase().as_str() {
        "trace" => log::Level::Trace,
        "debug" => log::Level::Debug,
        "warn" => log::Level::Warn,
        "error" => log::Level::Error,
        _ => log::Level::Info,
    }
}
