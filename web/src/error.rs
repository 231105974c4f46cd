//! # Chat Errors
//!
//! Everything that can go wrong with a chat request. The widget does not
//! distinguish variants for the user; they only differ in the logs.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChatError {
    /// Request could not be built or sent, or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Body was not a JSON object with a `reply` string.
    #[error("Decoding error: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ChatError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ChatError::Decode(e.to_string()),
            other => ChatError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_maps_to_decode() {
        let err = serde_json::from_str::<shared::ChatResponse>("not json").unwrap_err();
        assert!(matches!(ChatError::from(gloo_net::Error::SerdeError(err)), ChatError::Decode(_)));
    }

    #[test]
    fn test_gloo_error_maps_to_network() {
        let err = gloo_net::Error::GlooError("failed to fetch".to_string());
        assert_eq!(
            ChatError::from(err),
            ChatError::Network("failed to fetch".to_string())
        );
    }
}
