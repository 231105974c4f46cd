//! # Chat Data Transfer Objects
//!
//! Request and response bodies of the `POST /chat/` endpoint.

use serde::{Deserialize, Serialize};

/// Question sent by the chat widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatRequest {
    pub question: String,
}

impl ChatRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

/// FAQ entry the server matched while building its reply
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnswerItem {
    pub question: String,
    pub answer: String,
    pub score: f64,
}

/// Chat API reply
///
/// Only `reply` is required; older deployments do not send `sources`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub sources: Vec<AnswerItem>,
}
