//! # Chat API Client
//!
//! Talks to the remote FAQ bot over plain HTTP.
//!
//! ```text
//! POST <endpoint>   {"question": "..."}   ->   {"reply": "...", "sources": [...]}
//! ```
//!
//! The status code is not inspected: any body that decodes to a reply is a
//! reply, anything else is a [`ChatError`].

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{preview, ChatRequest, ChatResponse};

use crate::error::{ChatError, Result};

/// Anything that can answer a question.
///
/// The widget only needs the reply text; tests swap in canned answers.
#[async_trait(?Send)]
pub trait ChatApi {
    async fn ask(&self, question: &str) -> Result<String>;
}

/// `fetch`-backed client for the FAQ bot
#[derive(Clone, Debug)]
pub struct HttpChatApi {
    endpoint: String,
}

impl HttpChatApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl ChatApi for HttpChatApi {
    async fn ask(&self, question: &str) -> Result<String> {
        log::debug!("[CHAT] POST {} question={:?}", self.endpoint, preview(question, 60));

        let response = Request::post(&self.endpoint)
            .json(&ChatRequest::new(question))?
            .send()
            .await?;

        let status = response.status();
        let body: ChatResponse = response.json().await.map_err(|e| {
            log::warn!("[CHAT] Undecodable reply (HTTP {}): {}", status, e);
            ChatError::from(e)
        })?;

        log::debug!(
            "[CHAT] HTTP {} reply={:?} sources={}",
            status,
            preview(&body.reply, 60),
            body.sources.len()
        );
        for source in &body.sources {
            log::trace!("[CHAT]   {:.3} {}", source.score, preview(&source.question, 80));
        }

        Ok(body.reply)
    }
}
