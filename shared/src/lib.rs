//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the web page and the remote FAQ chat API.
//! All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::chat`]**: Chat question/answer DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::normalize_question`]**: Trim user input, reject blank questions
//!   - **[`utils::preview`]**: Shorten text for log lines
//!
//! ## Wire Format
//!
//! - Field names are snake_case in both Rust and JSON
//! - Fields the server may omit carry `#[serde(default)]`
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::chat::{ChatRequest, ChatResponse};
//!
//! let request = ChatRequest::new("How do I apply?");
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"question":"How do I apply?"}"#);
//!
//! let response: ChatResponse = serde_json::from_str(r#"{"reply":"Online."}"#).unwrap();
//! assert_eq!(response.reply, "Online.");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
