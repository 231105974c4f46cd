//! # Data Transfer Objects (DTOs)
//!
//! Data structures exchanged with the chat API.
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /chat/
//! Content-Type: application/json
//!
//! { "question": "Where is the dormitory?" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "reply": "The dormitory is at ...",
//!   "sources": [
//!     { "question": "Where is the dormitory?", "answer": "The dormitory is at ...", "score": 0.82 }
//!   ]
//! }
//! ```

pub mod chat;

pub use chat::*;
