//! Chat widget logic
//!
//! [`transcript`] holds the displayed conversation, [`exchange`] drives one
//! question through a [`ChatApi`](crate::services::ChatApi) and back into the
//! transcript.

pub mod exchange;
pub mod transcript;

pub use exchange::{submit, TranscriptStore};
pub use transcript::{Author, Message, MessageId, PendingExchange, Transcript};
