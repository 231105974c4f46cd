//! One question/answer round trip
//!
//! The transcript lives in a reactive signal in the app and in a plain
//! `RefCell` in tests; [`TranscriptStore`] hides the difference.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};
use shared::preview;

use super::Transcript;
use crate::services::ChatApi;

/// Mutable access to a transcript that may live behind interior mutability.
///
/// Returns `None` when the transcript is gone (e.g. its signal was disposed).
pub trait TranscriptStore {
    fn update_transcript<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R>;
}

impl TranscriptStore for RwSignal<Transcript> {
    fn update_transcript<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl TranscriptStore for Rc<RefCell<Transcript>> {
    fn update_transcript<R>(&self, f: impl FnOnce(&mut Transcript) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Submit `raw` as a question and wait for the answer.
///
/// Returns `false` when the input was blank and nothing happened. The store is
/// never borrowed across the network call.
pub async fn submit<A, S>(api: &A, store: &S, raw: &str) -> bool
where
    A: ChatApi + ?Sized,
    S: TranscriptStore + ?Sized,
{
    let Some(pending) = store.update_transcript(|t| t.begin(raw)).flatten() else {
        return false;
    };

    log::info!("[CHAT] Asking: {}", preview(&pending.question, 60));
    let outcome = api.ask(&pending.question).await;
    if let Err(e) = &outcome {
        log::error!("[CHAT] Request failed: {}", e);
    }

    if store
        .update_transcript(|t| t.resolve(&pending, outcome))
        .is_none()
    {
        log::warn!("[CHAT] Transcript dropped before the reply arrived");
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::Author;
    use crate::error::{ChatError, Result};
    use crate::utils::constants::{CONNECTION_ERROR_TEXT, GREETING_TEXT};
    use async_trait::async_trait;
    use std::cell::Cell;

    struct CannedApi {
        reply: Result<String>,
        calls: Cell<usize>,
    }

    impl CannedApi {
        fn ok(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: Cell::new(0),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(ChatError::Network("connection refused".to_string())),
                calls: Cell::new(0),
            }
        }
    }

    #[async_trait(?Send)]
    impl ChatApi for CannedApi {
        async fn ask(&self, _question: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    /// Checks the transcript while the request is in flight.
    struct InspectingApi {
        store: Rc<RefCell<Transcript>>,
    }

    #[async_trait(?Send)]
    impl ChatApi for InspectingApi {
        async fn ask(&self, question: &str) -> Result<String> {
            let transcript = self.store.borrow();
            let last = transcript.last().expect("placeholder present");
            assert!(last.placeholder);
            assert_eq!(transcript.messages()[transcript.len() - 2].text, question);
            Ok("done".to_string())
        }
    }

    fn store() -> Rc<RefCell<Transcript>> {
        Rc::new(RefCell::new(Transcript::with_greeting(GREETING_TEXT)))
    }

    #[tokio::test]
    async fn test_submit_success_appends_user_and_reply() {
        let store = store();
        let api = CannedApi::ok("Hello");

        assert!(submit(&api, &store, "  hi there ").await);

        let transcript = store.borrow();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.messages()[1].author, Author::User);
        assert_eq!(transcript.messages()[1].text, "hi there");
        assert_eq!(transcript.last().unwrap().author, Author::Bot);
        assert_eq!(transcript.last().unwrap().text, "Hello");
        assert!(!transcript.has_pending());
        assert_eq!(api.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_submit_failure_shows_connection_error() {
        let store = store();
        let api = CannedApi::failing();

        assert!(submit(&api, &store, "anything").await);

        let transcript = store.borrow();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last().unwrap().text, CONNECTION_ERROR_TEXT);
        assert!(!transcript.has_pending());
    }

    #[tokio::test]
    async fn test_blank_submit_sends_nothing() {
        let store = store();
        let api = CannedApi::ok("unused");

        for input in ["", " ", "\t\n  "] {
            assert!(!submit(&api, &store, input).await);
        }

        assert_eq!(store.borrow().len(), 1);
        assert_eq!(api.calls.get(), 0);
    }

    #[tokio::test]
    async fn test_placeholder_visible_while_waiting() {
        let store = store();
        let api = InspectingApi {
            store: store.clone(),
        };

        assert!(submit(&api, &store, "status?").await);
        assert_eq!(store.borrow().last().unwrap().text, "done");
    }

    #[tokio::test]
    async fn test_every_submission_adds_two_messages() {
        let store = store();
        let api = CannedApi::ok("ok");

        for (i, q) in ["one", "two", "three"].iter().enumerate() {
            submit(&api, &store, q).await;
            assert_eq!(store.borrow().len(), 1 + 2 * (i + 1));
        }
        assert_eq!(api.calls.get(), 3);
    }
}
