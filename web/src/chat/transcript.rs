//! Chat transcript
//!
//! Ordered log of what the widget shows. Messages are only ever appended;
//! the one exception is a placeholder, which its own exchange removes when
//! the reply (or the failure) arrives.

use shared::utils::normalize_question;

use crate::error::Result;
use crate::utils::constants::{CONNECTION_ERROR_TEXT, PLACEHOLDER_TEXT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Bot,
}

impl Author {
    pub fn css_class(self) -> &'static str {
        match self {
            Author::User => "user",
            Author::Bot => "bot",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub author: Author,
    pub text: String,
    pub placeholder: bool,
}

/// Handle for a question that is waiting on the chat API
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingExchange {
    pub question: String,
    pub placeholder: MessageId,
}

#[derive(Clone, Debug, Default)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Transcript that opens with a bot greeting.
    pub fn with_greeting(text: impl Into<String>) -> Self {
        let mut transcript = Self::new();
        transcript.push(Author::Bot, text);
        transcript
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn has_pending(&self) -> bool {
        self.messages.iter().any(|m| m.placeholder)
    }

    pub fn push(&mut self, author: Author, text: impl Into<String>) -> MessageId {
        self.append(author, text.into(), false)
    }

    /// Start an exchange: append the user's question and a placeholder.
    ///
    /// Blank input leaves the transcript untouched and returns `None`.
    pub fn begin(&mut self, raw: &str) -> Option<PendingExchange> {
        let question = normalize_question(raw)?;
        self.append(Author::User, question.clone(), false);
        let placeholder = self.append(Author::Bot, PLACEHOLDER_TEXT.to_string(), true);
        Some(PendingExchange {
            question,
            placeholder,
        })
    }

    /// Finish an exchange: drop its placeholder and append the bot's answer,
    /// or the connection error message if the request failed.
    pub fn resolve(&mut self, pending: &PendingExchange, outcome: Result<String>) -> MessageId {
        self.messages
            .retain(|m| !(m.placeholder && m.id == pending.placeholder));
        let text = match outcome {
            Ok(reply) => reply,
            Err(_) => CONNECTION_ERROR_TEXT.to_string(),
        };
        self.push(Author::Bot, text)
    }

    fn append(&mut self, author: Author, text: String, placeholder: bool) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(Message {
            id,
            author,
            text,
            placeholder,
        });
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;
    use crate::utils::constants::GREETING_TEXT;

    #[test]
    fn test_begin_appends_question_and_placeholder() {
        let mut transcript = Transcript::new();
        let pending = transcript.begin("  What are the deadlines?  ").unwrap();

        assert_eq!(pending.question, "What are the deadlines?");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.messages()[0].author, Author::User);
        assert_eq!(transcript.messages()[0].text, "What are the deadlines?");
        assert!(transcript.messages()[1].placeholder);
        assert_eq!(transcript.messages()[1].id, pending.placeholder);
    }

    #[test]
    fn test_blank_input_is_noop() {
        let mut transcript = Transcript::with_greeting(GREETING_TEXT);
        assert!(transcript.begin("").is_none());
        assert!(transcript.begin("   \n\t").is_none());
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_resolve_success() {
        let mut transcript = Transcript::new();
        let pending = transcript.begin("hi").unwrap();
        transcript.resolve(&pending, Ok("Hello".to_string()));

        assert_eq!(transcript.len(), 2);
        assert!(!transcript.has_pending());
        let last = transcript.last().unwrap();
        assert_eq!(last.author, Author::Bot);
        assert_eq!(last.text, "Hello");
    }

    #[test]
    fn test_resolve_failure() {
        let mut transcript = Transcript::new();
        let pending = transcript.begin("hi").unwrap();
        transcript.resolve(&pending, Err(ChatError::Network("offline".to_string())));

        assert!(!transcript.has_pending());
        assert_eq!(transcript.last().unwrap().text, CONNECTION_ERROR_TEXT);
    }

    #[test]
    fn test_out_of_order_resolution_removes_own_placeholder() {
        let mut transcript = Transcript::new();
        let first = transcript.begin("first").unwrap();
        let second = transcript.begin("second").unwrap();

        transcript.resolve(&second, Ok("answer two".to_string()));
        assert!(transcript.messages().iter().any(|m| m.id == first.placeholder));
        assert!(transcript.messages().iter().all(|m| m.id != second.placeholder));

        transcript.resolve(&first, Ok("answer one".to_string()));
        assert!(!transcript.has_pending());

        let texts: Vec<&str> = transcript.messages().iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second", "answer two", "answer one"]);
    }

    #[test]
    fn test_reply_is_stored_verbatim() {
        let mut transcript = Transcript::new();
        let pending = transcript.begin("markup?").unwrap();
        transcript.resolve(&pending, Ok("<b>bold</b>\n2) next".to_string()));
        assert_eq!(transcript.last().unwrap().text, "<b>bold</b>\n2) next");
    }
}
