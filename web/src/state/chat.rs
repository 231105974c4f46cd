//! Chat state management

use leptos::prelude::*;

use crate::chat::Transcript;
use crate::config::WebConfig;
use crate::services::HttpChatApi;
use crate::utils::constants::GREETING_TEXT;

/// Transcript plus the client used to extend it
#[derive(Clone)]
pub struct ChatContext {
    pub transcript: RwSignal<Transcript>,
    pub api: HttpChatApi,
}

impl ChatContext {
    pub fn new(config: &WebConfig) -> Self {
        Self {
            transcript: RwSignal::new(Transcript::with_greeting(GREETING_TEXT)),
            api: HttpChatApi::new(config.chat_api_url.clone()),
        }
    }
}

pub fn provide_chat_context(config: &WebConfig) -> ChatContext {
    let context = ChatContext::new(config);
    provide_context(context.clone());
    context
}

pub fn use_chat_context() -> ChatContext {
    expect_context::<ChatContext>()
}
