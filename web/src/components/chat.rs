//! Chat Widget Component
//!
//! Message log plus an input form. Replies are rendered as text, so markup in
//! a bot answer shows up literally instead of being injected into the page.

use leptos::ev::SubmitEvent;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::normalize_question;

use crate::chat::{submit, Message};
use crate::state::use_chat_context;

#[component]
pub fn ChatWidget() -> impl IntoView {
    let chat = use_chat_context();
    let transcript = chat.transcript;
    let input = RwSignal::new(String::new());
    let log_ref = NodeRef::<Div>::new();

    // Keep the newest message in view
    Effect::new(move |_| {
        transcript.track();
        if let Some(log) = log_ref.get() {
            log.set_scroll_top(log.scroll_height());
        }
    });

    let api = chat.api;
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let text = input.get_untracked();
        if normalize_question(&text).is_none() {
            return;
        }
        input.set(String::new());

        let api = api.clone();
        spawn_local(async move {
            submit(&api, &transcript, &text).await;
        });
    };

    view! {
        <div class="chat">
            <div id="messages" class="messages" node_ref=log_ref>
                <For
                    each=move || transcript.with(|t| t.messages().to_vec())
                    key=|message| message.id
                    children=|message: Message| {
                        let class = if message.placeholder {
                            format!("msg {} pending", message.author.css_class())
                        } else {
                            format!("msg {}", message.author.css_class())
                        };
                        view! { <div class=class>{message.text}</div> }
                    }
                />
            </div>
            <form id="chatForm" class="chat-form" on:submit=on_submit>
                <input
                    id="q"
                    type="text"
                    placeholder="Ask a question..."
                    autocomplete="off"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                />
                <button id="send" type="submit">"Send"</button>
            </form>
        </div>
    }
}
