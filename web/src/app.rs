//! Starbot Web App - Leptos Frontend
//!
//! Starry sky background with a FAQ chat window on top

use leptos::prelude::*;

use crate::components::{ChatWidget, CometLayer, ShipLayer, Starfield, ThemeToggle};
use crate::config::WebConfig;
use crate::state::{provide_chat_context, provide_theme_context};

#[component]
pub fn App(config: WebConfig) -> impl IntoView {
    provide_theme_context();
    provide_chat_context(&config);

    log::info!("[APP] Chat endpoint: {}", config.chat_api_url);

    view! {
        <div class="app-container">
            <Starfield/>
            <CometLayer/>
            <ShipLayer/>
            <header class="topbar">
                <span class="title">"Starbot"</span>
                <ThemeToggle/>
            </header>
            <main class="chat-container">
                <ChatWidget/>
            </main>
        </div>
    }
}
