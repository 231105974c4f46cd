//! Reactive state shared through Leptos context

pub mod chat;
pub mod theme;

pub use chat::{provide_chat_context, use_chat_context, ChatContext};
pub use theme::{provide_theme_context, use_theme_context, ThemeContext};
