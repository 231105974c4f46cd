//! External services

pub mod chat_api;

pub use chat_api::{ChatApi, HttpChatApi};
