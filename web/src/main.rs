//! Starbot web page
//!
//! Animated starfield, day/night theme, comets, ships and a small FAQ chat
//! window, compiled to WebAssembly with Leptos.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

pub mod app;
pub mod chat;
pub mod components;
pub mod config;
pub mod error;
pub mod scene;
pub mod services;
pub mod state;
pub mod utils;

use app::App;
use config::WebConfig;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let config = WebConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("Starbot starting...");

    hide_loading_screen();
    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}

/// Hide the static loading placeholder from index.html
fn hide_loading_screen() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document available");
        return;
    };

    match document.get_element_by_id("loading") {
        Some(loading) => {
            if let Err(e) = loading.class_list().add_1("hidden") {
                log::error!("Failed to hide loading screen: {:?}", e);
            }
        }
        None => log::debug!("Loading element not found"),
    }
}
