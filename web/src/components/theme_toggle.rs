//! Day/night switch

use leptos::prelude::*;

use crate::scene::Theme;
use crate::state::use_theme_context;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme_ctx = use_theme_context();

    Effect::new(move |_| apply_body_class(theme_ctx.get()));

    let on_click = move |_| {
        theme_ctx.toggle();
        log::info!("[THEME] Switched to {}", theme_ctx.theme.get_untracked().class());
    };

    view! {
        <span id="themeIcon" class="theme-icon" title="Toggle theme" on:click=on_click>
            {move || theme_ctx.get().icon()}
        </span>
    }
}

/// Put the theme class on `<body>` and take the other one off.
fn apply_body_class(theme: Theme) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        log::warn!("[THEME] No document body, cannot apply {}", theme.class());
        return;
    };

    let classes = body.class_list();
    if let Err(e) = classes.remove_1(theme.toggle().class()) {
        log::error!("[THEME] Failed to remove class: {:?}", e);
    }
    if let Err(e) = classes.add_1(theme.class()) {
        log::error!("[THEME] Failed to add class: {:?}", e);
    }
}
