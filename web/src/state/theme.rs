//! Theme state management

use leptos::prelude::*;

use crate::scene::Theme;

/// Current day/night mode
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            theme: RwSignal::new(initial),
        }
    }

    pub fn get(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggle());
    }
}

pub fn provide_theme_context() -> ThemeContext {
    let context = ThemeContext::new(Theme::default());
    provide_context(context);
    context
}

pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}
