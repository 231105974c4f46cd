//! Starfield Background Component
//! Draws the star layer as an SVG and redraws it whenever the theme changes

use leptos::prelude::*;

use crate::scene::generate_stars;
use crate::state::use_theme_context;
use crate::utils::constants::STAR_OPACITY;

#[component]
pub fn Starfield() -> impl IntoView {
    let theme_ctx = use_theme_context();
    let opacity = STAR_OPACITY.to_string();

    let stars = move || {
        let theme = theme_ctx.get();
        let stars = generate_stars(&mut rand::thread_rng(), theme);
        log::debug!("[STARFIELD] Drew {} stars for {} theme", stars.len(), theme.class());

        let opacity = opacity.clone();
        stars
            .into_iter()
            .map(|star| {
                view! {
                    <circle
                        cx=format!("{:.3}%", star.x_pct)
                        cy=format!("{:.3}%", star.y_pct)
                        r=format!("{:.3}", star.radius)
                        fill=star.fill
                        opacity=opacity.clone()
                    ></circle>
                }
            })
            .collect_view()
    };

    view! {
        <svg id="stars" class="starfield" width="100%" height="100%">
            {stars}
        </svg>
    }
}
