//! Ship layer
//! Shows one ship at a time, switching to the next on a fixed period

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::prelude::*;

use crate::scene::{ShipCycler, ShipPlacement};
use crate::utils::constants::{SHIP_COUNT, SHIP_INTERVAL_MS};

const SHIP_GLYPHS: [&str; SHIP_COUNT] = ["🚀", "🛸"];

#[component]
pub fn ShipLayer() -> impl IntoView {
    let placement = RwSignal::new(None::<ShipPlacement>);
    let cycler = Rc::new(RefCell::new(ShipCycler::new(SHIP_COUNT)));

    let cycle = move || {
        let next = cycler.borrow_mut().advance(&mut rand::thread_rng());
        log::debug!("[SHIPS] Ship {} at {:.1}% for {:.1}s", next.index + 1, next.top_pct, next.duration_s);
        placement.set(Some(next));
    };

    cycle();
    match set_interval_with_handle(cycle, Duration::from_millis(SHIP_INTERVAL_MS)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("[SHIPS] Failed to start timer: {:?}", e),
    }

    let ships = SHIP_GLYPHS
        .iter()
        .enumerate()
        .map(move |(index, glyph)| {
            let style = move || {
                placement.with(|p| match p {
                    Some(p) => p.style_for(index),
                    None => "display: none;".to_string(),
                })
            };
            view! {
                <div id=format!("ship{}", index + 1) class="ship" style=style>
                    {*glyph}
                </div>
            }
        })
        .collect_view();

    view! { <div class="ship-layer">{ships}</div> }
}
