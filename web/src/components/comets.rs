//! Comet layer
//! Spawns a comet every few seconds; each one removes itself after a fixed delay

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::scene::{Comet, CometSpawner};
use crate::utils::constants::{COMET_INTERVAL_MS, COMET_LIFETIME_MS};

#[component]
pub fn CometLayer() -> impl IntoView {
    let comets = RwSignal::new(Vec::<Comet>::new());
    let spawner = Rc::new(RefCell::new(CometSpawner::new()));

    let spawn_comet = move || {
        let comet = spawner.borrow_mut().spawn(&mut rand::thread_rng());
        let id = comet.id;
        comets.update(|list| list.push(comet));

        leptos::task::spawn_local(async move {
            TimeoutFuture::new(COMET_LIFETIME_MS).await;
            let _ = comets.try_update(|list| list.retain(|c| c.id != id));
        });
    };

    match set_interval_with_handle(spawn_comet, Duration::from_millis(COMET_INTERVAL_MS)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("[COMETS] Failed to start timer: {:?}", e),
    }

    view! {
        <div class="comet-layer">
            <For
                each=move || comets.get()
                key=|comet| comet.id
                children=|comet: Comet| view! { <div class="comet" style=comet.style()></div> }
            />
        </div>
    }
}
