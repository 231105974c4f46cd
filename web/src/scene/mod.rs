//! Scene model
//!
//! Randomized parameters for the decorative layers. Nothing here touches the
//! DOM, so every generator takes its `Rng` from the caller.

pub mod comets;
pub mod ships;
pub mod stars;
pub mod theme;

pub use comets::{Comet, CometSpawner};
pub use ships::{ShipCycler, ShipPlacement};
pub use stars::{generate_stars, Star};
pub use theme::Theme;
