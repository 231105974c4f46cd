//! Starfield generation

use rand::Rng;

use super::Theme;
use crate::utils::constants::{MAX_STAR_RADIUS, STAR_COUNT};

/// One marker of the star layer, positioned in percent of the viewport
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub x_pct: f64,
    pub y_pct: f64,
    pub radius: f64,
    pub fill: &'static str,
}

/// Produce a fresh star layer for `theme`.
///
/// Always returns [`STAR_COUNT`] stars; previous layers are never reused.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, theme: Theme) -> Vec<Star> {
    let fill = theme.star_fill();
    (0..STAR_COUNT)
        .map(|_| Star {
            x_pct: rng.gen::<f64>() * 100.0,
            y_pct: rng.gen::<f64>() * 100.0,
            radius: rng.gen::<f64>() * MAX_STAR_RADIUS,
            fill,
        })
        .collect()
}
