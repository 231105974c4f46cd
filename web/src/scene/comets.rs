//! Comet spawning

use rand::Rng;

/// A transient comet. Offsets start off-screen (negative percent).
#[derive(Clone, Debug, PartialEq)]
pub struct Comet {
    pub id: u64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl Comet {
    pub fn style(&self) -> String {
        format!(
            "left: {:.3}%; top: {:.3}%; animation-duration: {:.3}s; animation-delay: {:.3}s;",
            self.left_pct, self.top_pct, self.duration_s, self.delay_s
        )
    }
}

/// Hands out comets with unique ids
#[derive(Debug, Default)]
pub struct CometSpawner {
    next_id: u64,
}

impl CometSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Comet {
        let id = self.next_id;
        self.next_id += 1;
        Comet {
            id,
            left_pct: -20.0 - rng.gen::<f64>() * 30.0,
            top_pct: -20.0 - rng.gen::<f64>() * 40.0,
            duration_s: 4.0 + rng.gen::<f64>() * 4.0,
            delay_s: rng.gen::<f64>() * 2.0,
        }
    }
}
