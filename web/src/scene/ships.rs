//! Ship rotation
//!
//! Ships take turns: each cycle shows exactly one of them with fresh motion
//! parameters and hides the rest.

use rand::Rng;

/// Where and how fast the visible ship flies during one cycle
#[derive(Clone, Debug, PartialEq)]
pub struct ShipPlacement {
    pub index: usize,
    pub top_pct: f64,
    pub duration_s: f64,
}

impl ShipPlacement {
    /// Inline style for ship `index` under this placement.
    pub fn style_for(&self, index: usize) -> String {
        if index == self.index {
            format!(
                "display: block; top: {:.3}%; animation-duration: {:.3}s;",
                self.top_pct, self.duration_s
            )
        } else {
            "display: none;".to_string()
        }
    }
}

/// Round-robin cursor over a fixed ship list
#[derive(Debug, Clone)]
pub struct ShipCycler {
    current: usize,
    count: usize,
}

impl ShipCycler {
    /// `count` is clamped to at least one ship.
    pub fn new(count: usize) -> Self {
        Self {
            current: 0,
            count: count.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Show the current ship and move the cursor to the next one.
    pub fn advance<R: Rng + ?Sized>(&mut self, rng: &mut R) -> ShipPlacement {
        let placement = ShipPlacement {
            index: self.current,
            top_pct: 10.0 + rng.gen::<f64>() * 70.0,
            duration_s: 18.0 + rng.gen::<f64>() * 25.0,
        };
        self.current = (self.current + 1) % self.count;
        placement
    }
}
