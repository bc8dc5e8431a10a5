//! Externally-owned interaction state: the current seed point and
//! the orbit iteration budget.
//!
//! The numerical core has no notion of a "current" seed or budget;
//! whatever layer handles pointer and key events owns a Controls
//! value, mutates it here, and passes the values into the tracer on
//! every event.  The budget is clamped to a fixed inclusive range,
//! matching the original slider's 0..=100 bounds.
use num::clamp;

use planes::PlaneMapper;

/// The default starting budget, matching the original slider.
pub const DEFAULT_BUDGET: usize = 25;

/// The inclusive upper bound on the budget.
pub const BUDGET_CAP: usize = 100;

/// The seed point and iteration budget for the orbit overlay.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Controls {
    seed: (i64, i64),
    budget: usize,
    cap: usize,
}

impl Controls {
    /// Builds interaction state with an explicit seed, budget, and
    /// budget cap.  The budget is clamped into `[0, cap]`.
    pub fn new(seed: (i64, i64), budget: usize, cap: usize) -> Controls {
        Controls {
            seed,
            budget: clamp(budget, 0, cap),
            cap,
        }
    }

    /// The original program's startup state: the seed at the center
    /// of the canvas, a budget of 25, capped at 100.
    pub fn centered(plane: &PlaneMapper) -> Controls {
        let seed = ((plane.width() / 2) as i64, (plane.height() / 2) as i64);
        Controls::new(seed, DEFAULT_BUDGET, BUDGET_CAP)
    }

    /// The current seed point.
    pub fn seed(&self) -> (i64, i64) {
        self.seed
    }

    /// The current iteration budget.
    pub fn budget(&self) -> usize {
        self.budget
    }

    /// Moves the seed; called on pointer press and drag.
    pub fn set_seed(&mut self, x: i64, y: i64) {
        self.seed = (x, y);
    }

    /// Sets the budget outright (the slider), clamped to the cap.
    pub fn set_budget(&mut self, budget: usize) {
        self.budget = clamp(budget, 0, self.cap);
    }

    /// Raises the budget by one, clamping at the cap.
    pub fn increment(&mut self) {
        self.budget = clamp(self.budget + 1, 0, self.cap);
    }

    /// Lowers the budget by one, clamping at zero.
    pub fn decrement(&mut self) {
        self.budget = self.budget.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num::Complex;

    fn controls() -> Controls {
        let pm = PlaneMapper::new(1500, Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        Controls::centered(&pm)
    }

    #[test]
    fn starts_centered_with_the_default_budget() {
        let c = controls();
        assert_eq!(c.seed(), (750, 500));
        assert_eq!(c.budget(), 25);
    }

    #[test]
    fn increments_clamp_at_the_cap() {
        let mut c = controls();
        for _ in 0..80 {
            c.increment();
        }
        assert_eq!(c.budget(), 100);
    }

    #[test]
    fn decrements_clamp_at_zero() {
        let mut c = controls();
        c.set_budget(100);
        for _ in 0..150 {
            c.decrement();
        }
        assert_eq!(c.budget(), 0);
    }

    #[test]
    fn set_budget_clamps_to_the_cap() {
        let mut c = controls();
        c.set_budget(400);
        assert_eq!(c.budget(), 100);
    }

    #[test]
    fn drag_moves_the_seed() {
        let mut c = controls();
        c.set_seed(-12, 2000);
        assert_eq!(c.seed(), (-12, 2000));
    }
}
