//! Trackpad gesture accumulator.
//!
//! Terminal and trackpad scroll input arrives as bursts of small deltas. A
//! burst is one gesture: deltas are summed until the stream goes quiet for
//! `settle_ms`, then the total is judged once and the accumulator resets.

use crate::gesture::{dominant_direction, WheelDelta};
use crate::types::Direction;

#[derive(Debug, Clone)]
pub struct WheelAccumulator {
    dx: f32,
    dy: f32,
    active: bool,
    quiet_ms: u32,
    settle_ms: u32,
    threshold: f32,
}

impl WheelAccumulator {
    pub fn new(settle_ms: u32, threshold: f32) -> Self {
        Self {
            dx: 0.0,
            dy: 0.0,
            active: false,
            quiet_ms: 0,
            settle_ms,
            threshold,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn totals(&self) -> (f32, f32) {
        (self.dx, self.dy)
    }

    /// Add one event to the current gesture and restart the settle window.
    pub fn push(&mut self, delta: WheelDelta) {
        if !self.active {
            self.active = true;
            self.dx = 0.0;
            self.dy = 0.0;
        }
        self.dx += delta.dx;
        self.dy += delta.dy;
        self.quiet_ms = 0;
    }

    /// Advance the settle window.
    ///
    /// Returns the gesture direction when the window closes on a total above
    /// the threshold. The accumulator resets whenever the window closes.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Direction> {
        if !self.active {
            return None;
        }
        self.quiet_ms = self.quiet_ms.saturating_add(elapsed_ms);
        if self.quiet_ms < self.settle_ms {
            return None;
        }

        let direction = if self.dx.abs() > self.threshold || self.dy.abs() > self.threshold {
            Some(dominant_direction(self.dx, self.dy))
        } else {
            None
        };
        self.reset();
        direction
    }

    pub fn reset(&mut self) {
        self.dx = 0.0;
        self.dy = 0.0;
        self.active = false;
        self.quiet_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_after_quiet_period_when_total_exceeds_threshold() {
        let mut acc = WheelAccumulator::new(150, 100.0);
        acc.push(WheelDelta::new(0.0, 60.0));
        assert_eq!(acc.update(16), None);
        acc.push(WheelDelta::new(0.0, 60.0));

        assert_eq!(acc.update(149), None);
        assert_eq!(acc.update(1), Some(Direction::Down));
        assert!(!acc.is_active());
    }

    #[test]
    fn new_events_restart_the_window() {
        let mut acc = WheelAccumulator::new(150, 100.0);
        for _ in 0..5 {
            acc.push(WheelDelta::new(-60.0, 0.0));
            assert_eq!(acc.update(100), None);
        }
        assert_eq!(acc.update(50), Some(Direction::Left));
    }

    #[test]
    fn sub_threshold_gesture_resets_without_emitting() {
        let mut acc = WheelAccumulator::new(150, 100.0);
        acc.push(WheelDelta::new(0.0, 60.0));
        assert_eq!(acc.update(200), None);
        assert!(!acc.is_active());
        assert_eq!(acc.totals(), (0.0, 0.0));

        // The next gesture starts from zero.
        acc.push(WheelDelta::new(0.0, 60.0));
        assert_eq!(acc.update(200), None);
    }

    #[test]
    fn opposing_deltas_cancel_out() {
        let mut acc = WheelAccumulator::new(150, 100.0);
        acc.push(WheelDelta::new(0.0, 80.0));
        acc.push(WheelDelta::new(0.0, -80.0));
        acc.push(WheelDelta::new(0.0, 80.0));
        assert_eq!(acc.update(150), None);
    }

    #[test]
    fn idle_accumulator_never_emits() {
        let mut acc = WheelAccumulator::new(150, 100.0);
        assert_eq!(acc.update(10_000), None);
    }
}
