//! Debounced input normalizer.
//!
//! Composes the touch, wheel and keyboard classifiers from [`crate::gesture`]
//! behind a single [`CooldownGate`]. Raw events are always observed (touch
//! origins are captured, wheel deltas accumulate) but while the gate is armed,
//! or the normalizer is disabled, no direction comes out.
//!
//! Timers advance through [`InputNormalizer::update`], which the event loop
//! calls once per tick with the elapsed milliseconds.

use crossterm::event::KeyCode;
use tracing::debug;

use crate::config::NormalizerConfig;
use crate::cooldown::CooldownGate;
use crate::gesture::{
    classify_bounded_wheel, classify_swipe, is_tap, is_trackpad_like, BoundaryDecision,
    TouchPoint, WheelDelta, WheelTarget,
};
use crate::map::classify_key;
use crate::types::Direction;
use crate::wheel::WheelAccumulator;

/// Result of feeding one raw event to the normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputOutcome {
    /// Accepted navigation direction, if any.
    pub direction: Option<Direction>,
    /// The host should not apply its default behavior (scrolling) for this event.
    pub prevent_default: bool,
    /// Set when a touch ended within the tap slop of its origin.
    pub tap: Option<TouchPoint>,
}

impl InputOutcome {
    pub const IGNORED: InputOutcome = InputOutcome {
        direction: None,
        prevent_default: false,
        tap: None,
    };

    fn consumed(direction: Option<Direction>) -> Self {
        Self {
            direction,
            prevent_default: true,
            tap: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputNormalizer {
    config: NormalizerConfig,
    cooldown: CooldownGate,
    wheel: WheelAccumulator,
    touch_origin: Option<TouchPoint>,
    enabled: bool,
}

impl InputNormalizer {
    pub fn new() -> Self {
        Self::with_config(NormalizerConfig::default())
    }

    pub fn with_config(config: NormalizerConfig) -> Self {
        Self {
            config,
            cooldown: CooldownGate::new(config.cooldown_ms),
            wheel: WheelAccumulator::new(config.wheel_settle_ms, config.trackpad_threshold),
            touch_origin: None,
            enabled: true,
        }
    }

    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown.is_active()
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable emission. Bookkeeping continues while disabled.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn emit(&mut self, direction: Direction) -> Option<Direction> {
        if !self.enabled {
            debug!(direction = direction.as_str(), "navigation disabled; dropping gesture");
            return None;
        }
        if !self.cooldown.try_accept() {
            debug!(direction = direction.as_str(), "cooling down; dropping gesture");
            return None;
        }
        debug!(direction = direction.as_str(), "navigation gesture accepted");
        Some(direction)
    }

    pub fn touch_start(&mut self, point: TouchPoint) -> InputOutcome {
        self.touch_origin = Some(point);
        InputOutcome::IGNORED
    }

    pub fn touch_end(&mut self, point: TouchPoint) -> InputOutcome {
        let Some(origin) = self.touch_origin.take() else {
            return InputOutcome::IGNORED;
        };

        if let Some(direction) = classify_swipe(origin, point, self.config.swipe_min_distance) {
            return InputOutcome {
                direction: self.emit(direction),
                prevent_default: false,
                tap: None,
            };
        }

        InputOutcome {
            direction: None,
            prevent_default: false,
            tap: is_tap(origin, point, self.config.tap_slop).then_some(point),
        }
    }

    /// Drop a touch gesture that will not complete.
    pub fn touch_cancel(&mut self) {
        self.touch_origin = None;
    }

    pub fn wheel(&mut self, delta: WheelDelta, target: WheelTarget) -> InputOutcome {
        if !is_trackpad_like(delta, self.config.mouse_wheel_min_delta) {
            return InputOutcome::IGNORED;
        }

        match target {
            WheelTarget::Region(region) => {
                match classify_bounded_wheel(delta, &region, self.config.wheel_intent_min_delta) {
                    BoundaryDecision::Navigate(direction) => {
                        InputOutcome::consumed(self.emit(direction))
                    }
                    BoundaryDecision::PassThrough => InputOutcome::IGNORED,
                }
            }
            WheelTarget::Surface => {
                let min = self.config.wheel_gesture_min_delta;
                if delta.dx.abs() > min || delta.dy.abs() > min {
                    self.wheel.push(delta);
                    InputOutcome::consumed(None)
                } else {
                    InputOutcome::IGNORED
                }
            }
        }
    }

    pub fn key(&mut self, code: KeyCode) -> InputOutcome {
        match classify_key(code) {
            Some(direction) => InputOutcome::consumed(self.emit(direction)),
            None => InputOutcome::IGNORED,
        }
    }

    /// Advance timers; returns a direction when a trackpad gesture settles.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Direction> {
        self.cooldown.update(elapsed_ms);
        let settled = self.wheel.update(elapsed_ms)?;
        self.emit(settled)
    }

    pub fn reset(&mut self) {
        self.cooldown.reset();
        self.wheel.reset();
        self.touch_origin = None;
    }
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
