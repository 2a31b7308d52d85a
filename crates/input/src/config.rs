//! Normalizer thresholds and timings.

use crate::types::{
    COOLDOWN_MS, MOUSE_WHEEL_MIN_DELTA, SWIPE_MIN_DISTANCE_PX, TRACKPAD_THRESHOLD,
    WHEEL_GESTURE_MIN_DELTA, WHEEL_INTENT_MIN_DELTA, WHEEL_SETTLE_MS,
};

/// Default distance within which a released touch counts as a tap (one cell).
pub const DEFAULT_TAP_SLOP_PX: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizerConfig {
    pub swipe_min_distance: f32,
    pub tap_slop: f32,
    pub mouse_wheel_min_delta: f32,
    pub wheel_intent_min_delta: f32,
    pub wheel_gesture_min_delta: f32,
    pub trackpad_threshold: f32,
    pub wheel_settle_ms: u32,
    pub cooldown_ms: u32,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            swipe_min_distance: SWIPE_MIN_DISTANCE_PX,
            tap_slop: DEFAULT_TAP_SLOP_PX,
            mouse_wheel_min_delta: MOUSE_WHEEL_MIN_DELTA,
            wheel_intent_min_delta: WHEEL_INTENT_MIN_DELTA,
            wheel_gesture_min_delta: WHEEL_GESTURE_MIN_DELTA,
            trackpad_threshold: TRACKPAD_THRESHOLD,
            wheel_settle_ms: WHEEL_SETTLE_MS,
            cooldown_ms: COOLDOWN_MS,
        }
    }
}
