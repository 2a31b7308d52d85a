//! Input normalizer (controller-facing).
//!
//! Turns touch swipes, trackpad/wheel deltas and arrow keys into one stream of
//! coarse [`Direction`](crate::types::Direction) events, at most one per
//! cooldown window. The classifiers in [`gesture`] are pure; [`handler`] adds
//! the cooldown and wheel-settle timers; [`map`] adapts `crossterm` events.

pub mod config;
pub mod cooldown;
pub mod gesture;
pub mod handler;
pub mod map;
pub mod wheel;

pub use tui_folio_types as types;

pub use config::NormalizerConfig;
pub use cooldown::CooldownGate;
pub use gesture::{
    classify_bounded_wheel, classify_swipe, is_trackpad_like, BoundaryDecision, ScrollRegion,
    TouchPoint, WheelDelta, WheelTarget,
};
pub use handler::{InputNormalizer, InputOutcome};
pub use map::{classify_key, map_mouse_event, should_quit, CellMetrics, PointerInput};
pub use wheel::WheelAccumulator;
