//! Pure gesture classifiers.
//!
//! Each input modality has its own decision procedure from a raw sample to an
//! optional [`Direction`]. None of these functions keep state or look at the
//! clock; debouncing lives in [`crate::handler::InputNormalizer`].

use crate::types::Direction;

/// A touch (or pointer press) position in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One wheel / trackpad event worth of delta.
///
/// Positive `dx` scrolls right, positive `dy` scrolls down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub dx: f32,
    pub dy: f32,
}

impl WheelDelta {
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}

/// Scroll geometry of an independently scrollable content region.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollRegion {
    pub scroll_top: f32,
    pub scroll_left: f32,
    /// Total content height.
    pub scroll_height: f32,
    /// Visible height.
    pub client_height: f32,
}

impl ScrollRegion {
    pub fn at_top(&self) -> bool {
        self.scroll_top <= 0.0
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_top >= self.scroll_height - self.client_height
    }

    pub fn at_start_edge(&self) -> bool {
        self.scroll_left <= 0.0
    }
}

/// What a wheel event landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WheelTarget {
    /// Inside a region that scrolls on its own.
    Region(ScrollRegion),
    /// Anywhere else on the viewport.
    Surface,
}

/// Outcome of a wheel event inside a scroll region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryDecision {
    /// The gesture pushes past a boundary: navigate and swallow the scroll.
    Navigate(Direction),
    /// Ordinary content scrolling: leave the event to the host.
    PassThrough,
}

/// Direction along the dominant axis of a delta pair.
///
/// Ties go to the vertical axis.
pub fn dominant_direction(dx: f32, dy: f32) -> Direction {
    if dx.abs() > dy.abs() {
        Direction::from_axis_delta(true, dx)
    } else {
        Direction::from_axis_delta(false, dy)
    }
}

/// Classify a completed touch gesture.
///
/// Emits only when travel on either axis is strictly greater than
/// `min_distance`.
pub fn classify_swipe(start: TouchPoint, end: TouchPoint, min_distance: f32) -> Option<Direction> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if !dx.is_finite() || !dy.is_finite() {
        return None;
    }
    if dx.abs() > min_distance || dy.abs() > min_distance {
        Some(dominant_direction(dx, dy))
    } else {
        None
    }
}

/// Whether a touch ended close enough to where it started to count as a tap.
pub fn is_tap(start: TouchPoint, end: TouchPoint, slop: f32) -> bool {
    (end.x - start.x).abs() <= slop && (end.y - start.y).abs() <= slop
}

/// Smooth trackpad deltas versus discrete mouse-wheel clicks.
///
/// Any horizontal component, or a small vertical one, reads as a trackpad.
pub fn is_trackpad_like(delta: WheelDelta, mouse_wheel_min_delta: f32) -> bool {
    delta.dx.abs() > 0.0 || delta.dy.abs() < mouse_wheel_min_delta
}

/// Decide whether a trackpad event inside a scroll region navigates.
///
/// Horizontal intent navigates only at the start edge; vertical intent only
/// when scrolling up at the top or down at the bottom.
pub fn classify_bounded_wheel(
    delta: WheelDelta,
    region: &ScrollRegion,
    intent_min_delta: f32,
) -> BoundaryDecision {
    let ax = delta.dx.abs();
    let ay = delta.dy.abs();

    if ax > ay && ax > intent_min_delta && region.at_start_edge() {
        return BoundaryDecision::Navigate(Direction::from_axis_delta(true, delta.dx));
    }

    if ay > ax && ay > intent_min_delta {
        let past_top = delta.dy < 0.0 && region.at_top();
        let past_bottom = delta.dy > 0.0 && region.at_bottom();
        if past_top || past_bottom {
            return BoundaryDecision::Navigate(Direction::from_axis_delta(false, delta.dy));
        }
    }

    BoundaryDecision::PassThrough
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(scroll_top: f32) -> ScrollRegion {
        ScrollRegion {
            scroll_top,
            scroll_left: 0.0,
            scroll_height: 1000.0,
            client_height: 400.0,
        }
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let start = TouchPoint::new(200.0, 200.0);
        assert_eq!(classify_swipe(start, TouchPoint::new(299.0, 250.0), 100.0), None);
        assert_eq!(classify_swipe(start, TouchPoint::new(101.0, 140.0), 100.0), None);
        // Exactly at the threshold does not count.
        assert_eq!(classify_swipe(start, TouchPoint::new(300.0, 200.0), 100.0), None);
    }

    #[test]
    fn swipe_picks_dominant_axis_and_sign() {
        let start = TouchPoint::new(500.0, 500.0);
        assert_eq!(
            classify_swipe(start, TouchPoint::new(650.0, 540.0), 100.0),
            Some(Direction::Right)
        );
        assert_eq!(
            classify_swipe(start, TouchPoint::new(340.0, 450.0), 100.0),
            Some(Direction::Left)
        );
        assert_eq!(
            classify_swipe(start, TouchPoint::new(520.0, 700.0), 100.0),
            Some(Direction::Down)
        );
        assert_eq!(
            classify_swipe(start, TouchPoint::new(480.0, 350.0), 100.0),
            Some(Direction::Up)
        );
    }

    #[test]
    fn swipe_with_non_finite_coordinates_is_ignored() {
        let start = TouchPoint::new(0.0, 0.0);
        assert_eq!(classify_swipe(start, TouchPoint::new(f32::NAN, 500.0), 100.0), None);
    }

    #[test]
    fn trackpad_classification() {
        assert!(is_trackpad_like(WheelDelta::new(1.0, 120.0), 100.0));
        assert!(is_trackpad_like(WheelDelta::new(0.0, 40.0), 100.0));
        assert!(!is_trackpad_like(WheelDelta::new(0.0, 100.0), 100.0));
        assert!(!is_trackpad_like(WheelDelta::new(0.0, -240.0), 100.0));
    }

    #[test]
    fn vertical_scroll_mid_content_passes_through() {
        let mid = region(300.0);
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, 80.0), &mid, 30.0),
            BoundaryDecision::PassThrough
        );
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, -80.0), &mid, 30.0),
            BoundaryDecision::PassThrough
        );
    }

    #[test]
    fn vertical_scroll_past_boundaries_navigates() {
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, -80.0), &region(0.0), 30.0),
            BoundaryDecision::Navigate(Direction::Up)
        );
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, 80.0), &region(600.0), 30.0),
            BoundaryDecision::Navigate(Direction::Down)
        );
        // Scrolling down from the top is ordinary scrolling.
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, 80.0), &region(0.0), 30.0),
            BoundaryDecision::PassThrough
        );
    }

    #[test]
    fn small_deltas_never_navigate_inside_regions() {
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(0.0, -30.0), &region(0.0), 30.0),
            BoundaryDecision::PassThrough
        );
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(25.0, 0.0), &region(0.0), 30.0),
            BoundaryDecision::PassThrough
        );
    }

    #[test]
    fn horizontal_intent_requires_start_edge() {
        let at_start = region(300.0);
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(60.0, 5.0), &at_start, 30.0),
            BoundaryDecision::Navigate(Direction::Right)
        );
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(-60.0, 5.0), &at_start, 30.0),
            BoundaryDecision::Navigate(Direction::Left)
        );

        let scrolled = ScrollRegion {
            scroll_left: 40.0,
            ..at_start
        };
        assert_eq!(
            classify_bounded_wheel(WheelDelta::new(60.0, 5.0), &scrolled, 30.0),
            BoundaryDecision::PassThrough
        );
    }

    #[test]
    fn tap_detection_uses_slop() {
        let start = TouchPoint::new(10.0, 10.0);
        assert!(is_tap(start, TouchPoint::new(14.0, 6.0), 8.0));
        assert!(!is_tap(start, TouchPoint::new(30.0, 10.0), 8.0));
    }
}
