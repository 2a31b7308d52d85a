//! Core types module - shared data structures and constants
//!
//! This module defines the values that flow between the input normalizer, the
//! navigation controller and the terminal views. All types are plain data with
//! no external dependencies.
//!
//! # Sections
//!
//! The viewer shows exactly one of four full-viewport sections at a time:
//!
//! - **Main**: landing / hero view (initial section)
//! - **Experience**: work history, reached by navigating left from Main
//! - **Projects**: projects and skills, reached by navigating right from Main
//! - **Contact**: contact details, reached by navigating down from Main
//!
//! # Gesture Thresholds
//!
//! Distances are in pixels (touch) or wheel delta units (trackpad):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SWIPE_MIN_DISTANCE_PX` | 100 | Minimum swipe travel on the dominant axis |
//! | `MOUSE_WHEEL_MIN_DELTA` | 100 | Vertical deltas at or above this (with no horizontal delta) are a mouse wheel |
//! | `WHEEL_INTENT_MIN_DELTA` | 30 | Minimum per-event delta for boundary navigation inside scroll regions |
//! | `WHEEL_GESTURE_MIN_DELTA` | 50 | Minimum per-event delta for accumulated gestures |
//! | `TRACKPAD_THRESHOLD` | 100 | Accumulated delta needed to emit a direction |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Event loop tick (~60 FPS) |
//! | `COOLDOWN_MS` | 500 | Window after an accepted direction during which input is inert |
//! | `WHEEL_SETTLE_MS` | 150 | Quiet period that closes a trackpad gesture |
//! | `TRANSITION_PHASE_MS` | 200 | Duration of one exit or enter transition phase |
//!
//! # Examples
//!
//! ```
//! use tui_folio_types::{Direction, Section};
//!
//! assert_eq!(Section::default(), Section::Main);
//! assert_eq!(Section::from_str("projects"), Some(Section::Projects));
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! ```

/// Event loop tick in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// At most one direction is accepted per cooldown window.
pub const COOLDOWN_MS: u32 = 500;

/// Quiet period that closes an accumulated trackpad gesture.
pub const WHEEL_SETTLE_MS: u32 = 150;

/// Duration of one transition phase (exit or enter).
///
/// A full section swap is exit-then-enter, so it takes twice this, which stays
/// below `COOLDOWN_MS`.
pub const TRANSITION_PHASE_MS: u32 = 200;

/// Minimum swipe travel on either axis (strictly greater to count).
pub const SWIPE_MIN_DISTANCE_PX: f32 = 100.0;

/// Vertical wheel deltas at or above this with no horizontal component are
/// treated as discrete mouse-wheel clicks.
pub const MOUSE_WHEEL_MIN_DELTA: f32 = 100.0;

/// Minimum per-event delta for boundary navigation inside a scroll region.
pub const WHEEL_INTENT_MIN_DELTA: f32 = 30.0;

/// Minimum per-event delta for an event to join an accumulated gesture.
pub const WHEEL_GESTURE_MIN_DELTA: f32 = 50.0;

/// Accumulated delta required before a trackpad gesture emits.
pub const TRACKPAD_THRESHOLD: f32 = 100.0;

/// The four full-viewport sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    Main,
    Experience,
    Projects,
    Contact,
}

impl Section {
    /// All sections in display order.
    pub const ALL: [Section; 4] = [
        Section::Main,
        Section::Experience,
        Section::Projects,
        Section::Contact,
    ];

    /// Parse section from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_folio_types::Section;
    ///
    /// assert_eq!(Section::from_str("Main"), Some(Section::Main));
    /// assert_eq!(Section::from_str("experience"), Some(Section::Experience));
    /// assert_eq!(Section::from_str("about"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "main" => Some(Section::Main),
            "experience" => Some(Section::Experience),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Main => "main",
            Section::Experience => "experience",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    /// Human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Main => "Home",
            Section::Experience => "Experience",
            Section::Projects => "Projects",
            Section::Contact => "Contact",
        }
    }

    pub fn is_main(&self) -> bool {
        matches!(self, Section::Main)
    }
}

/// Coarse navigation intent derived from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_folio_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Arrow glyph used by on-screen affordances.
    pub fn arrow(&self) -> char {
        match self {
            Direction::Left => '←',
            Direction::Right => '→',
            Direction::Up => '↑',
            Direction::Down => '↓',
        }
    }

    /// Direction along one axis from the sign of a delta.
    ///
    /// Positive deltas point right / down, matching screen coordinates.
    pub fn from_axis_delta(horizontal: bool, delta: f32) -> Self {
        match (horizontal, delta > 0.0) {
            (true, true) => Direction::Right,
            (true, false) => Direction::Left,
            (false, true) => Direction::Down,
            (false, false) => Direction::Up,
        }
    }
}
