//! Transition style descriptors.
//!
//! Each section has one style chosen by destination. Offsets are fractions of
//! the viewport: `x = -1.0` is one full width to the left, `y = 1.0` one full
//! height below. Styles are symmetric: a section exits the way it came in.

use crate::types::Section;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
}

impl Offset {
    pub const REST: Offset = Offset {
        x: 0.0,
        y: 0.0,
        opacity: 1.0,
    };

    pub const fn new(x: f32, y: f32, opacity: f32) -> Self {
        Self { x, y, opacity }
    }

    /// Linear interpolation between two offsets, `t` clamped to `0..=1`.
    pub fn lerp(self, to: Offset, t: f32) -> Offset {
        let t = t.clamp(0.0, 1.0);
        Offset {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            opacity: self.opacity + (to.opacity - self.opacity) * t,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionStyle {
    pub enter_start: Offset,
    pub rest: Offset,
    pub exit_end: Offset,
}

impl TransitionStyle {
    pub const FADE: TransitionStyle = TransitionStyle::slide(0.0, 0.0);

    const fn slide(x: f32, y: f32) -> Self {
        let hidden = Offset::new(x, y, 0.0);
        Self {
            enter_start: hidden,
            rest: Offset::REST,
            exit_end: hidden,
        }
    }

    pub fn for_section(section: Section) -> Self {
        match section {
            Section::Main => Self::FADE,
            Section::Experience => Self::slide(-1.0, 0.0),
            Section::Projects => Self::slide(1.0, 0.0),
            Section::Contact => Self::slide(0.0, 1.0),
        }
    }

    pub fn is_symmetric(&self) -> bool {
        self.enter_start == self.exit_end
    }

    /// Offset at `t` of the enter phase, eased.
    pub fn entering(&self, t: f32) -> Offset {
        self.enter_start.lerp(self.rest, ease_out_cubic(t))
    }

    /// Offset at `t` of the exit phase, eased.
    pub fn exiting(&self, t: f32) -> Offset {
        self.rest.lerp(self.exit_end, ease_out_cubic(t))
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
