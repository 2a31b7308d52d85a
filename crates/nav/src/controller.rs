//! Navigation controller: owns the active section.
//!
//! Direction events go through the [`TransitionTable`]; explicit jumps bypass
//! it. Every change retargets the [`Presence`] so the view can play the exit
//! and enter transitions.

use tracing::{debug, info};

use crate::presence::{Presence, PresenceFrame};
use crate::table::TransitionTable;
use crate::transition::TransitionStyle;
use crate::types::{Direction, Section};

/// A navigation request from gestures or on-screen controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavRequest {
    Direction(Direction),
    Jump(Section),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Gesture(Direction),
    Jump,
}

/// Emitted whenever the active section actually changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionChange {
    pub from: Section,
    pub to: Section,
    pub cause: ChangeCause,
}

#[derive(Debug, Clone)]
pub struct NavigationController {
    section: Section,
    table: TransitionTable,
    presence: Presence,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::starting_at(Section::Main)
    }

    pub fn starting_at(section: Section) -> Self {
        Self {
            section,
            table: TransitionTable::new(),
            presence: Presence::new(section),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Style for the current destination.
    pub fn transition_style(&self) -> TransitionStyle {
        TransitionStyle::for_section(self.section)
    }

    pub fn presence(&self) -> &Presence {
        &self.presence
    }

    pub fn frame(&self) -> PresenceFrame {
        self.presence.frame()
    }

    pub fn apply(&mut self, request: NavRequest) -> Option<SectionChange> {
        match request {
            NavRequest::Direction(direction) => self.apply_direction(direction),
            NavRequest::Jump(section) => self.navigate_to(section),
        }
    }

    pub fn apply_direction(&mut self, direction: Direction) -> Option<SectionChange> {
        let Some(next) = self.table.next(self.section, direction) else {
            debug!(
                section = self.section.as_str(),
                direction = direction.as_str(),
                "no transition for direction"
            );
            return None;
        };
        self.change_to(next, ChangeCause::Gesture(direction))
    }

    /// Unconditional jump; reports no change when already there.
    pub fn navigate_to(&mut self, section: Section) -> Option<SectionChange> {
        self.change_to(section, ChangeCause::Jump)
    }

    fn change_to(&mut self, to: Section, cause: ChangeCause) -> Option<SectionChange> {
        if to == self.section {
            return None;
        }
        let change = SectionChange {
            from: self.section,
            to,
            cause,
        };
        self.section = to;
        self.presence.set_target(to);
        info!(from = change.from.as_str(), to = to.as_str(), "section changed");
        Some(change)
    }

    /// Advance transition animations.
    pub fn update(&mut self, elapsed_ms: u32) {
        self.presence.update(elapsed_ms);
    }
}

impl Default for NavigationController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_main() {
        let nav = NavigationController::new();
        assert_eq!(nav.section(), Section::Main);
        assert!(nav.presence().is_settled());
    }

    #[test]
    fn direction_changes_follow_the_table() {
        let mut nav = NavigationController::new();
        let change = nav.apply_direction(Direction::Left).unwrap();
        assert_eq!(change.from, Section::Main);
        assert_eq!(change.to, Section::Experience);
        assert_eq!(change.cause, ChangeCause::Gesture(Direction::Left));

        assert_eq!(nav.apply_direction(Direction::Down), None);
        assert_eq!(nav.section(), Section::Experience);

        nav.apply_direction(Direction::Right).unwrap();
        assert_eq!(nav.section(), Section::Main);
    }

    #[test]
    fn jump_bypasses_the_table() {
        let mut nav = NavigationController::starting_at(Section::Experience);
        let change = nav.navigate_to(Section::Projects).unwrap();
        assert_eq!(change.cause, ChangeCause::Jump);
        assert_eq!(nav.section(), Section::Projects);

        assert_eq!(nav.navigate_to(Section::Projects), None);
    }

    #[test]
    fn transition_style_tracks_destination() {
        let mut nav = NavigationController::new();
        nav.apply(NavRequest::Direction(Direction::Down));
        assert_eq!(
            nav.transition_style(),
            TransitionStyle::for_section(Section::Contact)
        );
    }

    #[test]
    fn previous_section_stays_mounted_until_exit_completes() {
        let mut nav = NavigationController::new();
        nav.apply(NavRequest::Direction(Direction::Right));
        assert_eq!(nav.section(), Section::Projects);
        assert_eq!(nav.frame().section, Section::Main);

        nav.update(crate::types::TRANSITION_PHASE_MS);
        assert_eq!(nav.frame().section, Section::Projects);
    }
}
