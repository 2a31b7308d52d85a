//! Direction-triggered section transitions.
//!
//! The table lists every specific transition. A separate fallback rule sends
//! `Up` from any non-Main section home; it is consulted only when the table
//! has no row for the pair.

use crate::types::{Direction, Section};

/// Fixed `(from, direction) -> to` rows.
pub const TRANSITIONS: [(Section, Direction, Section); 8] = [
    (Section::Main, Direction::Left, Section::Experience),
    (Section::Main, Direction::Right, Section::Projects),
    (Section::Main, Direction::Down, Section::Contact),
    (Section::Experience, Direction::Right, Section::Main),
    (Section::Projects, Direction::Left, Section::Main),
    (Section::Contact, Direction::Up, Section::Main),
    (Section::Experience, Direction::Up, Section::Main),
    (Section::Projects, Direction::Up, Section::Main),
];

/// Immutable transition lookup.
#[derive(Debug, Clone, Copy)]
pub struct TransitionTable {
    rows: &'static [(Section, Direction, Section)],
}

impl TransitionTable {
    pub const fn new() -> Self {
        Self { rows: &TRANSITIONS }
    }

    /// Specific row for the pair, if any.
    pub fn lookup(&self, from: Section, direction: Direction) -> Option<Section> {
        self.rows
            .iter()
            .find(|(f, d, _)| *f == from && *d == direction)
            .map(|&(_, _, to)| to)
    }

    /// Table row first, then the fallback rule.
    pub fn next(&self, from: Section, direction: Direction) -> Option<Section> {
        self.lookup(from, direction)
            .or_else(|| fallback(from, direction))
    }

    /// Direction that reaches `to` from Main, if a row exists.
    pub fn entry_direction(&self, to: Section) -> Option<Direction> {
        self.rows
            .iter()
            .find(|(f, _, t)| *f == Section::Main && *t == to)
            .map(|&(_, d, _)| d)
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::new()
    }
}

/// `Up` from any non-Main section returns to Main.
pub fn fallback(from: Section, direction: Direction) -> Option<Section> {
    (direction == Direction::Up && !from.is_main()).then_some(Section::Main)
}
