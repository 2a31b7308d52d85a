//! On-screen navigation affordances.
//!
//! Main shows one entry arrow per reachable section. Every other section shows
//! a single return arrow pointing back the way it was entered.

use arrayvec::ArrayVec;

use crate::controller::NavRequest;
use crate::table::TransitionTable;
use crate::types::{Direction, Section};

pub const RETURN_LABEL: &str = "Back to Home";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffordanceKind {
    Entry,
    Return,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affordance {
    pub kind: AffordanceKind,
    /// Which way the arrow points; also the screen edge it sits on.
    pub direction: Direction,
    pub target: Section,
    pub label: &'static str,
    pub hint: Option<&'static str>,
}

impl Affordance {
    /// Activation always jumps straight to the target.
    pub fn activate(&self) -> NavRequest {
        NavRequest::Jump(self.target)
    }
}

fn entry_hint(target: Section) -> &'static str {
    match target {
        Section::Experience => "Swipe left for Experience",
        Section::Projects => "Swipe right for Projects",
        Section::Contact => "Swipe down for Contact",
        Section::Main => "",
    }
}

pub fn affordances(section: Section) -> ArrayVec<Affordance, 3> {
    let table = TransitionTable::new();
    let mut out = ArrayVec::new();

    if section.is_main() {
        for target in [Section::Experience, Section::Projects, Section::Contact] {
            if let Some(direction) = table.entry_direction(target) {
                out.push(Affordance {
                    kind: AffordanceKind::Entry,
                    direction,
                    target,
                    label: target.title(),
                    hint: Some(entry_hint(target)),
                });
            }
        }
    } else if let Some(entry) = table.entry_direction(section) {
        out.push(Affordance {
            kind: AffordanceKind::Return,
            direction: entry.opposite(),
            target: Section::Main,
            label: RETURN_LABEL,
            hint: None,
        });
    }

    out
}
