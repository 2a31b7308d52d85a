//! Exit-then-enter presence tracking.
//!
//! Exactly one section is mounted at a time. When the active section changes,
//! the mounted section first plays its exit transition; only then is the new
//! section mounted and played in. There is never an abrupt cut.

use crate::transition::{ease_out_cubic, Offset, TransitionStyle};
use crate::types::{Section, TRANSITION_PHASE_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle(Section),
    Exiting {
        from: Section,
        to: Section,
        elapsed_ms: u32,
    },
    Entering {
        section: Section,
        elapsed_ms: u32,
    },
}

/// What to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresenceFrame {
    pub section: Section,
    pub offset: Offset,
}

#[derive(Debug, Clone)]
pub struct Presence {
    phase: Phase,
    phase_ms: u32,
}

impl Presence {
    pub fn new(section: Section) -> Self {
        Self::with_phase_ms(section, TRANSITION_PHASE_MS)
    }

    pub fn with_phase_ms(section: Section, phase_ms: u32) -> Self {
        Self {
            phase: Phase::Idle(section),
            phase_ms: phase_ms.max(1),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Section currently mounted (the exiting one during an exit).
    pub fn mounted(&self) -> Section {
        match self.phase {
            Phase::Idle(section) => section,
            Phase::Exiting { from, .. } => from,
            Phase::Entering { section, .. } => section,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.phase, Phase::Idle(_))
    }

    /// Retarget to a new active section.
    pub fn set_target(&mut self, to: Section) {
        self.phase = match self.phase {
            Phase::Idle(current) if current == to => Phase::Idle(current),
            Phase::Idle(current) => Phase::Exiting {
                from: current,
                to,
                elapsed_ms: 0,
            },
            Phase::Exiting {
                from, elapsed_ms, ..
            } => Phase::Exiting {
                from,
                to,
                elapsed_ms,
            },
            Phase::Entering {
                section,
                elapsed_ms,
            } if section == to => Phase::Entering {
                section,
                elapsed_ms,
            },
            // Leave from the offset the enter had reached.
            Phase::Entering {
                section,
                elapsed_ms,
            } => Phase::Exiting {
                from: section,
                to,
                elapsed_ms: self.mirrored_exit_ms(elapsed_ms),
            },
        };
    }

    /// Exit time whose eased offset equals the enter offset at `enter_ms`.
    ///
    /// Styles exit to where they entered from, so the exit must cover the
    /// remaining `1 - ease(t)` of the way: `ease(t_exit) = 1 - ease(t_enter)`,
    /// which for a cubic ease-out gives `t_exit = 1 - cbrt(ease(t_enter))`.
    fn mirrored_exit_ms(&self, enter_ms: u32) -> u32 {
        let entered = ease_out_cubic(enter_ms as f32 / self.phase_ms as f32);
        let t_exit = 1.0 - entered.cbrt();
        ((t_exit * self.phase_ms as f32).round() as u32).min(self.phase_ms)
    }

    pub fn update(&mut self, elapsed_ms: u32) {
        self.phase = match self.phase {
            Phase::Idle(section) => Phase::Idle(section),
            Phase::Exiting {
                from,
                to,
                elapsed_ms: e,
            } => {
                let e = e.saturating_add(elapsed_ms);
                if e < self.phase_ms {
                    Phase::Exiting {
                        from,
                        to,
                        elapsed_ms: e,
                    }
                } else if from == to {
                    Phase::Entering {
                        section: to,
                        elapsed_ms: 0,
                    }
                } else {
                    Phase::Entering {
                        section: to,
                        elapsed_ms: (e - self.phase_ms).min(self.phase_ms),
                    }
                }
            }
            Phase::Entering {
                section,
                elapsed_ms: e,
            } => {
                let e = e.saturating_add(elapsed_ms);
                if e < self.phase_ms {
                    Phase::Entering {
                        section,
                        elapsed_ms: e,
                    }
                } else {
                    Phase::Idle(section)
                }
            }
        };
    }

    pub fn frame(&self) -> PresenceFrame {
        let progress = |e: u32| e as f32 / self.phase_ms as f32;
        match self.phase {
            Phase::Idle(section) => PresenceFrame {
                section,
                offset: TransitionStyle::for_section(section).rest,
            },
            Phase::Exiting {
                from, elapsed_ms, ..
            } => PresenceFrame {
                section: from,
                offset: TransitionStyle::for_section(from).exiting(progress(elapsed_ms)),
            },
            Phase::Entering {
                section,
                elapsed_ms,
            } => PresenceFrame {
                section,
                offset: TransitionStyle::for_section(section).entering(progress(elapsed_ms)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_is_exit_then_enter() {
        let mut p = Presence::with_phase_ms(Section::Main, 200);
        p.set_target(Section::Projects);
        assert_eq!(p.mounted(), Section::Main);

        p.update(199);
        assert_eq!(p.mounted(), Section::Main);

        p.update(1);
        assert_eq!(p.mounted(), Section::Projects);
        assert_eq!(p.frame().offset, TransitionStyle::for_section(Section::Projects).enter_start);

        p.update(200);
        assert!(p.is_settled());
        assert_eq!(p.frame().offset, Offset::REST);
    }

    #[test]
    fn retarget_during_exit_keeps_exit_progress() {
        let mut p = Presence::with_phase_ms(Section::Main, 200);
        p.set_target(Section::Projects);
        p.update(120);
        p.set_target(Section::Contact);
        assert_eq!(
            p.phase(),
            Phase::Exiting {
                from: Section::Main,
                to: Section::Contact,
                elapsed_ms: 120
            }
        );
        p.update(80);
        assert_eq!(p.mounted(), Section::Contact);
    }

    #[test]
    fn retarget_during_enter_exits_the_entering_section() {
        let mut p = Presence::with_phase_ms(Section::Main, 200);
        p.set_target(Section::Experience);
        p.update(200);
        p.update(50);
        let before = p.frame().offset;

        p.set_target(Section::Main);
        let Phase::Exiting {
            from,
            to,
            elapsed_ms,
        } = p.phase()
        else {
            panic!("expected an exit, got {:?}", p.phase());
        };
        assert_eq!((from, to), (Section::Experience, Section::Main));
        // Early in the exit, not mirrored linearly to 150ms.
        assert!(elapsed_ms < 50, "exit starts at {elapsed_ms}ms");

        let after = p.frame().offset;
        assert_eq!(p.frame().section, Section::Experience);
        assert!((after.x - before.x).abs() < 0.02, "x {} -> {}", before.x, after.x);
        assert!(
            (after.opacity - before.opacity).abs() < 0.02,
            "opacity {} -> {}",
            before.opacity,
            after.opacity
        );
    }

    #[test]
    fn retarget_at_any_point_of_the_enter_is_continuous() {
        for section in [Section::Experience, Section::Projects, Section::Contact] {
            for enter_ms in (0..=200).step_by(10) {
                let mut p = Presence::with_phase_ms(Section::Main, 200);
                p.set_target(section);
                p.update(200);
                p.update(enter_ms);
                let before = p.frame().offset;
                p.set_target(Section::Main);
                let after = p.frame().offset;
                let jump = (after.x - before.x).abs() + (after.y - before.y).abs();
                assert!(jump < 0.03, "{section:?} at {enter_ms}ms jumped by {jump}");
            }
        }
    }

    #[test]
    fn retarget_to_mounted_section_while_idle_is_a_no_op() {
        let mut p = Presence::new(Section::Contact);
        p.set_target(Section::Contact);
        assert!(p.is_settled());
    }

    #[test]
    fn full_swap_fits_inside_cooldown() {
        let mut p = Presence::new(Section::Main);
        p.set_target(Section::Experience);
        let mut t = 0;
        while !p.is_settled() {
            p.update(16);
            t += 16;
        }
        assert!(t <= crate::types::COOLDOWN_MS);
    }
}
