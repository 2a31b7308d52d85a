//! Section navigation - pure, deterministic, and testable
//!
//! Owns the active [`Section`](crate::types::Section) and decides how it
//! responds to normalized direction events and explicit jump requests. Nothing
//! here touches a terminal, so the transition rules and their tests are
//! independent of how sections are drawn.
//!
//! # Module Structure
//!
//! - [`table`]: fixed `(section, direction) -> section` rows plus the `Up` fallback
//! - [`controller`]: [`NavigationController`] state machine
//! - [`transition`]: per-section slide/fade descriptors
//! - [`presence`]: exit-then-enter mounting of exactly one section
//! - [`affordance`]: on-screen entry and return arrows
//!
//! # Example
//!
//! ```
//! use tui_folio_nav::{NavRequest, NavigationController};
//! use tui_folio_types::{Direction, Section};
//!
//! let mut nav = NavigationController::new();
//! nav.apply(NavRequest::Direction(Direction::Left));
//! assert_eq!(nav.section(), Section::Experience);
//!
//! nav.apply(NavRequest::Jump(Section::Contact));
//! assert_eq!(nav.section(), Section::Contact);
//! ```

pub mod affordance;
pub mod controller;
pub mod presence;
pub mod table;
pub mod transition;

pub use tui_folio_types as types;

pub use affordance::{affordances, Affordance, AffordanceKind};
pub use controller::{ChangeCause, NavRequest, NavigationController, SectionChange};
pub use presence::{Phase, Presence, PresenceFrame};
pub use table::TransitionTable;
pub use transition::{Offset, TransitionStyle};
