//! TUI Folio (workspace facade crate).
//!
//! A terminal portfolio viewer: four sections navigated by swipe, trackpad,
//! wheel or arrow keys, with an optional chat overlay. The implementation
//! lives in dedicated crates under `crates/`; this package re-exports them
//! under short names and adds the application glue used by the binary.

pub use tui_folio_chat as chat;
pub use tui_folio_input as input;
pub use tui_folio_nav as nav;
pub use tui_folio_term as term;
pub use tui_folio_types as types;

pub mod app;
pub mod config;
pub mod logging;
