//! Terminal view layer.
//!
//! Renders the mounted section, its affordances and the chat overlay into a
//! framebuffer, and flushes framebuffers to the terminal. Only
//! [`renderer`] performs I/O; everything else can be unit-tested.

pub mod chat_view;
pub mod content;
pub mod fb;
pub mod renderer;
pub mod section_view;
pub mod text;

pub use tui_folio_chat as chat;
pub use tui_folio_nav as nav;
pub use tui_folio_types as types;

pub use chat_view::ChatView;
pub use content::PortfolioContent;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use section_view::{
    affordance_layout, hit_test, section_lines, Rect, Scene, ScrollMetrics, SectionView, Viewport,
};
