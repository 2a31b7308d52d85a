//! Viewer state and event handling.
//!
//! `App` wires the input normalizer to the navigation controller and keeps
//! per-frame view state (scroll offset, chat overlay). It performs no I/O:
//! the binary feeds it terminal events and ticks, and carries out the
//! [`Effect`]s it returns.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent};
use tracing::{debug, info};

use crate::chat::{ChatReplyEvent, ChatSession, PendingRequest};
use crate::input::{
    map_mouse_event, should_quit, CellMetrics, InputNormalizer, PointerInput, ScrollRegion,
    TouchPoint, WheelDelta, WheelTarget,
};
use crate::nav::{NavRequest, NavigationController, SectionChange};
use crate::term::{
    hit_test, ChatView, FrameBuffer, PortfolioContent, Scene, ScrollMetrics, SectionView, Viewport,
};
use crate::types::Section;

/// Work the caller must carry out after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    SendChat(PendingRequest),
}

pub struct App {
    normalizer: InputNormalizer,
    nav: NavigationController,
    content: PortfolioContent,
    view: SectionView,
    chat_view: ChatView,
    metrics: CellMetrics,
    viewport: Viewport,
    scroll: u16,
    chat: ChatSession,
    chat_enabled: bool,
    chat_open: bool,
}

impl App {
    pub fn new(content: PortfolioContent, metrics: CellMetrics, viewport: Viewport) -> Self {
        Self {
            normalizer: InputNormalizer::new(),
            nav: NavigationController::new(),
            content,
            view: SectionView::default(),
            chat_view: ChatView,
            metrics,
            viewport,
            scroll: 0,
            chat: ChatSession::new(),
            chat_enabled: true,
            chat_open: false,
        }
    }

    pub fn with_chat_enabled(mut self, enabled: bool) -> Self {
        self.chat_enabled = enabled;
        self
    }

    pub fn section(&self) -> Section {
        self.nav.section()
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn normalizer(&self) -> &InputNormalizer {
        &self.normalizer
    }

    pub fn chat(&self) -> &ChatSession {
        &self.chat
    }

    pub fn is_chat_open(&self) -> bool {
        self.chat_open
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        self.scroll = self.scroll.min(self.scroll_metrics().max_scroll());
    }

    fn scroll_metrics(&self) -> ScrollMetrics {
        self.scroll_metrics_for(self.nav.section())
    }

    fn scroll_metrics_for(&self, section: Section) -> ScrollMetrics {
        self.view
            .scroll_metrics(section, &self.content, self.viewport)
    }

    /// Scroll geometry in pixels of the mounted section, when the pointer is
    /// over a body that overflows. During an exit the mounted section is the
    /// one leaving.
    fn scroll_region_at(&self, column: u16, row: u16) -> Option<ScrollRegion> {
        let metrics = self.scroll_metrics_for(self.nav.presence().mounted());
        let body = self.view.body_rect(self.viewport);
        if !metrics.is_scrollable() || !body.contains(column, row) {
            return None;
        }
        let row_px = self.metrics.cell_h_px;
        Some(ScrollRegion {
            scroll_top: self.scroll as f32 * row_px,
            scroll_left: 0.0,
            scroll_height: metrics.content_rows as f32 * row_px,
            client_height: metrics.visible_rows as f32 * row_px,
        })
    }

    fn navigate(&mut self, request: NavRequest) -> Option<SectionChange> {
        let change = self.nav.apply(request)?;
        self.scroll = 0;
        Some(change)
    }

    fn scroll_by(&mut self, rows: i32) {
        let max = self.scroll_metrics().max_scroll() as i32;
        self.scroll = (self.scroll as i32 + rows).clamp(0, max) as u16;
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Effect {
        if key.kind == KeyEventKind::Release {
            return Effect::None;
        }
        if self.chat_open {
            return self.handle_chat_key(key);
        }
        if should_quit(key) {
            return Effect::Quit;
        }

        let page = self.scroll_metrics().visible_rows.max(1) as i32;
        match key.code {
            KeyCode::Char('/') if self.chat_enabled => self.open_chat(),
            KeyCode::PageDown => self.scroll_by(page),
            KeyCode::PageUp => self.scroll_by(-page),
            KeyCode::Home => self.scroll = 0,
            KeyCode::End => self.scroll_by(i32::MAX / 2),
            code => {
                if let Some(direction) = self.normalizer.key(code).direction {
                    self.navigate(NavRequest::Direction(direction));
                }
            }
        }
        Effect::None
    }

    fn handle_chat_key(&mut self, key: KeyEvent) -> Effect {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Effect::Quit;
        }
        match key.code {
            KeyCode::Esc => self.close_chat(),
            KeyCode::Enter => {
                if let Some(request) = self.chat.submit_draft() {
                    return Effect::SendChat(request);
                }
            }
            KeyCode::Char(ch @ '1'..='4')
                if self.chat.is_fresh() && self.chat.draft().is_empty() =>
            {
                let index = ch as usize - '1' as usize;
                if let Some(request) = self.chat.submit_starter(index) {
                    return Effect::SendChat(request);
                }
            }
            KeyCode::Backspace => self.chat.pop_char(),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.chat.push_char(ch)
            }
            _ => {}
        }
        Effect::None
    }

    pub fn open_chat(&mut self) {
        info!("chat overlay opened");
        self.chat_open = true;
        self.normalizer.touch_cancel();
        self.normalizer.set_enabled(false);
    }

    pub fn close_chat(&mut self) {
        info!("chat overlay closed");
        self.chat_open = false;
        self.normalizer.set_enabled(true);
    }

    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if self.chat_open {
            return;
        }
        match map_mouse_event(&event, self.metrics) {
            PointerInput::TouchStart(point) => {
                self.normalizer.touch_start(point);
            }
            PointerInput::TouchEnd(point) => self.touch_end(point),
            PointerInput::Wheel { delta, column, row } => self.wheel(delta, column, row),
            PointerInput::Ignored => {}
        }
    }

    fn touch_end(&mut self, point: TouchPoint) {
        let outcome = self.normalizer.touch_end(point);
        if let Some(direction) = outcome.direction {
            self.navigate(NavRequest::Direction(direction));
            return;
        }
        let Some(tap) = outcome.tap else { return };
        let (column, row) = self.metrics.to_cell(tap);
        if let Some(item) = hit_test(self.nav.section(), self.viewport, column, row) {
            debug!(target_section = item.target.as_str(), "affordance activated");
            self.navigate(item.activate());
        }
    }

    fn wheel(&mut self, delta: WheelDelta, column: u16, row: u16) {
        let region = self.scroll_region_at(column, row);
        let target = region.map_or(WheelTarget::Surface, WheelTarget::Region);
        let outcome = self.normalizer.wheel(delta, target);

        if let Some(direction) = outcome.direction {
            self.navigate(NavRequest::Direction(direction));
        } else if region.is_some()
            && !outcome.prevent_default
            && delta.dy != 0.0
            && self.nav.presence().mounted() == self.nav.section()
        {
            self.scroll_by(if delta.dy > 0.0 { 1 } else { -1 });
        }
    }

    /// Jump straight to a section, as the on-screen controls do.
    pub fn jump_to(&mut self, section: Section) -> Option<SectionChange> {
        self.navigate(NavRequest::Jump(section))
    }

    /// Advance timers by one tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if let Some(direction) = self.normalizer.update(elapsed_ms) {
            self.navigate(NavRequest::Direction(direction));
        }
        self.nav.update(elapsed_ms);
    }

    pub fn on_chat_reply(&mut self, event: ChatReplyEvent) {
        self.chat.resolve(event.id, event.result);
    }

    pub fn render_into(&self, fb: &mut FrameBuffer) {
        let scene = Scene {
            frame: self.nav.frame(),
            active: self.nav.section(),
            scroll: self.scroll,
            content: &self.content,
            viewport: self.viewport,
        };
        self.view.render_into(&scene, fb);
        if self.chat_open {
            self.chat_view.render_into(&self.chat, self.viewport, fb);
        }
    }
}
