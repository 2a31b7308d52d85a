//! SectionView: maps the mounted section into a terminal framebuffer.
//!
//! This module is pure (no I/O). The four section renderers only differ in
//! the lines they produce; placement, scrolling and the slide/fade offset are
//! shared.

use arrayvec::ArrayVec;

use crate::content::PortfolioContent;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::nav::{affordances, Affordance, PresenceFrame};
use crate::text::{push_wrapped, Line, LineKind};
use crate::types::{Direction, Section};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.x && col < self.x + self.w && row >= self.y && row < self.y + self.h
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub frame: PresenceFrame,
    /// Controller section; decides which affordances are shown.
    pub active: Section,
    pub scroll: u16,
    pub content: &'a PortfolioContent,
    pub viewport: Viewport,
}

/// Content height versus visible height for the scrollable section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollMetrics {
    pub content_rows: u16,
    pub visible_rows: u16,
}

impl ScrollMetrics {
    pub fn max_scroll(&self) -> u16 {
        self.content_rows.saturating_sub(self.visible_rows)
    }

    pub fn is_scrollable(&self) -> bool {
        self.content_rows > self.visible_rows
    }
}

const BUTTON_W: u16 = 3;
const STATUS_HINT: &str = "←↑↓→ swipe/scroll/keys · / chat · q quit";

pub struct SectionView {
    margin_x: u16,
}

impl Default for SectionView {
    fn default() -> Self {
        Self { margin_x: 6 }
    }
}

impl SectionView {
    pub fn new(margin_x: u16) -> Self {
        Self { margin_x }
    }

    /// Area the section body is drawn in: between the top row and the status bar.
    pub fn body_rect(&self, viewport: Viewport) -> Rect {
        let x = self.margin_x.min(viewport.width / 4);
        Rect {
            x,
            y: 1,
            w: viewport.width.saturating_sub(2 * x),
            h: viewport.height.saturating_sub(2),
        }
    }

    pub fn scroll_metrics(
        &self,
        section: Section,
        content: &PortfolioContent,
        viewport: Viewport,
    ) -> ScrollMetrics {
        let body = self.body_rect(viewport);
        let lines = section_lines(section, content, body.w as usize);
        ScrollMetrics {
            content_rows: lines.len().min(u16::MAX as usize) as u16,
            visible_rows: body.h,
        }
    }

    pub fn render_into(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        let viewport = scene.viewport;
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let body = self.body_rect(viewport);
        let section = scene.frame.section;
        let offset = scene.frame.offset;
        let lines = section_lines(section, scene.content, body.w as usize);

        let dx = (offset.x * viewport.width as f32).round() as i32;
        let dy = (offset.y * viewport.height as f32).round() as i32;
        let centered = section.is_main();
        let top_pad = if centered {
            body.h.saturating_sub(lines.len() as u16) / 2
        } else {
            0
        };

        let visible = lines
            .iter()
            .skip(scene.scroll as usize)
            .take(body.h.saturating_sub(top_pad) as usize);
        for (i, line) in visible.enumerate() {
            let x = if centered {
                body.x as i32 + (body.w as i32 - line.width() as i32).max(0) / 2
            } else {
                body.x as i32
            };
            let y = (body.y + top_pad) as i32 + i as i32;
            let style = line.kind.style().with_opacity(offset.opacity);
            fb.put_str(x + dx, y + dy, &line.text, style);
        }

        self.draw_affordances(scene.active, viewport, fb);
        self.draw_status(scene, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, scene: &Scene<'_>) -> FrameBuffer {
        let mut fb = FrameBuffer::new(scene.viewport.width, scene.viewport.height);
        self.render_into(scene, &mut fb);
        fb
    }

    fn draw_affordances(&self, active: Section, viewport: Viewport, fb: &mut FrameBuffer) {
        let button = CellStyle {
            fg: Rgb::new(235, 235, 240),
            bg: Rgb::new(45, 45, 60),
            bold: true,
            dim: false,
        };
        let hint = LineKind::Muted.style();

        for (item, rect) in affordance_layout(active, viewport) {
            let label = format!("[{}]", item.direction.arrow());
            fb.put_str(rect.x as i32, rect.y as i32, &label, button);

            let Some(text) = item.hint else { continue };
            let len = text.chars().count() as i32;
            let (x, y) = match item.direction {
                Direction::Left => (rect.x as i32 + BUTTON_W as i32 + 1, rect.y as i32),
                Direction::Right => (rect.x as i32 - 1 - len, rect.y as i32),
                Direction::Down => (
                    (viewport.width as i32 - len) / 2,
                    rect.y as i32 - 1,
                ),
                Direction::Up => ((viewport.width as i32 - len) / 2, rect.y as i32 + 1),
            };
            fb.put_str(x, y, text, hint);
        }
    }

    fn draw_status(&self, scene: &Scene<'_>, fb: &mut FrameBuffer) {
        let viewport = scene.viewport;
        if viewport.height == 0 {
            return;
        }
        let y = viewport.height as i32 - 1;
        let bar = CellStyle {
            fg: Rgb::new(200, 200, 210),
            bg: Rgb::new(30, 30, 42),
            bold: false,
            dim: false,
        };
        fb.fill_rect(0, y, viewport.width, 1, ' ', bar);
        fb.put_str(1, y, scene.active.title(), bar.bold());
        let hint_x = viewport.width as i32 - STATUS_HINT.chars().count() as i32 - 1;
        fb.put_str(hint_x.max(14), y, STATUS_HINT, bar);
    }
}

/// Screen placement of the affordances visible for `active`.
pub fn affordance_layout(active: Section, viewport: Viewport) -> ArrayVec<(Affordance, Rect), 3> {
    let (w, h) = (viewport.width, viewport.height);
    let mid_y = h / 2;
    let center_x = w.saturating_sub(BUTTON_W) / 2;

    affordances(active)
        .into_iter()
        .map(|item| {
            let (x, y) = match item.direction {
                Direction::Left => (1, mid_y),
                Direction::Right => (w.saturating_sub(BUTTON_W + 1), mid_y),
                Direction::Down => (center_x, h.saturating_sub(3)),
                Direction::Up => (center_x, 0),
            };
            (item, Rect { x, y, w: BUTTON_W, h: 1 })
        })
        .collect()
}

/// Affordance under a clicked cell, if any.
pub fn hit_test(active: Section, viewport: Viewport, col: u16, row: u16) -> Option<Affordance> {
    affordance_layout(active, viewport)
        .into_iter()
        .find(|(_, rect)| rect.contains(col, row))
        .map(|(item, _)| item)
}

/// Lines for one section at the given body width.
pub fn section_lines(section: Section, content: &PortfolioContent, width: usize) -> Vec<Line> {
    let mut lines = Vec::new();
    match section {
        Section::Main => {
            if let Some(badge) = &content.badge {
                lines.push(Line::new(LineKind::Accent, format!("● {badge}")));
                lines.push(Line::blank());
            }
            lines.push(Line::new(LineKind::Title, content.name.clone()));
            push_wrapped(&mut lines, LineKind::Heading, "", &content.headline, width);
            lines.push(Line::blank());
            push_wrapped(&mut lines, LineKind::Body, "", &content.tagline, width);
            if !content.links.is_empty() {
                lines.push(Line::blank());
                let links: Vec<_> = content.links.iter().map(|l| l.label.as_str()).collect();
                lines.push(Line::new(LineKind::Muted, links.join("  ·  ")));
            }
            if !content.about.is_empty() {
                lines.push(Line::blank());
                push_wrapped(&mut lines, LineKind::Muted, "", &content.about, width);
            }
        }
        Section::Experience => {
            lines.push(Line::new(LineKind::Title, "Experience"));
            for entry in &content.experience {
                lines.push(Line::blank());
                push_wrapped(
                    &mut lines,
                    LineKind::Heading,
                    "",
                    &format!("{} · {}", entry.role, entry.company),
                    width,
                );
                lines.push(Line::new(LineKind::Muted, entry.period.clone()));
                for highlight in &entry.highlights {
                    push_wrapped(&mut lines, LineKind::Body, "• ", highlight, width);
                }
            }
        }
        Section::Projects => {
            lines.push(Line::new(LineKind::Title, "Projects"));
            for project in &content.projects {
                lines.push(Line::blank());
                lines.push(Line::new(LineKind::Heading, project.name.clone()));
                push_wrapped(&mut lines, LineKind::Body, "", &project.description, width);
                if !project.tech.is_empty() {
                    push_wrapped(&mut lines, LineKind::Accent, "", &project.tech.join(" · "), width);
                }
            }
            if !content.skills.is_empty() {
                lines.push(Line::blank());
                lines.push(Line::new(LineKind::Title, "Skills"));
                for group in &content.skills {
                    let prefix = format!("{}: ", group.name);
                    push_wrapped(&mut lines, LineKind::Body, &prefix, &group.items.join(", "), width);
                }
            }
        }
        Section::Contact => {
            lines.push(Line::new(LineKind::Title, "Contact"));
            lines.push(Line::blank());
            lines.push(Line::new(LineKind::Body, "Get in touch:"));
            for item in &content.contact {
                let prefix = format!("{:<10}", item.label);
                push_wrapped(&mut lines, LineKind::Body, &prefix, &item.url, width);
            }
            lines.push(Line::blank());
            lines.push(Line::new(
                LineKind::Muted,
                "Press / to ask the portfolio assistant a question.",
            ));
        }
    }
    lines
}
