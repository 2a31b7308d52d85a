//! Modal chat overlay drawn over the mounted section.

use crate::chat::{ChatSession, Role, STARTER_PROMPTS};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::section_view::{Rect, Viewport};
use crate::text::{push_wrapped, Line, LineKind};

const PLACEHOLDER: &str = "Enter a prompt here";
const THINKING: &str = "Thinking…";
const TITLE: &str = " Ask me anything · Enter send · Esc close ";
const STARTER_HEADING: &str = "Ask me anything! Press 1-4 to pick a question:";

#[derive(Debug, Default)]
pub struct ChatView;

impl ChatView {
    pub fn panel_rect(&self, viewport: Viewport) -> Rect {
        let w = viewport.width.saturating_sub(4).min(90);
        let h = viewport.height.saturating_sub(4);
        Rect {
            x: (viewport.width - w) / 2,
            y: (viewport.height - h) / 2,
            w,
            h,
        }
    }

    /// Transcript lines, oldest first.
    pub fn transcript(&self, session: &ChatSession, width: usize) -> Vec<Line> {
        let mut lines = Vec::new();
        if session.is_fresh() {
            lines.push(Line::new(LineKind::Heading, STARTER_HEADING));
            lines.push(Line::blank());
            for (i, prompt) in STARTER_PROMPTS.iter().enumerate() {
                push_wrapped(&mut lines, LineKind::Accent, &format!("{}. ", i + 1), prompt, width);
            }
            return lines;
        }
        for message in session.messages() {
            let (kind, prefix) = match message.role {
                Role::User => (LineKind::Heading, "you › "),
                Role::Assistant => (LineKind::Body, "    › "),
            };
            push_wrapped(&mut lines, kind, prefix, &message.content, width);
            lines.push(Line::blank());
        }
        if session.is_thinking() {
            lines.push(Line::new(LineKind::Muted, format!("    › {THINKING}")));
        }
        lines
    }

    pub fn render_into(&self, session: &ChatSession, viewport: Viewport, fb: &mut FrameBuffer) {
        let panel = self.panel_rect(viewport);
        if panel.w < 8 || panel.h < 5 {
            return;
        }

        let bg = Rgb::new(19, 19, 20);
        let base = CellStyle {
            fg: Rgb::new(227, 227, 227),
            bg,
            bold: false,
            dim: false,
        };
        let (x, y) = (panel.x as i32, panel.y as i32);
        fb.fill_rect(x, y, panel.w, panel.h, ' ', base);
        fb.draw_box(x, y, panel.w, panel.h, base);
        fb.put_str(x + 2, y, TITLE, base.bold());

        let inner_w = panel.w.saturating_sub(4);
        // Rows between the top border and the input row / bottom border.
        let log_rows = panel.h.saturating_sub(4) as usize;
        let transcript = self.transcript(session, inner_w as usize);
        let skip = transcript.len().saturating_sub(log_rows);
        for (i, line) in transcript.iter().skip(skip).enumerate() {
            let mut style = line.kind.style();
            style.bg = bg;
            fb.put_str(x + 2, y + 1 + i as i32, &line.text, style);
        }

        let input_y = y + panel.h as i32 - 2;
        fb.put_str(x + 1, input_y - 1, &"─".repeat(inner_w as usize + 2), base);
        fb.put_str(x + 2, input_y, "> ", base.bold());
        if session.draft().is_empty() {
            fb.put_str(x + 4, input_y, PLACEHOLDER, base.with_opacity(0.5));
        } else {
            // Keep the tail of long drafts visible.
            let avail = inner_w.saturating_sub(3) as usize;
            let chars: Vec<char> = session.draft().chars().collect();
            let tail: String = chars[chars.len().saturating_sub(avail)..].iter().collect();
            fb.put_str(x + 4, input_y, &format!("{tail}▏"), base);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::FALLBACK_REPLY;

    fn render(session: &ChatSession) -> String {
        let viewport = Viewport::new(60, 20);
        let mut fb = FrameBuffer::new(60, 20);
        ChatView.render_into(session, viewport, &mut fb);
        (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect()
    }

    #[test]
    fn empty_session_shows_placeholder() {
        assert!(render(&ChatSession::new()).contains(PLACEHOLDER));
    }

    #[test]
    fn fresh_session_lists_numbered_starters() {
        let transcript = ChatView.transcript(&ChatSession::new(), 200);
        assert_eq!(transcript[0].text, STARTER_HEADING);
        for (i, prompt) in STARTER_PROMPTS.iter().enumerate() {
            let expected = format!("{}. {prompt}", i + 1);
            assert!(transcript.iter().any(|l| l.text == expected), "missing {expected}");
        }

        let mut session = ChatSession::new();
        session.submit("hi").unwrap();
        let transcript = ChatView.transcript(&session, 200);
        assert!(transcript.iter().all(|l| l.text != STARTER_HEADING));
    }

    #[test]
    fn pending_request_shows_thinking_indicator() {
        let mut session = ChatSession::new();
        session.submit("hello there").unwrap();
        let text = render(&session);
        assert!(text.contains("you › hello there"));
        assert!(text.contains(THINKING));
    }

    #[test]
    fn failed_reply_renders_fallback_text() {
        let mut session = ChatSession::new();
        let req = session.submit("hello").unwrap();
        session.resolve(req.id, Err(crate::chat::ChatError::Closed));
        let transcript = ChatView.transcript(&session, 200);
        assert!(transcript.iter().any(|l| l.text.contains(FALLBACK_REPLY)));
    }

    #[test]
    fn draft_replaces_placeholder() {
        let mut session = ChatSession::new();
        for ch in "typing".chars() {
            session.push_char(ch);
        }
        let text = render(&session);
        assert!(text.contains("> typing"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
