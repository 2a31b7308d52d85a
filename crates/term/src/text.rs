//! Styled text lines and word wrapping.

use crate::fb::{CellStyle, Rgb};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Title,
    Heading,
    Body,
    Muted,
    Accent,
    Blank,
}

impl LineKind {
    pub fn style(self) -> CellStyle {
        match self {
            LineKind::Title => CellStyle::fg(Rgb::new(245, 245, 250)).bold(),
            LineKind::Heading => CellStyle::fg(Rgb::new(170, 140, 255)).bold(),
            LineKind::Body => CellStyle::default(),
            LineKind::Muted => CellStyle::fg(Rgb::new(130, 130, 145)),
            LineKind::Accent => CellStyle::fg(Rgb::new(52, 235, 119)),
            LineKind::Blank => CellStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
}

impl Line {
    pub fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn blank() -> Self {
        Self::new(LineKind::Blank, "")
    }

    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Greedy word wrap. Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut line = String::new();
    let mut len = 0usize;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if len > 0 {
                out.push(std::mem::take(&mut line));
                len = 0;
            }
            let rest = word.split_off(width);
            out.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }
        let needed = if len == 0 { word.len() } else { len + 1 + word.len() };
        if needed > width {
            out.push(std::mem::take(&mut line));
            len = 0;
        }
        if len > 0 {
            line.push(' ');
            len += 1;
        }
        line.extend(word.iter());
        len += word.len();
    }
    if len > 0 {
        out.push(line);
    }
    out
}

/// Wrap `text` and push each piece as a line of `kind`, indenting
/// continuation lines under the first.
pub fn push_wrapped(lines: &mut Vec<Line>, kind: LineKind, prefix: &str, text: &str, width: usize) {
    let indent = " ".repeat(prefix.chars().count());
    let avail = width.saturating_sub(indent.len()).max(1);
    for (i, piece) in wrap(text, avail).into_iter().enumerate() {
        let lead = if i == 0 { prefix } else { indent.as_str() };
        lines.push(Line::new(kind, format!("{lead}{piece}")));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn splits_words_longer_than_width() {
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn continuation_lines_are_indented() {
        let mut lines = Vec::new();
        push_wrapped(&mut lines, LineKind::Body, "• ", "one two three", 9);
        let texts: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["• one two", "  three"]);
    }
}
