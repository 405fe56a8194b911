//! Helpers for the editing surface around the highlighter
//!
//! The surface swaps its whole content for fresh markup on every edit, so
//! alongside the markup it needs a line-number gutter and the caret's
//! line/column for the status bar. Restoring the caret inside the new
//! markup stays with the surface.

use crate::highlighter::Highlighter;
use serde::{Deserialize, Serialize};

/// Number of `\n`-separated lines; empty text still has one line
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// Line-number gutter markup: `1<br>2<br>3`
pub fn line_gutter(text: &str) -> String {
    (1..=line_count(text))
        .map(|line| line.to_string())
        .collect::<Vec<_>>()
        .join("<br>")
}

/// Caret position as shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CursorPosition {
    /// 1-based line
    pub line: usize,

    /// 0-based column, in characters
    pub col: usize,
}

impl CursorPosition {
    /// Position right after `prefix`, the text between document start and caret
    pub fn from_prefix(prefix: &str) -> Self {
        let mut lines = prefix.split('\n');
        let last = lines.next_back().unwrap_or_default();

        Self {
            line: lines.count() + 1,
            col: last.chars().count(),
        }
    }

    /// Position of the caret after `offset` characters of `text`
    ///
    /// Offsets past the end land on the end of the text.
    pub fn at_offset(text: &str, offset: usize) -> Self {
        let byte_offset = text
            .char_indices()
            .nth(offset)
            .map_or(text.len(), |(index, _)| index);
        Self::from_prefix(&text[..byte_offset])
    }
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self { line: 1, col: 0 }
    }
}

/// Everything the surface redraws after an edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorFrame {
    /// Canonical language the text was highlighted as, if known
    pub language: Option<String>,

    /// Highlighted markup for the content area
    pub markup: String,

    /// Line-number gutter markup
    pub gutter: String,

    /// Number of lines
    pub line_count: usize,

    /// Caret position
    pub cursor: CursorPosition,
}

impl EditorFrame {
    /// Highlight `text` and compute gutter and caret for it
    ///
    /// `caret` is a character offset into `text`.
    pub fn render(highlighter: &Highlighter, text: &str, language: &str, caret: usize) -> Self {
        Self {
            language: highlighter
                .registry()
                .canonical(language)
                .map(str::to_string),
            markup: highlighter.highlight(text, language),
            gutter: line_gutter(text),
            line_count: line_count(text),
            cursor: CursorPosition::at_offset(text, caret),
        }
    }
}
