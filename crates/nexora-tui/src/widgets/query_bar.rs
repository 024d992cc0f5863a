//! Search bar widget — text input under the article list.
//!
//! # Editing
//!
//! - `Char(c)` inserts at the cursor.
//! - `Backspace` deletes the character before the cursor.
//! - `Nav(Left)` / `Nav(Right)` move the cursor.
//!
//! The bar only edits its own text. The App shell copies the text into the
//! view controller after every edit so the list re-filters on each keystroke.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct QueryBarState {
    /// The search text typed by the user.
    pub query: String,
    /// Byte offset of the cursor within `query`.
    pub cursor: usize,
}

impl QueryBarState {
    /// Replace the whole text and park the cursor at the end.
    pub fn set(&mut self, query: &str) {
        self.query = query.to_string();
        self.cursor = self.query.len();
    }

    /// Handle a key event from the app shell.
    ///
    /// Returns `true` when the text changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match event {
            AppEvent::Char(c) => {
                self.query.insert(self.cursor, *c);
                self.cursor += c.len_utf8();
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: char inserted");
                true
            }
            AppEvent::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                // Walk back one char boundary
                let prev = self.query[..self.cursor]
                    .char_indices()
                    .last()
                    .map(|(i, _)| i)
                    .unwrap_or(0);
                self.query.remove(prev);
                self.cursor = prev;
                tracing::debug!(query = %self.query, cursor = self.cursor, "query: backspace");
                true
            }
            AppEvent::Nav(Direction::Left) => {
                if self.cursor > 0 {
                    self.cursor = self.query[..self.cursor]
                        .char_indices()
                        .last()
                        .map(|(i, _)| i)
                        .unwrap_or(0);
                }
                false
            }
            AppEvent::Nav(Direction::Right) => {
                if self.cursor < self.query.len() {
                    self.cursor = self.query[self.cursor..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor + i)
                        .unwrap_or(self.query.len());
                }
                false
            }
            _ => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct QueryBar<'a> {
    state: &'a QueryBarState,
    focused: bool,
    /// `(matching, total)` article counts shown on the right.
    counts: (usize, usize),
    theme: &'a Theme,
}

impl<'a> QueryBar<'a> {
    pub fn new(
        state: &'a QueryBarState,
        focused: bool,
        counts: (usize, usize),
        theme: &'a Theme,
    ) -> Self {
        Self { state, focused, counts, theme }
    }

    /// Absolute terminal position of the text cursor within this widget's
    /// rendered area. Pass to `frame.set_cursor_position()` after rendering.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        // The block adds 1-cell borders; text starts at (area.x+1, area.y+1).
        let col = self.state.query[..self.state.cursor].chars().count() as u16;
        let x = (area.x + 1 + col).min(area.right().saturating_sub(1));
        let y = area.y + 1;
        (x, y)
    }
}

impl Widget for QueryBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Search ")
            .border_style(self.theme.border(self.focused))
            .style(self.theme.base);

        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(LayoutDir::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(16)])
            .split(inner);

        let query_line = if self.state.query.is_empty() && !self.focused {
            Line::from(Span::styled(
                "Search articles... (press /)",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.state.query.as_str())
        };
        Paragraph::new(query_line).render(chunks[0], buf);

        let (matching, total) = self.counts;
        Paragraph::new(Line::from(Span::styled(
            format!("{matching}/{total} articles"),
            self.theme.meta,
        )))
        .right_aligned()
        .render(chunks[1], buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
