//! Article list widget — the listing view of summary cards.
//!
//! # Navigation (while the list is shown)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Select previous card |
//! | `↓` / `j` | Select next card |
//! | `Enter` / `→` / `l` | Open the selected article (handled by the App shell) |
//!
//! Each card shows the formatted date and read time, the title, the excerpt,
//! and the tags, plus a trending badge when enabled.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use nexora_core::{date::format_date, Article};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Cursor over the currently visible (filtered) articles.
#[derive(Debug, Default)]
pub struct ArticleListState {
    pub cursor: usize,
}

impl ArticleListState {
    /// Move the cursor for a navigation event. `len` is the number of
    /// visible articles.
    pub fn handle(&mut self, event: &AppEvent, len: usize) {
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "list: cursor up");
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "list: cursor down");
            }
            _ => {}
        }
    }

    /// Keep the cursor inside `0..len` after the visible set shrinks.
    pub fn clamp(&mut self, len: usize) {
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

/// Display options shared by the list and detail views.
#[derive(Debug, Clone)]
pub struct CardOptions {
    pub date_format: String,
    pub show_trending: bool,
}

/// `21 Oct 2025 • 6 min read`
pub fn meta_line(article: &Article, date_format: &str) -> String {
    format!(
        "{} • {} min read",
        format_date(&article.date, date_format),
        article.read_time
    )
}

fn card_lines(article: &Article, opts: &CardOptions, theme: &Theme) -> Vec<Line<'static>> {
    let mut badges: Vec<Span<'static>> = Vec::new();
    for tag in &article.tags {
        if !badges.is_empty() {
            badges.push(Span::raw(" "));
        }
        badges.push(Span::styled(format!(" # {tag} "), theme.tag));
    }
    if opts.show_trending && article.trendy {
        badges.push(Span::styled("  ▲ Trending", theme.trending));
    }

    vec![
        Line::from(Span::styled(meta_line(article, &opts.date_format), theme.meta)),
        Line::from(Span::styled(article.title.clone(), theme.title)),
        Line::from(Span::styled(article.excerpt.clone(), theme.excerpt)),
        Line::from(badges),
        Line::default(),
    ]
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ArticleList<'a> {
    articles: &'a [&'a Article],
    state: &'a ArticleListState,
    query: &'a str,
    focused: bool,
    opts: &'a CardOptions,
    theme: &'a Theme,
}

impl<'a> ArticleList<'a> {
    pub fn new(
        articles: &'a [&'a Article],
        state: &'a ArticleListState,
        query: &'a str,
        focused: bool,
        opts: &'a CardOptions,
        theme: &'a Theme,
    ) -> Self {
        Self { articles, state, query, focused, opts, theme }
    }
}

impl Widget for ArticleList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" Explore Modern Tech & AI Tools ")
            .border_style(self.theme.border(self.focused))
            .style(self.theme.base);

        let inner = block.inner(area);
        block.render(area, buf);

        if self.articles.is_empty() {
            let msg = format!("No articles match \"{}\".", self.query);
            Paragraph::new(Line::from(Span::styled(
                msg,
                Style::default().add_modifier(Modifier::DIM),
            )))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .articles
            .iter()
            .map(|article| ListItem::new(Text::from(card_lines(article, self.opts, self.theme))))
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.selected)
            .highlight_symbol("▌ ");

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
