//! Article view widget — the detail pane for one open article.
//!
//! The body is parsed into [`ContentBlock`]s on every draw; blocks are never
//! cached between renders. Scrolling is line-based:
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k`, `↓` / `j` | Scroll one line |
//! | `PageUp` / `Ctrl+u`, `PageDown` / `Ctrl+d` | Scroll one page |
//! | `Esc` / `←` / `h` / `Backspace` | Back to the list (handled by the App shell) |

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use crate::widgets::article_list::{meta_line, CardOptions};
use nexora_core::{content, Article, ContentBlock};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

const PAGE_STEP: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ArticleViewState {
    /// Lines scrolled off the top.
    pub scroll: u16,
}

impl ArticleViewState {
    /// Scroll for a navigation event. `line_count` is the number of lines
    /// [`detail_lines`] produces; the last line is the furthest the view can
    /// scroll.
    pub fn handle(&mut self, event: &AppEvent, line_count: usize) {
        let max_scroll = u16::try_from(line_count.saturating_sub(1)).unwrap_or(u16::MAX);
        let next = match event {
            AppEvent::Nav(Direction::Up) => self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll.saturating_sub(PAGE_STEP),
            AppEvent::ScrollDown => self.scroll.saturating_add(PAGE_STEP),
            _ => return,
        };
        self.scroll = next.min(max_scroll);
        tracing::debug!(scroll = self.scroll, max_scroll, "detail: scroll");
    }

    pub fn reset(&mut self) {
        self.scroll = 0;
    }
}

// ---------------------------------------------------------------------------
// Line building
// ---------------------------------------------------------------------------

/// Header plus body lines for `article`, one blank line between blocks.
pub fn detail_lines(article: &Article, opts: &CardOptions, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(article.title.clone(), theme.title)),
        Line::from(Span::styled(meta_line(article, &opts.date_format), theme.meta)),
        Line::from(Span::styled("─".repeat(40), theme.border_unfocused)),
        Line::default(),
    ];

    // Blocks are keyed by position only; nothing here depends on identity.
    for block in content::parse(&article.content) {
        match block {
            ContentBlock::Heading { text } => {
                lines.extend(
                    text.split('\n')
                        .map(|l| Line::from(Span::styled(l.to_string(), theme.heading))),
                );
            }
            ContentBlock::List { items } => {
                lines.extend(items.into_iter().map(|item| {
                    Line::from(vec![Span::styled("  • ", theme.bullet), Span::raw(item)])
                }));
            }
            ContentBlock::Paragraph { text } => {
                lines.extend(text.split('\n').map(|l| Line::from(l.to_string())));
            }
        }
        lines.push(Line::default());
    }
    lines
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ArticleView<'a> {
    article: &'a Article,
    state: &'a ArticleViewState,
    opts: &'a CardOptions,
    theme: &'a Theme,
}

impl<'a> ArticleView<'a> {
    pub fn new(
        article: &'a Article,
        state: &'a ArticleViewState,
        opts: &'a CardOptions,
        theme: &'a Theme,
    ) -> Self {
        Self { article, state, opts, theme }
    }
}

impl Widget for ArticleView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(" ← Back (Esc) ")
            .border_style(self.theme.border_focused)
            .style(self.theme.base);

        let lines = detail_lines(self.article, self.opts, self.theme);
        let max_scroll = u16::try_from(lines.len().saturating_sub(1)).unwrap_or(u16::MAX);

        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll.min(max_scroll), 0))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
