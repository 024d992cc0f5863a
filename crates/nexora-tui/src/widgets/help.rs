//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("/", "Focus the search bar"),
    ("Escape / Tab / Enter", "Leave the search bar"),
    ("↑ k  /  ↓ j", "Select card or scroll article"),
    ("Enter  /  → l", "Open the selected article"),
    ("Esc / ← h / Backspace", "Back to the list"),
    ("PageUp  /  Ctrl+u", "Page article up"),
    ("PageDown / Ctrl+d", "Page article down"),
    ("t", "Toggle light / dark mode"),
    (":", "Command line (open, back, search, mode, q)"),
    ("?", "Toggle this help popup"),
];

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(72, BINDINGS.len() as u16 + 2, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" nexora — keybindings (? to close) ")
            .border_style(self.theme.border_focused)
            .style(self.theme.base);

        let inner = block.inner(popup);
        block.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<24}", key),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(*desc),
                ])
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_fits_inside_small_areas() {
        let area = Rect::new(0, 0, 40, 10);
        let r = centered_rect(72, 13, area);
        assert_eq!(r, Rect::new(0, 0, 40, 10));

        let r = centered_rect(20, 4, Rect::new(0, 0, 40, 10));
        assert_eq!(r, Rect::new(10, 3, 20, 4));
    }
}
