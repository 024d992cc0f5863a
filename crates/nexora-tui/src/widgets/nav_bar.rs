//! Nav bar widget — the one-line strip at the top of the screen.

use crate::theme::Theme;
use nexora_core::DisplayMode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::Widget,
};

/// Brand on the left, current display mode and key hints on the right.
pub struct NavBar<'a> {
    mode: DisplayMode,
    theme: &'a Theme,
}

impl<'a> NavBar<'a> {
    pub fn new(mode: DisplayMode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }
}

impl Widget for NavBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, self.theme.base);
        buf.set_line(
            area.x,
            area.y,
            &Line::from(Span::styled(" Nexora", self.theme.brand)),
            area.width,
        );

        let glyph = match self.mode {
            DisplayMode::Light => "☀ light",
            DisplayMode::Dark => "☾ dark",
        };
        let hint = format!(" {glyph}  t:mode  /:search  ?:help  q:quit ");
        let hint_x = area
            .right()
            .saturating_sub(hint.chars().count() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            self.theme.meta.add_modifier(Modifier::DIM),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;

    #[test]
    fn shows_current_mode() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 60, 1);

        let mut buf = Buffer::empty(area);
        NavBar::new(DisplayMode::Light, &theme).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.starts_with(" Nexora"));
        assert!(text.contains("☀ light  t:mode"));

        let mut buf = Buffer::empty(area);
        NavBar::new(DisplayMode::Dark, &theme).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("☾ dark  t:mode"));
    }
}
