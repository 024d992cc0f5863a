//! Ratatui widgets for the nexora TUI.

pub mod article_list;
pub mod article_view;
pub mod command_bar;
pub mod help;
pub mod nav_bar;
pub mod query_bar;

/// Flatten a rendered buffer into newline-separated rows for assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width.max(1))
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
