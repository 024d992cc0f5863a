//! nexora TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use nexora_core::{config::Config, DisplayMode, ViewController};

/// Start the TUI over `controller` in the given display mode.
pub fn run(controller: ViewController, mode: DisplayMode, config: &Config) -> anyhow::Result<()> {
    tracing::info!(articles = controller.store().len(), mode = %mode, "starting tui");
    App::new(controller, mode, config).run()
}
