// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::app::{AppState, Focus};
use nexora_core::DisplayMode;

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Close the app
    Quit,
    // Display help
    Help,
    // Switch display mode; `None` toggles
    Mode(Option<DisplayMode>),
    // Open an article by id
    Open(String),
    // Return to the listing
    Back,
    // Replace the search text in either view; empty clears it
    Search(String),
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "back" => Ok(Command::Back),
            "mode" => {
                if rest.is_empty() {
                    Ok(Command::Mode(None))
                } else {
                    rest.parse::<DisplayMode>()
                        .map(|m| Command::Mode(Some(m)))
                        .map_err(|e| e.to_string())
                }
            }
            "open" => {
                if rest.is_empty() {
                    Err("usage: open <article-id>".to_string())
                } else {
                    Ok(Command::Open(rest.to_string()))
                }
            }
            "search" => Ok(Command::Search(rest.to_string())),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
///
/// A command that cannot be carried out leaves its message in the command
/// bar and reopens it so the user sees what went wrong.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            s.quit = true;
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Mode(target) => {
            let next = target.unwrap_or_else(|| s.mode.toggled());
            s.set_mode(next);
        }
        Command::Open(id) => {
            if let Err(err) = s.controller.open_article(id) {
                s.command_bar.error = Some(err.to_string());
                s.prev_focus = s.focus;
                s.focus = Focus::Command;
            } else {
                s.detail.reset();
                s.focus = Focus::List;
            }
        }
        Command::Back => {
            s.controller.go_back();
            s.detail.reset();
        }
        Command::Search(text) => {
            s.query.set(&text);
            s.controller.set_query(text);
            s.list.clamp(s.controller.visible_articles().len());
        }
    }
}
