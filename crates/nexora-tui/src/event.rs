//! Key handling for the reader: crossterm input becomes an [`AppEvent`].
//!
//! The App shell never matches on crossterm types. It calls [`to_app_event`]
//! while the list or an article has focus, and [`to_app_event_insert`] while
//! the search bar or the `:` line is being typed into.
//!
//! # Bindings outside text input
//!
//! | Key(s)                   | Event          | Effect in the reader                 |
//! |--------------------------|----------------|--------------------------------------|
//! | `q`, `Ctrl+c`            | `Quit`         | leave nexora                         |
//! | `/`, `Tab`               | `QueryFocus`, `FocusNext` | jump into the search bar  |
//! | `t`                      | `ToggleMode`   | swap light and dark themes           |
//! | `↑ k` / `↓ j`            | `Nav(Up/Down)` | move the card cursor, scroll article |
//! | `→ l` / `Enter`          | `Nav(Right)`, `Enter` | open the card under the cursor |
//! | `← h` / `Esc` / `Backspace` | `Nav(Left)`, `Escape`, `Backspace` | back to the list |
//! | `PageUp`/`Ctrl+u`, `PageDown`/`Ctrl+d` | `ScrollUp`, `ScrollDown` | page the article |
//! | other printable keys     | `Char(c)`      | `?` help, `:` command line           |
//! | terminal resize          | `Resize(w, h)` | redraw                               |
//!
//! # While typing
//!
//! Letters, `/`, `q` and `t` are plain `Char`s so they can appear in a query.
//! Arrow keys still move the text cursor; `Ctrl+c`, `Esc`, `Enter`, `Tab` and
//! `Backspace` keep their meaning.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

/// Cardinal direction for list navigation and text-cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// A semantic application event derived from a raw crossterm [`Event`].
///
/// Widgets receive `AppEvent` values — they never inspect crossterm types
/// directly. The App shell routes them based on focus and view mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Exit the application.
    Quit,
    /// Leave the focused text input (Tab).
    FocusNext,
    /// Transfer focus to the search bar.
    QueryFocus,
    /// Flip between light and dark display mode.
    ToggleMode,
    /// Page the detail view up.
    ScrollUp,
    /// Page the detail view down.
    ScrollDown,
    /// Move the list selection, scroll, open (right) or go back (left).
    Nav(Direction),
    /// A printable character forwarded to the active text input.
    Char(char),
    /// Delete before the cursor, or go back from the detail view.
    Backspace,
    /// Open the selected article or confirm the active input.
    Enter,
    /// The terminal was resized to the given (width, height).
    Resize(u16, u16),
    /// Dismiss the active modal, or go back from the detail view.
    Escape,
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] (normal / navigation mode).
///
/// Returns `None` for events that carry no semantic meaning for the
/// application (mouse events, focus changes, unbound keys).
pub fn to_app_event(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key(key),
        _ => None,
    }
}

/// Map a raw crossterm [`Event`] to an [`AppEvent`] for text-input ("insert") mode.
///
/// Call this variant whenever a text-input widget (search bar, command bar)
/// has focus.
pub fn to_app_event_insert(event: Event) -> Option<AppEvent> {
    match event {
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        Event::Key(key) => map_key_insert(key),
        _ => None,
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Quit — q (normal mode) or Ctrl+c anywhere
        Char('q') if key.modifiers == Mod::NONE => Some(AppEvent::Quit),
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char('/') if key.modifiers == Mod::NONE => Some(AppEvent::QueryFocus),

        Char('t') if key.modifiers == Mod::NONE => Some(AppEvent::ToggleMode),

        PageUp => Some(AppEvent::ScrollUp),
        PageDown => Some(AppEvent::ScrollDown),
        Char('u') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollUp),
        Char('d') if key.modifiers == Mod::CONTROL => Some(AppEvent::ScrollDown),

        Up | Char('k') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Up)),
        Down | Char('j') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Down)),
        Left | Char('h') if key.modifiers == Mod::NONE => Some(AppEvent::Nav(Direction::Left)),
        Right | Char('l') if key.modifiers == Mod::NONE => {
            Some(AppEvent::Nav(Direction::Right))
        }

        // Remaining printable characters (`?`, `:` and friends)
        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

/// Key mapping for text-input / insert mode.
///
/// All printable characters (with or without Shift) forward as `Char`.
/// Arrow keys produce `Nav` so ← / → still move the text cursor.
fn map_key_insert(key: KeyEvent) -> Option<AppEvent> {
    use KeyCode::*;
    use KeyModifiers as Mod;

    match key.code {
        // Ctrl+c always quits, even while typing
        Char('c') if key.modifiers == Mod::CONTROL => Some(AppEvent::Quit),

        Up => Some(AppEvent::Nav(Direction::Up)),
        Down => Some(AppEvent::Nav(Direction::Down)),
        Left => Some(AppEvent::Nav(Direction::Left)),
        Right => Some(AppEvent::Nav(Direction::Right)),

        Tab if key.modifiers == Mod::NONE => Some(AppEvent::FocusNext),

        Char(c) if key.modifiers == Mod::NONE || key.modifiers == Mod::SHIFT => {
            Some(AppEvent::Char(c))
        }

        Backspace if key.modifiers == Mod::NONE => Some(AppEvent::Backspace),
        Enter if key.modifiers == Mod::NONE => Some(AppEvent::Enter),
        Esc => Some(AppEvent::Escape),

        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
