//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction},
    theme::Theme,
    widgets::{
        article_list::{ArticleList, ArticleListState, CardOptions},
        article_view::{detail_lines, ArticleView, ArticleViewState},
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        nav_bar::NavBar,
        query_bar::{QueryBar, QueryBarState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use nexora_core::{config::Config, DisplayMode, View, ViewController, ViewMode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The list or the open article, depending on the view mode.
    List,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub controller: ViewController,
    pub mode: DisplayMode,
    pub theme: Theme,
    pub cards: CardOptions,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub list: ArticleListState,
    pub detail: ArticleViewState,
    pub query: QueryBarState,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    pub fn new(controller: ViewController, mode: DisplayMode, config: &Config) -> Self {
        let mut query = QueryBarState::default();
        query.set(controller.query());
        Self {
            controller,
            mode,
            theme: Theme::for_mode(mode),
            cards: CardOptions {
                date_format: config.ui.date_format.clone(),
                show_trending: config.ui.show_trending,
            },
            focus: Focus::List,
            prev_focus: Focus::List,
            list: ArticleListState::default(),
            detail: ArticleViewState::default(),
            query,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        }
    }

    /// Switch display mode and reload the matching theme.
    pub fn set_mode(&mut self, mode: DisplayMode) {
        tracing::debug!(from = %self.mode, to = %mode, "display mode");
        self.mode = mode;
        self.theme = Theme::for_mode(mode);
    }

    fn open_selected(&mut self) {
        let id = self
            .controller
            .visible_articles()
            .get(self.list.cursor)
            .map(|a| a.id.clone());
        if let Some(id) = id {
            if self.controller.open_article(id).is_ok() {
                self.detail.reset();
            }
        }
    }

    fn go_back(&mut self) {
        self.controller.go_back();
        self.detail.reset();
    }

    /// Lines in the open article's detail view, zero on the listing.
    fn detail_line_count(&self) -> usize {
        self.controller
            .selected_article()
            .map(|article| detail_lines(article, &self.cards, &self.theme).len())
            .unwrap_or(0)
    }

    fn query_changed(&mut self) {
        self.controller.set_query(self.query.query.clone());
        self.list.clamp(self.controller.visible_articles().len());
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(controller: ViewController, mode: DisplayMode, config: &Config) -> Self {
        App {
            state: AppState::new(controller, mode, config),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key)
                        if key.kind == crossterm::event::KeyEventKind::Press =>
                    {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(
                                focus = ?self.state.focus,
                                event = ?ev,
                                "key event"
                            );
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Quit => s.quit = true,
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        // The search bar owns every key except the ones that leave it.
        if s.focus == Focus::QueryBar {
            match event {
                AppEvent::Quit => s.quit = true,
                AppEvent::Escape | AppEvent::FocusNext | AppEvent::Enter => {
                    tracing::debug!("focus: QueryBar -> List");
                    s.focus = Focus::List;
                }
                AppEvent::Nav(Direction::Up) | AppEvent::Nav(Direction::Down) => {
                    let len = s.controller.visible_articles().len();
                    s.list.handle(&event, len);
                }
                AppEvent::Resize(_, _) => {}
                other => {
                    if s.query.handle(&other) {
                        s.query_changed();
                    }
                }
            }
            return;
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            AppEvent::ToggleMode => {
                let next = s.mode.toggled();
                s.set_mode(next);
            }

            // The search bar only exists on the listing
            AppEvent::QueryFocus | AppEvent::FocusNext => {
                if s.controller.mode() == ViewMode::Listing {
                    tracing::debug!("focus -> QueryBar");
                    s.focus = Focus::QueryBar;
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.controller.mode() {
                ViewMode::Listing => match other {
                    AppEvent::Enter | AppEvent::Nav(Direction::Right) => s.open_selected(),
                    AppEvent::Escape if !s.query.query.is_empty() => {
                        s.query.set("");
                        s.query_changed();
                    }
                    nav => {
                        let len = s.controller.visible_articles().len();
                        s.list.handle(&nav, len);
                    }
                },
                ViewMode::Detail => match other {
                    AppEvent::Escape | AppEvent::Backspace | AppEvent::Nav(Direction::Left) => {
                        s.go_back();
                    }
                    scroll => {
                        let line_count = s.detail_line_count();
                        s.detail.handle(&scroll, line_count);
                    }
                },
            },
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(ratatui::widgets::Block::new().style(state.theme.base), area);

    let view = state.controller.view();
    let listing = matches!(view, View::Listing { .. });

    // Vertical: 1-line nav bar | body | 3-line search bar (listing only)
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(if listing { 3 } else { 0 }),
        ])
        .split(area);

    frame.render_widget(NavBar::new(state.mode, &state.theme), vert[0]);

    match view {
        View::Listing { query, articles } => {
            let total = state.controller.store().len();
            frame.render_widget(
                ArticleList::new(
                    &articles,
                    &state.list,
                    query,
                    state.focus == Focus::List,
                    &state.cards,
                    &state.theme,
                ),
                vert[1],
            );
            frame.render_widget(
                QueryBar::new(
                    &state.query,
                    state.focus == Focus::QueryBar,
                    (articles.len(), total),
                    &state.theme,
                ),
                vert[2],
            );
        }
        View::Detail(article) => {
            frame.render_widget(
                ArticleView::new(article, &state.detail, &state.cards, &state.theme),
                vert[1],
            );
        }
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
        return; // cursor is set; skip query-bar cursor below
    }

    // Position the terminal cursor when the query bar is focused
    if state.focus == Focus::QueryBar && listing {
        let qb = QueryBar::new(&state.query, true, (0, 0), &state.theme);
        let (cx, cy) = qb.cursor_position(vert[2]);
        frame.set_cursor_position((cx, cy));
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
